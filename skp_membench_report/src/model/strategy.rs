//!
//! The optimization strategy under benchmark.
//!

use std::str::FromStr;

///
/// The optimization strategy under benchmark.
///
/// The order of variants is the order of columns in reports.
///
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Strategy {
    /// The recording is replayed as captured.
    #[serde(rename = "NO_OPT")]
    NoOpt,
    /// The recording is optimized with the existing `SkRecordOptimize` pass.
    #[serde(rename = "SKIA_RECORD_OPTS")]
    SkiaRecordOpts,
    /// The recording is optimized with the existing `SkRecordOptimize2` pass.
    #[serde(rename = "SKIA_RECORD_OPTS_2")]
    SkiaRecordOpts2,
    /// The recording is optimized with the pass under evaluation.
    #[serde(rename = "SKI_PASS")]
    SkiPass,
}

impl Strategy {
    /// The number of strategies.
    pub const COUNT: usize = 4;

    /// All strategies in report order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::NoOpt,
        Self::SkiaRecordOpts,
        Self::SkiaRecordOpts2,
        Self::SkiPass,
    ];

    ///
    /// The identifier used in benchmark records and derived file names.
    ///
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::NoOpt => "NO_OPT",
            Self::SkiaRecordOpts => "SKIA_RECORD_OPTS",
            Self::SkiaRecordOpts2 => "SKIA_RECORD_OPTS_2",
            Self::SkiPass => "SKI_PASS",
        }
    }

    ///
    /// The position of the strategy in [`Self::ALL`].
    ///
    pub fn index(&self) -> usize {
        match self {
            Self::NoOpt => 0,
            Self::SkiaRecordOpts => 1,
            Self::SkiaRecordOpts2 => 2,
            Self::SkiPass => 3,
        }
    }
}

impl FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_uppercase().as_str() {
            "NO_OPT" => Ok(Self::NoOpt),
            "SKIA_RECORD_OPTS" => Ok(Self::SkiaRecordOpts),
            "SKIA_RECORD_OPTS_2" => Ok(Self::SkiaRecordOpts2),
            "SKI_PASS" => Ok(Self::SkiPass),
            string => anyhow::bail!(
                "Unknown optimization strategy `{string}`. Supported strategies: {}",
                Self::ALL
                    .iter()
                    .map(|strategy| strategy.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}
