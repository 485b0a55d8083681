//!
//! Benchmark record encoding.
//!

///
/// Benchmark record encoding.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The `skia_opt_metrics.SkiaOptBenchmark` protobuf record.
    #[default]
    Protobuf,
    /// The CSV summary written by older versions of the benchmarking tool.
    Csv,
}

impl std::str::FromStr for Source {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "protobuf" | "pb" => Ok(Self::Protobuf),
            "csv" => Ok(Self::Csv),
            string => anyhow::bail!(
                "Unknown input source `{string}`. Supported sources: {}",
                vec![Self::Protobuf, Self::Csv]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Protobuf => write!(f, "protobuf"),
            Self::Csv => write!(f, "csv"),
        }
    }
}
