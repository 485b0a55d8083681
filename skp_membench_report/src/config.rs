//!
//! The report configuration.
//!

use std::collections::BTreeMap;
use std::path::Path;

use crate::model::strategy::Strategy;

///
/// The report configuration.
///
/// Every field has a default, so a configuration file only lists the overrides.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The strategy every other strategy is compared against.
    pub candidate: Strategy,
    /// The human-readable strategy names.
    pub display_names: BTreeMap<Strategy, String>,
    /// The SKP file name suffix hidden from display names.
    pub name_suffix: String,
    /// The directory of reference renders, relative to the report.
    pub render_directory: String,
    /// The directory of candidate renders, relative to the report.
    pub candidate_render_directory: String,
    /// The suffix of the SKP rewritten by the candidate pass.
    pub candidate_artifact_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            candidate: Strategy::SkiPass,
            display_names: [
                (Strategy::NoOpt, "No optimization"),
                (Strategy::SkiaRecordOpts, "SkRecordOpts"),
                (Strategy::SkiaRecordOpts2, "SkRecordOpts2"),
                (Strategy::SkiPass, "SkiPass"),
            ]
            .into_iter()
            .map(|(strategy, name)| (strategy, name.to_owned()))
            .collect(),
            name_suffix: ".skp".to_owned(),
            render_directory: "renders".to_owned(),
            candidate_render_directory: "skipass_renders".to_owned(),
            candidate_artifact_suffix: "_opt".to_owned(),
        }
    }
}

impl Config {
    ///
    /// The human-readable name of `strategy`, or its identifier if none is configured.
    ///
    pub fn display_name(&self, strategy: Strategy) -> &str {
        self.display_names
            .get(&strategy)
            .map(String::as_str)
            .unwrap_or_else(|| strategy.identifier())
    }

    ///
    /// Strips the configured suffix from an SKP name.
    ///
    pub fn display_name_of_skp<'a>(&self, name: &'a str) -> &'a str {
        if self.name_suffix.is_empty() {
            return name;
        }
        name.strip_suffix(self.name_suffix.as_str()).unwrap_or(name)
    }
}

impl TryFrom<&Path> for Config {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Configuration file {path:?} reading: {error}"))?;
        let config: Self = serde_json::from_str(text.as_str())
            .map_err(|error| anyhow::anyhow!("Configuration file {path:?} parsing: {error}"))?;
        Ok(config)
    }
}
