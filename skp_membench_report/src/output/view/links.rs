//!
//! Report-relative paths of the files produced alongside a measurement.
//!

use crate::config::Config;
use crate::model::benchmark::optimization_run::Status;
use crate::model::strategy::Strategy;

///
/// Report-relative paths of the files produced alongside a measurement.
///
/// The paths follow the benchmarking tool's naming and are never resolved here.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Links {
    /// The rendered image.
    pub image: String,
    /// The replayed SKP.
    pub artifact: String,
    /// The per-draw-call allocation log.
    pub log: String,
}

impl Links {
    ///
    /// Derives the paths for the run of `strategy` on the SKP `name`.
    ///
    pub fn new(name: &str, strategy: Strategy, status: Status, config: &Config) -> Self {
        let is_candidate = strategy == config.candidate;
        let image = if is_candidate {
            format!("{}/{name}.png", config.candidate_render_directory)
        } else {
            format!("{}/{name}.png", config.render_directory)
        };
        let artifact = if is_candidate {
            format!("{name}{}", config.candidate_artifact_suffix)
        } else {
            name.to_owned()
        };
        let log = match status {
            Status::Failed => format!("./{name}.json.error_log.txt"),
            Status::Unknown | Status::Success | Status::ImageDiff => {
                format!("./{name}_{strategy}_log.txt")
            }
        };
        Self {
            image,
            artifact,
            log,
        }
    }
}
