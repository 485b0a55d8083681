//!
//! Report output.
//!

pub mod terminal;
pub mod view;

use std::path::Path;

use self::view::ReportSet;

///
/// The serialized report document consumed by the renderer.
///
#[derive(Debug, Default)]
pub struct Output {
    /// Serialized JSON.
    pub content: String,
}

impl Output {
    /// The default output file name inside the report directory.
    pub const FILE_NAME: &'static str = "report.json";

    ///
    /// Writes the document to `path`.
    ///
    pub fn write_to_file(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, self.content.as_str())
            .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
        log::info!("Report written to {path:?}");
        Ok(())
    }
}

impl TryFrom<&ReportSet> for Output {
    type Error = anyhow::Error;

    fn try_from(report_set: &ReportSet) -> Result<Self, Self::Error> {
        let content = serde_json::to_string_pretty(report_set)?;
        Ok(Self { content })
    }
}
