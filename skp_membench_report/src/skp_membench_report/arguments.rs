//!
//! The SKP memory benchmark report arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The SKP memory benchmark report arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the terminal summary.
    #[arg(short, long)]
    pub quiet: bool,

    /// Directory with the results of a memory benchmark run.
    #[arg(short = 'd', long)]
    pub report_dir: PathBuf,

    /// Benchmark records, relative to the report directory unless absolute.
    /// Several records produce one report each.
    #[arg(short, long = "benchmark", default_value = "benchmark")]
    pub benchmarks: Vec<PathBuf>,

    /// Benchmark record encoding: `protobuf` (default) or `csv`.
    #[arg(long, default_value_t = skp_membench_report::InputSource::Protobuf)]
    pub input_source: skp_membench_report::InputSource,

    /// JSON report configuration. Defaults are used if unset.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output file. Defaults to `report.json` in the report directory.
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,
}

impl Arguments {
    ///
    /// The title of the report built from `benchmark`.
    ///
    pub fn title(&self, benchmark: &std::path::Path) -> String {
        let directory = self
            .report_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.report_dir.to_string_lossy().into_owned());
        if self.benchmarks.len() == 1 {
            return directory;
        }
        let benchmark = benchmark
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("{directory}: {benchmark}")
    }
}
