//!
//! The SKP memory benchmark report binary.
//!

pub(crate) mod arguments;

use clap::Parser;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;

    pretty_env_logger::formatted_builder()
        .filter_level(if arguments.quiet {
            log::LevelFilter::Error
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let config = match arguments.config.as_deref() {
        Some(path) => skp_membench_report::Config::try_from(path)?,
        None => skp_membench_report::Config::default(),
    };

    let mut records = Vec::with_capacity(arguments.benchmarks.len());
    for benchmark in arguments.benchmarks.iter() {
        let path = arguments.report_dir.join(benchmark);
        match skp_membench_report::BenchmarkRecord::load(path.as_path(), arguments.input_source) {
            Ok(record) => records.push((arguments.title(benchmark), record)),
            Err(error) if arguments.benchmarks.len() > 1 => {
                log::error!("{error}");
                log::warn!("Skipping the report of {:?}", error.path());
            }
            Err(error) => Err(error)?,
        }
    }
    if records.is_empty() {
        anyhow::bail!("None of the benchmark records could be loaded.");
    }

    let report_set = skp_membench_report::build_reports(records.as_slice(), &config);

    if !arguments.quiet {
        let mut stdout = std::io::stdout();
        for report in report_set.reports.iter() {
            report.write_summary(&mut stdout, report_set.strategies.as_slice())?;
        }
    }

    let output_path = arguments
        .output_path
        .unwrap_or_else(|| arguments.report_dir.join(skp_membench_report::Output::FILE_NAME));
    let output = skp_membench_report::Output::try_from(&report_set)?;
    output.write_to_file(output_path.as_path())?;

    Ok(())
}
