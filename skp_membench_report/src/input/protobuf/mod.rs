//!
//! The protobuf benchmark record.
//!

pub mod messages;

use prost::Message;

use crate::model::benchmark::optimization_run::OptimizationRun;
use crate::model::benchmark::optimization_run::Status;
use crate::model::benchmark::skp_run::SkpRun;
use crate::model::benchmark::BenchmarkRecord;
use crate::model::benchmark::UnsupportedDrawCommand;
use crate::model::strategy::Strategy;

use self::messages::Optimization;
use self::messages::OptimizationBenchmark;
use self::messages::OptimizationStatus;
use self::messages::SkiaOptBenchmark;
use self::messages::SkpBenchmark;

impl BenchmarkRecord {
    ///
    /// Decodes a serialized `SkiaOptBenchmark` record.
    ///
    /// Missing fields take their protobuf defaults, only malformed framing is an error.
    ///
    pub fn decode(bytes: &[u8]) -> Result<Self, prost::DecodeError> {
        let message = SkiaOptBenchmark::decode(bytes)?;
        Ok(message.into())
    }
}

impl From<SkiaOptBenchmark> for BenchmarkRecord {
    fn from(message: SkiaOptBenchmark) -> Self {
        let skp_runs = message
            .skp_benchmark_runs
            .into_iter()
            .map(SkpRun::from)
            .collect();
        let unsupported_draw_commands = message
            .ski_pass_summary
            .map(|summary| {
                summary
                    .unsupported_draw_commands
                    .into_iter()
                    .map(|stats| UnsupportedDrawCommand {
                        draw_command: stats.draw_command,
                        count: stats.count,
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self::new(skp_runs, unsupported_draw_commands)
    }
}

impl From<SkpBenchmark> for SkpRun {
    fn from(message: SkpBenchmark) -> Self {
        let mut skp_run = SkpRun::new(message.skp_name.as_str());
        for run in message.optimization_benchmark_runs.into_iter() {
            let Some(run) = optimization_run(&run) else {
                log::debug!(
                    "{}: dropping a run with unknown optimization type {}",
                    skp_run.name,
                    run.optimization_type
                );
                continue;
            };
            if let Some(replaced) = skp_run.insert(run) {
                log::warn!(
                    "{}: duplicate {} run, keeping the last one",
                    skp_run.name,
                    replaced.strategy
                );
            }
        }
        skp_run
    }
}

impl From<OptimizationStatus> for Status {
    fn from(status: OptimizationStatus) -> Self {
        match status {
            OptimizationStatus::UnknownStatus => Self::Unknown,
            OptimizationStatus::Success => Self::Success,
            OptimizationStatus::Failed => Self::Failed,
        }
    }
}

///
/// Maps a wire optimization type to a strategy.
///
/// `None` for the unset and unrecognized values.
///
fn strategy(optimization_type: i32) -> Option<Strategy> {
    match Optimization::try_from(optimization_type).ok()? {
        Optimization::Unknown => None,
        Optimization::NoOpt => Some(Strategy::NoOpt),
        Optimization::SkiaRecordOpts => Some(Strategy::SkiaRecordOpts),
        Optimization::SkiaRecordOpts2 => Some(Strategy::SkiaRecordOpts2),
        Optimization::SkiPass => Some(Strategy::SkiPass),
    }
}

///
/// Converts a wire run, `None` if its strategy is not recognized.
///
fn optimization_run(message: &OptimizationBenchmark) -> Option<OptimizationRun> {
    let strategy = strategy(message.optimization_type)?;
    let status = OptimizationStatus::try_from(message.optimization_status)
        .map(Status::from)
        .unwrap_or_default();
    Some(OptimizationRun::new(
        strategy,
        message.malloc_allocated_bytes,
        status,
    ))
}
