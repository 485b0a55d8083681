//!
//! The decoded benchmark record.
//!

pub mod optimization_run;
pub mod skp_run;

use self::skp_run::SkpRun;

///
/// A draw command the candidate pass could not handle, with its number of occurrences.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UnsupportedDrawCommand {
    /// The draw command name.
    pub draw_command: String,
    /// The number of SKPs the command was reported in.
    pub count: u64,
}

///
/// The decoded benchmark record.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BenchmarkRecord {
    /// The SKP runs in record order.
    pub skp_runs: Vec<SkpRun>,
    /// The candidate pass failures, most frequent first.
    pub unsupported_draw_commands: Vec<UnsupportedDrawCommand>,
}

impl BenchmarkRecord {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        skp_runs: Vec<SkpRun>,
        mut unsupported_draw_commands: Vec<UnsupportedDrawCommand>,
    ) -> Self {
        unsupported_draw_commands.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.draw_command.cmp(&b.draw_command))
        });
        Self {
            skp_runs,
            unsupported_draw_commands,
        }
    }
}
