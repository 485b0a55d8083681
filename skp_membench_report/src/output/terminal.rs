//!
//! The terminal summary of a report.
//!

use colored::Colorize;

use crate::aggregation::comparison::Comparison;
use crate::output::view::strategy::StrategyName;
use crate::output::view::ReportViewModel;

/// The width of the title rule.
const TITLE_WIDTH: usize = 44;

impl ReportViewModel {
    ///
    /// Writes the per-strategy totals and the anomaly count.
    ///
    pub fn write_summary<W>(&self, w: &mut W, strategies: &[StrategyName]) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        writeln!(
            w,
            "╔═╡ {} ╞{}╗",
            self.title.bright_white(),
            "═".repeat(TITLE_WIDTH.saturating_sub(self.title.chars().count()))
        )?;
        for view in self.summary.strategies.iter() {
            let name = strategies
                .iter()
                .find(|name| name.identifier == view.strategy)
                .map(|name| name.display_name.as_str())
                .unwrap_or_else(|| view.strategy.identifier());
            let comparison = match view.comparison {
                Some(comparison) => format_comparison(comparison),
                None => "".normal(),
            };
            writeln!(
                w,
                "║ {:24} {:>10} {:>9} ║",
                name.bright_white(),
                view.bytes_pretty.as_deref().unwrap_or_default(),
                comparison
            )?;
        }
        let anomalies = self.skps.iter().filter(|skp| skp.has_anomalies()).count();
        if anomalies > 0 {
            writeln!(
                w,
                "║ {:24} {:>20} ║",
                "Anomalous SKPs".bright_red(),
                anomalies.to_string().as_str().bright_red()
            )?;
        }
        writeln!(w, "╚{}╝", "═".repeat(TITLE_WIDTH + 4))?;
        Ok(())
    }
}

///
/// Colors savings green and overheads red.
///
fn format_comparison(comparison: Comparison) -> colored::ColoredString {
    match comparison {
        Comparison::Percent(percent) if percent > 0.0 => format!("{percent:.2}%").green(),
        Comparison::Percent(percent) if percent < 0.0 => format!("{percent:.2}%").bright_red(),
        Comparison::Percent(percent) => format!("{percent:.2}%").white(),
        Comparison::Anomalous => "ANOMALY".bright_red().bold(),
    }
}
