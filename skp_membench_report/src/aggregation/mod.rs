//!
//! Compares strategies against the candidate and shapes the report view model.
//!

pub mod comparison;
pub mod totals;

use rayon::iter::IntoParallelRefIterator;
use rayon::iter::ParallelIterator;

use crate::config::Config;
use crate::model::benchmark::skp_run::SkpRun;
use crate::model::benchmark::BenchmarkRecord;
use crate::model::strategy::Strategy;
use crate::output::view::links::Links;
use crate::output::view::skp::SkpView;
use crate::output::view::strategy::StrategyName;
use crate::output::view::strategy::StrategyView;
use crate::output::view::ReportSet;
use crate::output::view::ReportViewModel;
use crate::util::bytes::pretty_byte_str;

use self::comparison::Comparison;
use self::totals::StrategyTotals;

///
/// Builds the view model of one benchmark record.
///
pub fn build_report(title: String, record: &BenchmarkRecord, config: &Config) -> ReportViewModel {
    let skps: Vec<SkpView> = record
        .skp_runs
        .iter()
        .map(|skp_run| skp_view(skp_run, config))
        .collect();
    let totals: StrategyTotals = record.skp_runs.iter().map(StrategyTotals::from).sum();

    ReportViewModel {
        summary: summary_view(&totals, config),
        title,
        skps,
        unsupported_draw_commands: record.unsupported_draw_commands.clone(),
    }
}

///
/// Builds independent view models of several benchmark records.
///
/// Records are aggregated in parallel, the reports keep the input order.
///
pub fn build_reports(records: &[(String, BenchmarkRecord)], config: &Config) -> ReportSet {
    let reports = records
        .par_iter()
        .map(|(title, record)| build_report(title.clone(), record, config))
        .collect();
    ReportSet {
        strategies: strategy_names(config),
        reports,
    }
}

///
/// The strategy display-name table.
///
pub fn strategy_names(config: &Config) -> Vec<StrategyName> {
    Strategy::ALL
        .into_iter()
        .map(|strategy| StrategyName {
            identifier: strategy,
            display_name: config.display_name(strategy).to_owned(),
            is_candidate: strategy == config.candidate,
        })
        .collect()
}

///
/// Compares every strategy reported for an SKP with the candidate.
///
/// A missing or unmeasured candidate counts as zero bytes.
/// Runs without a usable measurement are shown without numbers.
///
fn skp_view(skp_run: &SkpRun, config: &Config) -> SkpView {
    let candidate_bytes = skp_run
        .run(config.candidate)
        .and_then(|run| run.measured_bytes())
        .map(u128::from)
        .unwrap_or_default();

    let strategies = skp_run
        .runs
        .iter()
        .map(|(strategy, run)| {
            let bytes = run.measured_bytes().map(u128::from);
            let comparison = match bytes {
                Some(_) if strategy == config.candidate => None,
                Some(bytes) => Some(Comparison::new(bytes, candidate_bytes)),
                None => None,
            };
            if comparison.as_ref().is_some_and(Comparison::is_anomalous) {
                log::warn!(
                    "{}: {strategy} allocated zero bytes while {} allocated {candidate_bytes}",
                    skp_run.name,
                    config.candidate,
                );
            }
            StrategyView {
                strategy,
                bytes,
                bytes_pretty: bytes.map(pretty_byte_str),
                comparison,
                status: Some(run.status),
                links: Some(Links::new(
                    skp_run.name.as_str(),
                    strategy,
                    run.status,
                    config,
                )),
            }
        })
        .collect();

    SkpView {
        name: skp_run.name.clone(),
        display_name: config.display_name_of_skp(skp_run.name.as_str()).to_owned(),
        strategies,
    }
}

///
/// Compares the strategy totals with the candidate total.
///
/// Every strategy is listed. Those never reported total zero bytes and are compared
/// by the same rule as the others.
///
fn summary_view(totals: &StrategyTotals, config: &Config) -> SkpView {
    let candidate_total = totals.get(config.candidate).unwrap_or_default();

    let strategies = Strategy::ALL
        .into_iter()
        .map(|strategy| {
            let total = totals.get(strategy).unwrap_or_default();
            let comparison =
                (strategy != config.candidate).then(|| Comparison::new(total, candidate_total));
            if comparison.as_ref().is_some_and(Comparison::is_anomalous) {
                log::warn!(
                    "{strategy} allocated zero bytes in total while {} allocated {candidate_total}",
                    config.candidate,
                );
            }
            StrategyView {
                strategy,
                bytes: Some(total),
                bytes_pretty: Some(pretty_byte_str(total)),
                comparison,
                status: None,
                links: None,
            }
        })
        .collect();

    SkpView {
        name: SkpView::SUMMARY.to_owned(),
        display_name: SkpView::SUMMARY.to_owned(),
        strategies,
    }
}

#[cfg(test)]
mod tests;
