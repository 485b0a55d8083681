//!
//! The report aggregation tests.
//!

use super::build_report;
use super::build_reports;
use super::comparison::Comparison;
use crate::config::Config;
use crate::model::benchmark::optimization_run::OptimizationRun;
use crate::model::benchmark::optimization_run::Status;
use crate::model::benchmark::skp_run::SkpRun;
use crate::model::benchmark::BenchmarkRecord;
use crate::model::strategy::Strategy;
use crate::output::view::skp::SkpView;
use crate::output::view::strategy::StrategyView;

fn skp_run(name: &str, runs: &[(Strategy, u64)]) -> SkpRun {
    let mut skp_run = SkpRun::new(name);
    for (strategy, bytes) in runs {
        skp_run.insert(OptimizationRun::new(*strategy, *bytes, Status::Success));
    }
    skp_run
}

fn record(skp_runs: Vec<SkpRun>) -> BenchmarkRecord {
    BenchmarkRecord::new(skp_runs, vec![])
}

fn view(skp: &SkpView, strategy: Strategy) -> Option<&StrategyView> {
    skp.strategies.iter().find(|view| view.strategy == strategy)
}

#[test]
fn two_skps_summary() {
    let record = record(vec![
        skp_run("a.skp", &[(Strategy::NoOpt, 1000), (Strategy::SkiPass, 500)]),
        skp_run("b.skp", &[(Strategy::NoOpt, 0), (Strategy::SkiPass, 0)]),
    ]);

    let report = build_report("report".to_owned(), &record, &Config::default());

    let candidate = view(&report.summary, Strategy::SkiPass).expect("Always exists");
    assert_eq!(candidate.bytes, Some(500));
    assert_eq!(candidate.comparison, None);
    let no_opt = view(&report.summary, Strategy::NoOpt).expect("Always exists");
    assert_eq!(no_opt.bytes, Some(1000));
    assert_eq!(no_opt.comparison, Some(Comparison::Percent(50.0)));

    let b = &report.skps[1];
    assert_eq!(b.display_name, "b");
    assert_eq!(
        view(b, Strategy::NoOpt).and_then(|view| view.comparison),
        Some(Comparison::Percent(0.0))
    );
}

#[test]
fn anomalous_measurement() {
    let record = record(vec![skp_run(
        "c.skp",
        &[(Strategy::NoOpt, 0), (Strategy::SkiPass, 300)],
    )]);

    let report = build_report("report".to_owned(), &record, &Config::default());

    let c = &report.skps[0];
    assert_eq!(
        view(c, Strategy::NoOpt).and_then(|view| view.comparison),
        Some(Comparison::Anomalous)
    );
    assert!(c.has_anomalies());
    assert!(report.summary.has_anomalies());
}

#[test]
fn absent_strategy_is_omitted() {
    let record = record(vec![skp_run(
        "d.skp",
        &[(Strategy::SkiaRecordOpts, 400), (Strategy::SkiPass, 100)],
    )]);

    let report = build_report("report".to_owned(), &record, &Config::default());

    let d = &report.skps[0];
    assert!(view(d, Strategy::NoOpt).is_none());
    assert!(view(d, Strategy::SkiaRecordOpts2).is_none());
    assert_eq!(
        view(d, Strategy::SkiaRecordOpts).and_then(|view| view.comparison),
        Some(Comparison::Percent(75.0))
    );
    assert_eq!(
        view(&report.summary, Strategy::NoOpt).map(|view| (view.bytes, view.comparison)),
        Some((Some(0), Some(Comparison::Anomalous)))
    );
    assert!(report.summary.has_anomalies());
}

#[test]
fn missing_candidate_counts_as_zero() {
    let record = record(vec![skp_run(
        "e.skp",
        &[(Strategy::NoOpt, 2048), (Strategy::SkiaRecordOpts, 0)],
    )]);

    let report = build_report("report".to_owned(), &record, &Config::default());

    let e = &report.skps[0];
    assert_eq!(
        view(e, Strategy::NoOpt).and_then(|view| view.comparison),
        Some(Comparison::Percent(100.0))
    );
    assert_eq!(
        view(e, Strategy::SkiaRecordOpts).and_then(|view| view.comparison),
        Some(Comparison::Percent(0.0))
    );
}

#[test]
fn failed_run_is_shown_without_numbers() {
    let mut skp_run = skp_run("f.skp", &[(Strategy::NoOpt, 100)]);
    skp_run.insert(OptimizationRun::failed(Strategy::SkiPass));
    let record = record(vec![skp_run]);

    let report = build_report("report".to_owned(), &record, &Config::default());

    let f = &report.skps[0];
    let candidate = view(f, Strategy::SkiPass).expect("Always exists");
    assert_eq!(candidate.status, Some(Status::Failed));
    assert_eq!(candidate.bytes, None);
    assert_eq!(candidate.bytes_pretty, None);
    assert_eq!(
        candidate.links.as_ref().map(|links| links.log.as_str()),
        Some("./f.skp.json.error_log.txt")
    );
    assert_eq!(
        view(f, Strategy::NoOpt).and_then(|view| view.comparison),
        Some(Comparison::Percent(100.0))
    );
    assert_eq!(
        view(&report.summary, Strategy::SkiPass).and_then(|view| view.bytes),
        Some(0)
    );
}

#[test]
fn image_diff_run_is_shown_without_numbers() {
    let mut skp_run = skp_run("h.skp", &[(Strategy::NoOpt, 100), (Strategy::SkiPass, 40)]);
    skp_run.insert(OptimizationRun::image_diff(Strategy::SkiaRecordOpts));
    let record = record(vec![skp_run]);

    let report = build_report("report".to_owned(), &record, &Config::default());

    let h = &report.skps[0];
    let diff = view(h, Strategy::SkiaRecordOpts).expect("Always exists");
    assert_eq!(diff.status, Some(Status::ImageDiff));
    assert_eq!(diff.bytes, None);
    assert_eq!(diff.comparison, None);
    assert_eq!(
        diff.links.as_ref().map(|links| links.log.as_str()),
        Some("./h.skp_SKIA_RECORD_OPTS_log.txt")
    );
    assert_eq!(
        view(&report.summary, Strategy::SkiaRecordOpts).and_then(|view| view.bytes),
        Some(0)
    );
}

#[test]
fn skp_without_runs() {
    let record = record(vec![SkpRun::new("skps/empty.skp")]);

    let report = build_report("report".to_owned(), &record, &Config::default());

    assert_eq!(report.skps[0].name, "empty.skp");
    assert_eq!(report.skps[0].display_name, "empty");
    assert!(report.skps[0].strategies.is_empty());
}

#[test]
fn empty_record() {
    let report = build_report(
        "report".to_owned(),
        &BenchmarkRecord::default(),
        &Config::default(),
    );

    assert!(report.skps.is_empty());
    assert_eq!(report.summary.name, SkpView::SUMMARY);
    assert_eq!(report.summary.strategies.len(), Strategy::COUNT);
    for view in report.summary.strategies.iter() {
        assert_eq!(view.bytes, Some(0));
        assert_eq!(view.bytes_pretty.as_deref(), Some("0"));
        if view.strategy == Strategy::SkiPass {
            assert_eq!(view.comparison, None);
        } else {
            assert_eq!(view.comparison, Some(Comparison::Percent(0.0)));
        }
    }
}

#[test]
fn totals_past_u64_do_not_overflow() {
    let record = record(vec![
        skp_run("a.skp", &[(Strategy::NoOpt, u64::MAX), (Strategy::SkiPass, 1)]),
        skp_run("b.skp", &[(Strategy::NoOpt, 2), (Strategy::SkiPass, 1)]),
    ]);

    let report = build_report("report".to_owned(), &record, &Config::default());

    let no_opt = view(&report.summary, Strategy::NoOpt).expect("Always exists");
    assert_eq!(no_opt.bytes, Some(u128::from(u64::MAX) + 2));
    assert!(no_opt
        .comparison
        .and_then(|comparison| comparison.percent())
        .is_some_and(|percent| percent > 99.0 && percent <= 100.0));
    assert_eq!(
        view(&report.summary, Strategy::SkiPass).and_then(|view| view.bytes),
        Some(2)
    );
}

#[test]
fn summary_totals_are_formatted() {
    let record = record(vec![
        skp_run("a.skp", &[(Strategy::NoOpt, 1048576), (Strategy::SkiPass, 1024)]),
        skp_run("b.skp", &[(Strategy::NoOpt, 524288), (Strategy::SkiPass, 1024)]),
    ]);

    let report = build_report("report".to_owned(), &record, &Config::default());

    assert_eq!(
        view(&report.summary, Strategy::NoOpt).and_then(|view| view.bytes_pretty.as_deref()),
        Some("1.50M")
    );
    assert_eq!(
        view(&report.summary, Strategy::SkiPass).and_then(|view| view.bytes_pretty.as_deref()),
        Some("2.00K")
    );
}

#[test]
fn configured_candidate() {
    let config = Config {
        candidate: Strategy::SkiaRecordOpts,
        ..Config::default()
    };
    let record = record(vec![skp_run(
        "g.skp",
        &[(Strategy::NoOpt, 200), (Strategy::SkiaRecordOpts, 150)],
    )]);

    let report = build_report("report".to_owned(), &record, &config);

    let g = &report.skps[0];
    assert_eq!(
        view(g, Strategy::NoOpt).and_then(|view| view.comparison),
        Some(Comparison::Percent(25.0))
    );
    assert_eq!(
        view(g, Strategy::SkiaRecordOpts).and_then(|view| view.comparison),
        None
    );
}

#[test]
fn building_is_idempotent() {
    let record = record(vec![
        skp_run("a.skp", &[(Strategy::NoOpt, 1000), (Strategy::SkiPass, 500)]),
        skp_run("c.skp", &[(Strategy::NoOpt, 0), (Strategy::SkiPass, 300)]),
    ]);
    let config = Config::default();

    let first = build_report("report".to_owned(), &record, &config);
    let second = build_report("report".to_owned(), &record, &config);

    assert_eq!(first, second);
}

#[test]
fn several_records_keep_order() {
    let records = vec![
        (
            "v1".to_owned(),
            record(vec![skp_run("a.skp", &[(Strategy::NoOpt, 10)])]),
        ),
        ("v2".to_owned(), BenchmarkRecord::default()),
        (
            "v3".to_owned(),
            record(vec![skp_run("b.skp", &[(Strategy::SkiPass, 20)])]),
        ),
    ];

    let report_set = build_reports(&records, &Config::default());

    let titles: Vec<_> = report_set
        .reports
        .iter()
        .map(|report| report.title.as_str())
        .collect();
    assert_eq!(titles, vec!["v1", "v2", "v3"]);
    assert_eq!(report_set.strategies.len(), Strategy::COUNT);
    assert!(report_set
        .strategies
        .iter()
        .any(|name| name.identifier == Strategy::SkiPass && name.is_candidate));
    assert_eq!(
        report_set.reports[2],
        build_report("v3".to_owned(), &records[2].1, &Config::default())
    );
}
