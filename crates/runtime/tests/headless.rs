//! End-to-end headless session through the runtime.

use std::time::Duration;

use harness::HarnessConfig;
use runtime::app::{run, RunOptions};

fn quick_options(trials: usize) -> RunOptions {
    RunOptions {
        config: HarnessConfig {
            trials,
            max_ticks: 600,
            ..HarnessConfig::default()
        },
        snapshot_every: 0,
        exit_delay: Duration::ZERO,
    }
}

#[test]
fn headless_session_completes_all_trials() {
    let report = run(&quick_options(2)).unwrap();
    assert_eq!(report.trial_scores.len(), 2);
    assert_eq!(
        report.total_score,
        report.trial_scores.iter().sum::<u32>()
    );
}

#[test]
fn two_executions_report_the_same_average() {
    let first = run(&quick_options(3)).unwrap();
    let second = run(&quick_options(3)).unwrap();
    assert_eq!(first.trial_scores, second.trial_scores);
    assert!((first.average_score - second.average_score).abs() < f64::EPSILON);
}

#[test]
fn report_serializes_for_hud_tooling() {
    let report = run(&quick_options(1)).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("average_score"));
    assert!(json.contains("trial_scores"));
}
