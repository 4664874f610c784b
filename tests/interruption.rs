// tests/interruption.rs

mod common;
use crate::common::{WORKDIR, with_timeout};

use std::time::Duration;

use flowdeploy::deploy::run_until_interrupted;
use flowdeploy::errors::DeployError;
use flowdeploy_test_utils::builders::sequence_of;
use flowdeploy_test_utils::fake_executor::FakeExecutor;
use flowdeploy_test_utils::{buffered_runner, printed_lines};

#[tokio::test]
async fn interrupt_aborts_a_hanging_step() {
    with_timeout(async {
        let seq = sequence_of(&["true", "docker compose pull", "true"]);
        let executor = FakeExecutor::new().hanging("docker compose pull");
        let mut runner = buffered_runner(executor, WORKDIR);

        let interrupt = tokio::time::sleep(Duration::from_millis(50));
        let err = run_until_interrupted(&seq, &mut runner, interrupt)
            .await
            .unwrap_err();

        assert!(matches!(err, DeployError::Interrupted));
        assert_eq!(runner.executor().commands(), vec!["true", "docker compose pull"]);
        assert_eq!(
            printed_lines(&runner),
            vec![
                "🚀 Test Deploy Starting...",
                "▶ true",
                "▶ docker compose pull",
                "❌ Deploy interrupted",
            ]
        );
    })
    .await
}

#[tokio::test]
async fn finished_deploy_ignores_pending_interrupt() {
    with_timeout(async {
        let seq = sequence_of(&["true", "true"]);
        let mut runner = buffered_runner(FakeExecutor::new(), WORKDIR);

        let summary = run_until_interrupted(&seq, &mut runner, std::future::pending())
            .await
            .unwrap();

        assert_eq!(summary.steps_run, 2);
        assert_eq!(
            printed_lines(&runner).last().map(String::as_str),
            Some("✅ Test deployed successfully!")
        );
    })
    .await
}

#[tokio::test]
async fn ready_interrupt_wins_over_failing_step() {
    with_timeout(async {
        for _ in 0..50 {
            let seq = sequence_of(&["false"]);
            let mut runner = buffered_runner(FakeExecutor::new(), WORKDIR);

            let err = run_until_interrupted(&seq, &mut runner, async {})
                .await
                .unwrap_err();

            assert!(matches!(err, DeployError::Interrupted), "got {err:?}");
            let lines = printed_lines(&runner);
            assert_eq!(lines.last().map(String::as_str), Some("❌ Deploy interrupted"));
            assert!(!lines.iter().any(|l| l.starts_with("❌ Command failed")));
        }
    })
    .await
}
