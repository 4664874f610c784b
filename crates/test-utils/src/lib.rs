pub mod builders;
pub mod fake_executor;

use std::path::Path;
use std::sync::Once;

use flowdeploy::deploy::{CommandRunner, Reporter};
use tracing_subscriber::{EnvFilter, fmt};

use crate::fake_executor::FakeExecutor;

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Run a future with a 5-second timeout.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(std::time::Duration::from_secs(5), f)
        .await
        .expect("Test timed out after 5 seconds")
}

/// A runner backed by `executor` that prints into an in-memory buffer.
pub fn buffered_runner(
    executor: FakeExecutor,
    workdir: impl AsRef<Path>,
) -> CommandRunner<FakeExecutor, Vec<u8>> {
    CommandRunner::new(executor, workdir.as_ref(), Reporter::new(Vec::new()))
}

/// Everything the runner has printed so far.
pub fn printed<E>(runner: &CommandRunner<E, Vec<u8>>) -> String
where
    E: flowdeploy::exec::ExecutorBackend,
{
    String::from_utf8_lossy(runner.reporter().writer()).into_owned()
}

/// Non-empty printed lines, in order.
pub fn printed_lines<E>(runner: &CommandRunner<E, Vec<u8>>) -> Vec<String>
where
    E: flowdeploy::exec::ExecutorBackend,
{
    printed(runner)
        .lines()
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
