use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Install a file-backed `fmt` subscriber for a binary.
///
/// Log lines go to `file_name` in the working directory so they never mix with
/// the maze drawn on the terminal. `DEBUG=1` lowers the level to DEBUG.
/// Keep the returned guard alive until exit or buffered lines are lost.
pub fn init(file_name: &str) -> WorkerGuard {
    let level = match std::env::var("DEBUG") {
        Ok(val) if val == "1" => Level::DEBUG,
        _ => Level::INFO,
    };
    let appender = tracing_appender::rolling::never(".", file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .with_thread_names(true)
        .try_init();
    guard
}
