use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// With `debug` off the level is pinned to `info` so a stray `RUST_LOG` in the
/// environment cannot flood the output; with it on, `RUST_LOG` may override
/// the `debug` default. When `log_file` is given, output goes to that file
/// instead of stderr. Calling this twice keeps the first subscriber.
pub fn init(debug: bool, log_file: Option<&Path>) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file.and_then(|path| Some((path.parent()?, path.file_name()?))) {
        Some((dir, name)) => {
            let appender = tracing_appender::rolling::never(dir, name);
            let _ = builder.with_ansi(false).with_writer(appender).try_init();
        }
        None => {
            let _ = builder.try_init();
        }
    }
}
