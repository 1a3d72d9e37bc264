//! Logging Infrastructure
//!
//! Console logging for development, optional JSON format and daily-rotating
//! file output for deployments.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

/// Initialize the tracing pipeline
///
/// `RUST_LOG` overrides `level` when set. When `log_dir` is given, a daily
/// rolling `panel.log` is written there; the returned guard must be held
/// for the lifetime of the process so buffered lines are flushed.
pub fn init(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();
    if json_format {
        layers.push(fmt::layer().json().boxed());
    } else {
        layers.push(fmt::layer().boxed());
    }

    let mut guard = None;
    if let Some(dir) = log_dir {
        std::fs::create_dir_all(dir)?;
        let appender = tracing_appender::rolling::daily(dir, "panel.log");
        let (writer, file_guard) = tracing_appender::non_blocking(appender);
        layers.push(fmt::layer().with_writer(writer).with_ansi(false).boxed());
        guard = Some(file_guard);
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_with_file_output() {
        let dir = tempfile::tempdir().unwrap();
        let guard = init("debug", false, Some(dir.path().to_str().unwrap())).unwrap();
        assert!(guard.is_some());

        tracing::info!("panel logger smoke line");
        drop(guard);

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert!(!entries.is_empty());
    }
}
