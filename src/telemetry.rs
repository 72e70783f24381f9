//! Optional local telemetry logging used for debugging showcase sessions.
//!
//! Off by default so the terminal frontend's output stays clean; opt in with
//! `SHOWCASECTL_LOGS=1` and the toolbar's command flow lands as JSON lines in
//! `SHOWCASECTL_TRACE_LOG` (or a temp-dir default).

use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_subscriber::fmt::time::UtcTime;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

pub fn tracing_log_path() -> PathBuf {
    env::var("SHOWCASECTL_TRACE_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("showcasectl_trace.jsonl"))
}

fn tracing_enabled() -> bool {
    env::var_os("SHOWCASECTL_LOGS").is_some_and(|v| v != "0")
}

pub fn init_tracing() {
    if !tracing_enabled() {
        return;
    }

    let _ = TRACING_INIT.get_or_init(|| {
        let path = tracing_log_path();
        let file = match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => file,
            Err(_) => return,
        };
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_timer(UtcTime::rfc_3339())
            .with_writer(file)
            .with_current_span(false)
            .with_span_list(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_points_at_a_jsonl_file() {
        let path = tracing_log_path();
        assert_eq!(
            path.extension().and_then(|e| e.to_str()),
            Some("jsonl"),
            "unexpected trace path {}",
            path.display()
        );
    }
}
