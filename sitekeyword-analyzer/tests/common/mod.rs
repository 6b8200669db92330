use std::sync::OnceLock;

use sitekeyword_common::observability::LogConfig;

static INIT_PATH: OnceLock<std::path::PathBuf> = OnceLock::new();

#[allow(dead_code)]
pub fn init_test_tracing() {
    let _ = INIT_PATH.get_or_init(|| {
        let config = LogConfig {
            app_name: "sitekeyword-tests",
            emit_stderr: true,
            default_filter: "debug",
            ..LogConfig::default()
        };

        sitekeyword_common::observability::init_logging(config).unwrap_or_default()
    });
}
