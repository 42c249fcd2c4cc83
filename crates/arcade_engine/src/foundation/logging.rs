//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system, honouring `RUST_LOG` and defaulting to `info`
pub fn init() {
    init_with_default_level("info");
}

/// Initialize the logging system with a fallback filter used when `RUST_LOG` is unset
pub fn init_with_default_level(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // Already initialised by an earlier call
    let _ = env_logger::Builder::from_env(env).try_init();
}
