// brdocs/src/logger.rs
//! Logger initialisation for the brdocs binary.

use log::LevelFilter;

/// Installs `env_logger` on stderr.
///
/// With `Some(level)` the level overrides `RUST_LOG`; with `None` the
/// environment decides, falling back to `warn`. Safe to call more than once.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Some(level) = level {
        builder.filter_level(level);
    }

    builder.target(env_logger::Target::Stderr);
    let _ = builder.try_init();
}
