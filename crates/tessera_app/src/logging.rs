//! Operator-facing diagnostics: a `fern` dispatcher on stderr.

use log::LevelFilter;

/// Installs the global logger.  Fails if a logger is already set.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // wgpu and the windowing stack are chatty below warn
        .level_for("wgpu_core", LevelFilter::Warn)
        .level_for("wgpu_hal", LevelFilter::Warn)
        .level_for("naga", LevelFilter::Warn)
        .level_for("winit", LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply()
}
