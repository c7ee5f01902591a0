use anyhow::{Context, Result};
use log::LevelFilter;

/// Parse a level name; anything unrecognised means `info`.
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Level for the GPU backend crates: the requested level, but never
/// chattier than `warn`.
pub fn backend_level(name: &str) -> LevelFilter {
    parse_level(name).min(LevelFilter::Warn)
}

/// Install the global logger: stdout, `[LEVEL target] message`.
///
/// GPU backend crates are capped at `warn`; a quieter request applies to
/// them too.
pub fn init(level: &str) -> Result<()> {
    let backend = backend_level(level);
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{} {}] {}", record.level(), record.target(), message))
        })
        .level(parse_level(level))
        .level_for("wgpu_core", backend)
        .level_for("wgpu_hal", backend)
        .level_for("naga", backend)
        .chain(std::io::stdout())
        .apply()
        .context("install logger")
}
