use anyhow::Result;
pub use log::LevelFilter;

/// Log to stderr so stdout stays clean for reports
pub fn init(level: LevelFilter) -> Result<()> {
    use simplelog::*;
    let cfg = ConfigBuilder::new()
        // Right-align level names so messages start in one column
        .set_level_padding(LevelPadding::Left)
        .set_time_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        // Show the module path (stat_core::sheet, ...) on every line
        .set_target_level(LevelFilter::Error)
        .set_location_level(LevelFilter::Off)
        .build();
    TermLogger::init(level, cfg, TerminalMode::Stderr, ColorChoice::Auto)?;
    Ok(())
}
