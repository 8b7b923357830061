use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Log level for the given verbosity flags
pub fn level_for(debug: bool, quiet: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    }
}

/// Initialize logging with the level picked from the verbosity flags
pub fn init_logging(debug: bool, quiet: bool) -> LevelFilter {
    let log_level = level_for(debug, quiet);

    if let Err(e) = SimpleLogger::new()
        .with_level(log_level)
        .without_timestamps()
        .init()
    {
        eprintln!("Failed to initialize logger: {}", e);
    }

    log_level
}
