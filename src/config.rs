use tbs::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Logs go to stderr at warn level unless `RUST_LOG` says otherwise, stdout belongs to the session
pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}
