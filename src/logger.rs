use std::sync::Arc;

use spdlog::sink::{StdStream, StdStreamSink};
use spdlog::{Level, LevelFilter, Logger};

/// Every diagnostic goes to stderr. Stdout carries the rendered document and
/// must stay clean for redirection.
pub fn configure_logger() -> spdlog::Result<()> {
    let stderr = Arc::new(StdStreamSink::builder()
        .std_stream(StdStream::Stderr)
        .build()?);

    let logger = Arc::new(Logger::builder().sink(stderr).build()?);
    logger.set_level_filter(LevelFilter::MoreSevereEqual(Level::Info));
    logger.set_flush_level_filter(LevelFilter::MoreSevereEqual(Level::Info));

    spdlog::set_default_logger(logger);

    Ok(())
}
