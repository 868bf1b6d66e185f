//! Process-wide default logger and its convenience functions.

use std::sync::OnceLock;

use crate::logger::Logger;
use crate::record::{Level, LogArg};

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The shared stdout logger, created on first use.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(Logger::stdout)
}

pub fn debug(args: &[LogArg]) {
    default_logger().log(Level::Debug, args);
}

pub fn info(args: &[LogArg]) {
    default_logger().log(Level::Info, args);
}

pub fn warn(args: &[LogArg]) {
    default_logger().log(Level::Warn, args);
}

pub fn error(args: &[LogArg]) {
    default_logger().log(Level::Error, args);
}
