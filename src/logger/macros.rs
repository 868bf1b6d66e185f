//! Variadic logging macros.
//!
//! Each argument is converted with `LogArg::from`; wrap errors with
//! `LogArg::error(&err)` so they contribute a stack. A leading
//! `logger = <expr>;` routes the call to a specific [`Logger`](crate::Logger)
//! instead of the default one.
//!
//! ```no_run
//! use context_logger::{info, LogArg};
//!
//! let err = std::io::Error::new(std::io::ErrorKind::TimedOut, "timeout");
//! info!("fetch failed", LogArg::error(&err));
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($level:expr, logger = $logger:expr; $($arg:expr),* $(,)?) => {
        $crate::Logger::log(&$logger, $level, &[$($crate::LogArg::from($arg)),*])
    };
    ($level:expr, $($arg:expr),* $(,)?) => {
        $crate::Logger::log($crate::default_logger(), $level, &[$($crate::LogArg::from($arg)),*])
    };
}

#[macro_export]
macro_rules! debug {
    ($($tt:tt)*) => { $crate::__log!($crate::Level::Debug, $($tt)*) };
}

#[macro_export]
macro_rules! info {
    ($($tt:tt)*) => { $crate::__log!($crate::Level::Info, $($tt)*) };
}

#[macro_export]
macro_rules! warn {
    ($($tt:tt)*) => { $crate::__log!($crate::Level::Warn, $($tt)*) };
}

#[macro_export]
macro_rules! error {
    ($($tt:tt)*) => { $crate::__log!($crate::Level::Error, $($tt)*) };
}
