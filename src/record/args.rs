//! Logged arguments and message/stack extraction.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// The display and trace strings captured from an error value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorArg {
    display: String,
    trace: String,
}

impl ErrorArg {
    /// Capture `err`. The trace is its `Debug` form followed by one
    /// `caused by:` line per error in its `source()` chain.
    pub fn new<E: StdError + ?Sized>(err: &E) -> Self {
        let mut trace = format!("{err:?}");
        let mut source = err.source();
        while let Some(cause) = source {
            trace.push_str("\ncaused by: ");
            trace.push_str(&cause.to_string());
            source = cause.source();
        }
        Self {
            display: err.to_string(),
            trace,
        }
    }

    /// Build from already rendered strings.
    pub fn from_parts(display: impl Into<String>, trace: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            trace: trace.into(),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn trace(&self) -> &str {
        &self.trace
    }
}

/// One argument of a log call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogArg {
    /// A plain value in its string form.
    Text(String),
    /// An error; contributes its display string to the message and its
    /// trace to the record's stack when it is the last argument.
    Error(ErrorArg),
}

impl LogArg {
    pub fn error<E: StdError + ?Sized>(err: &E) -> Self {
        LogArg::Error(ErrorArg::new(err))
    }

    pub fn display(value: &impl fmt::Display) -> Self {
        LogArg::Text(value.to_string())
    }

    pub fn debug(value: &impl fmt::Debug) -> Self {
        LogArg::Text(format!("{value:?}"))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LogArg::Error(_))
    }

    /// The string form of this argument: the text itself, or an error's
    /// display string.
    pub fn as_str(&self) -> &str {
        match self {
            LogArg::Text(text) => text,
            LogArg::Error(err) => err.display(),
        }
    }
}

impl From<ErrorArg> for LogArg {
    fn from(err: ErrorArg) -> Self {
        LogArg::Error(err)
    }
}

impl From<String> for LogArg {
    fn from(text: String) -> Self {
        LogArg::Text(text)
    }
}

impl From<&str> for LogArg {
    fn from(text: &str) -> Self {
        LogArg::Text(text.to_string())
    }
}

impl From<&String> for LogArg {
    fn from(text: &String) -> Self {
        LogArg::Text(text.clone())
    }
}

impl From<Cow<'_, str>> for LogArg {
    fn from(text: Cow<'_, str>) -> Self {
        LogArg::Text(text.into_owned())
    }
}

impl<'a> From<&'a (dyn StdError + 'a)> for LogArg {
    fn from(err: &'a (dyn StdError + 'a)) -> Self {
        LogArg::error(err)
    }
}

impl From<Box<dyn StdError + Send + Sync>> for LogArg {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        LogArg::error(err.as_ref())
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for LogArg {
                fn from(value: $ty) -> Self {
                    LogArg::Text(value.to_string())
                }
            }
        )*
    };
}

impl_from_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// Derive the message and stack of a record from its arguments.
///
/// - no arguments: neither
/// - one error: its display string, with its trace as the stack
/// - one plain value: its string form
/// - several, last one an error: the first argument, the middle arguments
///   concatenated without separators, one space, then the error's display
///   string; the error's trace becomes the stack
/// - several, no trailing error: all string forms joined by single spaces
pub fn extract_message(args: &[LogArg]) -> (Option<String>, Option<String>) {
    match args {
        [] => (None, None),
        [LogArg::Error(err)] => (Some(err.display.clone()), Some(err.trace.clone())),
        [LogArg::Text(text)] => (Some(text.clone()), None),
        [first, middle @ .., LogArg::Error(err)] => {
            let mut message = first.as_str().to_string();
            for arg in middle {
                message.push_str(arg.as_str());
            }
            message.push(' ');
            message.push_str(&err.display);
            (Some(message), Some(err.trace.clone()))
        }
        _ => {
            let message = args.iter().map(LogArg::as_str).collect::<Vec<_>>().join(" ");
            (Some(message), None)
        }
    }
}
