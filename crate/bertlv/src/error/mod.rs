use thiserror::Error;

pub(crate) mod result;

#[derive(Error, Debug)]
pub enum TlvError {
    #[error("{0}")]
    Default(String),

    #[error("insufficient data for tag {tag}: expected {expected} bytes, {remaining} remain")]
    InsufficientData {
        tag: String,
        expected: usize,
        remaining: usize,
    },

    #[error("invalid length: {0}")]
    InvalidLength(String),

    #[error("invalid tag: {0}")]
    InvalidTag(String),

    #[error("nesting exceeds {0} levels")]
    NestingTooDeep(usize),

    #[error("tag {0} is not constructed/composite")]
    NotConstructed(String),

    #[error("unmarshalling field {field}: {reason}")]
    Unmarshal { field: String, reason: String },
}

impl serde::de::Error for TlvError {
    fn custom<T>(msg: T) -> Self
    where
        T: std::fmt::Display,
    {
        Self::Default(msg.to_string())
    }
}

/// Construct a [`TlvError::Default`] from a format string.
#[macro_export]
macro_rules! tlv_error {
    ($msg:literal) => {
        $crate::TlvError::Default(::core::format_args!($msg).to_string())
    };
    ($err:expr $(,)?) => ({
        $crate::TlvError::Default($err.to_string())
    });
    ($fmt:expr, $($arg:tt)*) => {
        $crate::TlvError::Default(::core::format_args!($fmt, $($arg)*).to_string())
    };
}

/// Return early with an error.
#[macro_export]
macro_rules! tlv_bail {
    ($msg:literal) => {
        return ::core::result::Result::Err($crate::tlv_error!($msg))
    };
    ($err:expr $(,)?) => {
        return ::core::result::Result::Err($err)
    };
    ($fmt:expr, $($arg:tt)*) => {
        return ::core::result::Result::Err($crate::tlv_error!($fmt, $($arg)*))
    };
}

/// Return early with an error if a condition is not satisfied.
///
/// This macro is equivalent to `if !$cond { return Err(From::from($err)); }`.
#[macro_export]
macro_rules! tlv_ensure {
    ($cond:expr, $msg:literal $(,)?) => {
        if !$cond {
            return ::core::result::Result::Err($crate::tlv_error!($msg));
        }
    };
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return ::core::result::Result::Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return ::core::result::Result::Err($crate::tlv_error!($fmt, $($arg)*));
        }
    };
}
