use std::fmt::Display;

use crate::error::TlvError;

pub type TlvResult<R> = Result<R, TlvError>;

pub trait TlvResultHelper<T> {
    fn context(self, context: &str) -> TlvResult<T>;
    fn with_context<D, O>(self, op: O) -> TlvResult<T>
    where
        D: Display + Send + Sync + 'static,
        O: FnOnce() -> D;
}

impl<T, E> TlvResultHelper<T> for Result<T, E>
where
    E: std::error::Error,
{
    fn context(self, context: &str) -> TlvResult<T> {
        self.map_err(|e| TlvError::Default(format!("{context}: {e}")))
    }

    fn with_context<D, O>(self, op: O) -> TlvResult<T>
    where
        D: Display + Send + Sync + 'static,
        O: FnOnce() -> D,
    {
        self.map_err(|e| TlvError::Default(format!("{}: {e}", op())))
    }
}

impl<T> TlvResultHelper<T> for Option<T> {
    fn context(self, context: &str) -> TlvResult<T> {
        self.ok_or_else(|| TlvError::Default(context.to_owned()))
    }

    fn with_context<D, O>(self, op: O) -> TlvResult<T>
    where
        D: Display + Send + Sync + 'static,
        O: FnOnce() -> D,
    {
        self.ok_or_else(|| TlvError::Default(format!("{}", op())))
    }
}
