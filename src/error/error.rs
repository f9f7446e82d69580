use std::{fmt::Display, sync::PoisonError};

use super::kind::ErrorKind;

#[derive(Debug, Clone)]
pub struct Error {
    message: String,
    kind: ErrorKind,
}

impl Error
{
    pub fn new(kind: ErrorKind, message: &str) -> Self
    {
        Self {
            message: message.to_string(),
            kind,
        }
    }

    pub fn kind(&self) -> ErrorKind
    {
        self.kind
    }

    pub fn message(&self) -> &str
    {
        &self.message
    }
}

impl Display for Error
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Error {}

impl<T> From<PoisonError<T>> for Error
{
    fn from(e: PoisonError<T>) -> Self {
        Error::new(ErrorKind::Synchronization, &e.to_string())
    }
}

impl From<std::io::Error> for Error
{
    fn from(e: std::io::Error) -> Self {
        Error::new(ErrorKind::Config, &e.to_string())
    }
}

impl From<toml::de::Error> for Error
{
    fn from(e: toml::de::Error) -> Self {
        Error::new(ErrorKind::Config, &e.to_string())
    }
}

impl From<toml::ser::Error> for Error
{
    fn from(e: toml::ser::Error) -> Self {
        Error::new(ErrorKind::Config, &e.to_string())
    }
}
