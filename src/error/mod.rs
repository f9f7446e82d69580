pub mod error;
pub mod kind;

pub use error::Error;
pub use kind::ErrorKind;
