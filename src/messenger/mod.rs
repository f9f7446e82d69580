pub mod logged_message;
pub mod message_log;
pub mod messenger;

pub use logged_message::LoggedMessage;
pub use message_log::MessageLog;
pub use messenger::Messenger;
