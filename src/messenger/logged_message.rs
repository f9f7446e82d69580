use std::{fmt::Display, time::SystemTime};

use chrono::{DateTime, Local};

use crate::{config::defines, message::Message};

/// A [`Message`] as recorded by the messenger, with the posting thread and time.
#[derive(Debug, Clone)]
pub struct LoggedMessage
{
    pub message: Message,
    pub src: String,
    pub time: SystemTime,
}

impl LoggedMessage
{
    pub fn new(message: Message) -> Self
    {
        let thread_name = std::thread::current().name().unwrap_or(defines::UNKNOWN_SOURCE).to_string();
        Self {
            message,
            src: thread_name,
            time: SystemTime::now(),
        }
    }

    pub fn time_string(&self, format: &str) -> String
    {
        DateTime::<Local>::from(self.time).format(format).to_string()
    }
}

impl Display for LoggedMessage
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.time_string(defines::TIME_FORMAT), self.src, self.message)
    }
}
