use std::{sync::{Arc, Mutex}, collections::LinkedList};

use crate::{config::{Config, MessengerConfig}, error::Error, message::{Message, MessageType}};

use super::{LoggedMessage, MessageLog};

/// Shared handle to a message log.
///
/// Clones refer to the same log, so any thread can post while the front end
/// polls [`Messenger::has_new_messages`] and drains with [`Messenger::get`].
/// Locks are always taken log first, then notification.
#[derive(Clone)]
pub struct Messenger
{
    log: Arc<Mutex<MessageLog>>,
    notification: Arc<Mutex<bool>>
}

impl Messenger
{
    pub fn new() -> Self
    {
        Self::from_config(&MessengerConfig::default())
    }

    pub fn from_config(config: &MessengerConfig) -> Self
    {
        Self {
            log: Arc::new(Mutex::new(MessageLog::new(config))),
            notification: Arc::new(Mutex::new(false))
        }
    }

    /// Reads the messenger settings from a TOML file such as
    /// [`defines::CONFIG_PATH`](crate::config::defines::CONFIG_PATH).
    /// An unreadable file falls back to the defaults and is reported as the
    /// first error in the log.
    pub fn from_config_file(path: &str) -> Self
    {
        match Config::from_file(path)
        {
            Ok(config) => Self::from_config(&config.messenger),
            Err(e) => {
                let messenger = Self::new();
                // nothing else holds the locks yet
                let _ = messenger.error(&format!("Error occurred while reading config file: {}",e));
                messenger
            }
        }
    }

    pub fn post(&self, message: Message) -> Result<(),Error>
    {
        let mut log = self.log.lock()?;
        let mut notification = self.notification.lock()?;
        log.add(LoggedMessage::new(message));
        *notification = true;
        Ok(())
    }

    pub fn send(&self, kind: MessageType, text: &str) -> Result<(),Error>
    {
        self.post(Message::with_type(text, kind))
    }

    pub fn message(&self, text: &str) -> Result<(),Error>
    {
        self.send(MessageType::Message, text)
    }

    pub fn warning(&self, text: &str) -> Result<(),Error>
    {
        self.send(MessageType::Warning, text)
    }

    pub fn error(&self, text: &str) -> Result<(),Error>
    {
        self.send(MessageType::Error, text)
    }

    pub fn get(&self) -> Result<LinkedList<LoggedMessage>,Error>
    {
        let log = self.log.lock()?;
        let mut notification = self.notification.lock()?;
        let messages = (*log.get()).clone();
        *notification = false;
        Ok(messages)
    }

    pub fn latest(&self) -> Result<Option<LoggedMessage>,Error>
    {
        let log = self.log.lock()?;
        Ok(log.last().cloned())
    }

    pub fn has_new_messages(&self) -> Result<bool,Error>
    {
        let notification = self.notification.lock()?;
        Ok(*notification)
    }

    pub fn clear(&self) -> Result<(),Error>
    {
        let mut log = self.log.lock()?;
        let mut notification = self.notification.lock()?;
        log.clear();
        *notification = false;
        Ok(())
    }
}

impl Default for Messenger
{
    fn default() -> Self {
        Self::new()
    }
}
