use std::collections::LinkedList;

use crate::{config::MessengerConfig, message::{Message, MessageType}};

use super::LoggedMessage;

pub struct MessageLog
{
    messages: LinkedList<LoggedMessage>,
    capacity: usize,
}

impl MessageLog
{
    pub fn new(config: &MessengerConfig) -> Self
    {
        let mut ret = Self {
            messages: LinkedList::new(),
            capacity: config.capacity,
        };
        if let Some(welcome) = &config.welcome
        {
            ret.add(LoggedMessage::new(Message::new(welcome.as_str())));
        }
        ret
    }

    pub fn add(&mut self, message: LoggedMessage)
    {
        self.messages.push_back(message);
        while self.messages.len() > self.capacity
        {
            self.messages.pop_front();
        }
    }

    pub fn get(&self) -> &LinkedList<LoggedMessage>
    {
        &self.messages
    }

    pub fn last(&self) -> Option<&LoggedMessage>
    {
        self.messages.back()
    }

    pub fn count(&self, kind: MessageType) -> usize
    {
        self.messages.iter().filter(|m| m.message.kind == kind).count()
    }

    pub fn len(&self) -> usize
    {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.messages.is_empty()
    }

    pub fn clear(&mut self)
    {
        self.messages.clear();
    }
}
