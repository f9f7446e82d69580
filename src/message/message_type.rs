use std::fmt::Display;

/// Category of a [`Message`](super::Message).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageType
{
    #[default]
    Message,
    Warning,
    Error,
}

impl Display for MessageType
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}",self)
    }
}
