use std::fmt::Display;

use super::MessageType;

/// A piece of text together with its category.
///
/// Both fields are public, so a message can be edited in place after it is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message
{
    pub text: String,
    pub kind: MessageType,
}

impl Message
{
    /// Builds a message of the default [`MessageType::Message`] category.
    pub fn new(text: impl Into<String>) -> Self
    {
        Self::with_type(text, MessageType::default())
    }

    pub fn with_type(text: impl Into<String>, kind: MessageType) -> Self
    {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn text(&self) -> &str
    {
        &self.text
    }

    pub fn kind(&self) -> MessageType
    {
        self.kind
    }
}

impl From<&str> for Message
{
    fn from(text: &str) -> Self {
        Message::new(text)
    }
}

impl From<String> for Message
{
    fn from(text: String) -> Self {
        Message::new(text)
    }
}

impl Display for Message
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind
        {
            MessageType::Message => write!(f, "{}", self.text),
            kind => write!(f, "{}: {}", kind, self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_succeeded() {
        let message = Message::new("Build succeeded");
        assert_eq!(message.text, "Build succeeded");
        assert_eq!(message.kind, MessageType::Message);
    }

    #[test]
    fn build_failed() {
        let message = Message::with_type("Build failed", MessageType::Error);
        assert_eq!(message.text(), "Build failed");
        assert_eq!(message.kind(), MessageType::Error);
    }

    #[test]
    fn empty_text() {
        let message = Message::new("");
        assert_eq!(message.text, "");
        assert_eq!(message.kind, MessageType::Message);
    }

    #[test]
    fn fields_round_trip() {
        let texts = ["", "a", "Höhenkarte erzeugt", "line\nbreak"];
        let kinds = [MessageType::Message, MessageType::Warning, MessageType::Error];
        for text in texts
        {
            assert_eq!(Message::new(text).kind, MessageType::Message);
            for kind in kinds
            {
                let message = Message::with_type(text, kind);
                assert_eq!(message.text, text);
                assert_eq!(message.kind, kind);
            }
        }
    }

    #[test]
    fn mutation() {
        let mut message = Message::new("Compiling");
        message.text = "Compilation failed".to_string();
        message.kind = MessageType::Error;
        assert_eq!(message.text(), "Compilation failed");
        assert_eq!(message.kind(), MessageType::Error);
    }

    #[test]
    fn independent_instances() {
        let mut first = Message::with_type("Map saved", MessageType::Warning);
        let second = Message::with_type("Map saved", MessageType::Warning);
        first.text.push('!');
        first.kind = MessageType::Message;
        assert_eq!(second.text, "Map saved");
        assert_eq!(second.kind, MessageType::Warning);
    }

    #[test]
    fn from_strings() {
        assert_eq!(Message::from("a"), Message::new("a"));
        assert_eq!(Message::from("b".to_string()), Message::new("b"));
    }

    #[test]
    fn display() {
        assert_eq!(Message::new("Ready").to_string(), "Ready");
        assert_eq!(Message::with_type("Disk full", MessageType::Warning).to_string(), "Warning: Disk full");
        assert_eq!(Message::with_type("Crash", MessageType::Error).to_string(), "Error: Crash");
    }
}
