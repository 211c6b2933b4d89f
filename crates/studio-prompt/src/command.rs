//! Chat commands

use studio_core::MessageAction;

/// What a chat input asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `/reflect`: reflective questions
    Reflect,
    /// `/creative`: alternative cards and approaches
    Creative,
    /// `/provoke`: challenge assumptions
    Provoke,
    /// `/help`: answered locally
    Help,
    /// Anything else
    Chat,
}

impl Command {
    /// Classify raw chat input by its leading command, case-insensitively
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let lower = input.trim_start().to_lowercase();
        if lower.starts_with("/reflect") {
            Command::Reflect
        } else if lower.starts_with("/creative") {
            Command::Creative
        } else if lower.starts_with("/provoke") {
            Command::Provoke
        } else if lower.starts_with("/help") {
            Command::Help
        } else {
            Command::Chat
        }
    }

    /// Action tag of the answering chat turn
    #[must_use]
    pub fn action(self) -> MessageAction {
        match self {
            Command::Reflect => MessageAction::Reflect,
            Command::Creative => MessageAction::Creative,
            Command::Provoke => MessageAction::Provoke,
            Command::Help => MessageAction::Info,
            Command::Chat => MessageAction::Suggestion,
        }
    }

    /// Served without calling the generative service
    #[inline]
    #[must_use]
    pub fn is_local(self) -> bool {
        matches!(self, Command::Help)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Reflect => "reflect",
            Command::Creative => "creative",
            Command::Provoke => "provoke",
            Command::Help => "help",
            Command::Chat => "chat",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("/reflect"), Command::Reflect);
        assert_eq!(Command::parse("/Creative please"), Command::Creative);
        assert_eq!(Command::parse("  /PROVOKE"), Command::Provoke);
        assert_eq!(Command::parse("/help"), Command::Help);
        assert_eq!(Command::parse("what about /reflect?"), Command::Chat);
        assert_eq!(Command::parse(""), Command::Chat);
    }

    #[test]
    fn actions() {
        assert_eq!(Command::Help.action(), MessageAction::Info);
        assert_eq!(Command::Chat.action(), MessageAction::Suggestion);
        assert!(Command::Help.is_local());
        assert!(!Command::Reflect.is_local());
    }
}
