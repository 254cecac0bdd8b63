//! Gesture Commands
//!
//! One text line per user gesture, applied to the [`ListScreen`].

use std::str::FromStr;

use list_core::{ItemId, SwipeAction};
use thiserror::Error;

use crate::screen::ListScreen;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("`{0}` needs an item id")]
    MissingId(&'static str),
    #[error("invalid item id: {0}")]
    InvalidId(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Type into the add input and submit
    Add(String),
    Toggle(ItemId),
    Swipe(ItemId),
    Close,
    /// Press the revealed edit button
    Edit(ItemId),
    /// Replace the edit draft
    Type(String),
    /// Submit the edit draft
    Save,
    /// Press the revealed delete button
    Delete(ItemId),
    List,
}

fn parse_id(name: &'static str, arg: &str) -> Result<ItemId, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingId(name));
    }
    arg.parse::<u32>()
        .map(ItemId::from_raw)
        .map_err(|_| CommandError::InvalidId(arg.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        match name {
            "" => Err(CommandError::Empty),
            "add" => Ok(Command::Add(arg.to_string())),
            "toggle" => parse_id("toggle", arg).map(Command::Toggle),
            "swipe" => parse_id("swipe", arg).map(Command::Swipe),
            "close" => Ok(Command::Close),
            "edit" => parse_id("edit", arg).map(Command::Edit),
            "type" => Ok(Command::Type(arg.to_string())),
            "save" => Ok(Command::Save),
            "delete" => parse_id("delete", arg).map(Command::Delete),
            "list" => Ok(Command::List),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

impl Command {
    pub fn apply(self, screen: &mut ListScreen) -> anyhow::Result<()> {
        match self {
            Command::Add(text) => {
                screen.set_draft(text);
                screen.submit_draft()?;
            }
            Command::Toggle(id) => {
                screen.toggle(id);
            }
            Command::Swipe(id) => screen.swipe(id),
            Command::Close => screen.close_swipe(),
            Command::Edit(id) => {
                screen.press(SwipeAction::Edit(id));
            }
            Command::Type(text) => screen.set_edit_draft(text),
            Command::Save => {
                screen.submit_edit()?;
            }
            Command::Delete(id) => {
                screen.press(SwipeAction::Delete(id));
            }
            Command::List => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use list_core::{ItemStore, StoreConfig, TextPolicy};

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "add Buy milk".parse::<Command>(),
            Ok(Command::Add("Buy milk".to_string()))
        );
        assert_eq!("add".parse::<Command>(), Ok(Command::Add(String::new())));
        assert_eq!(
            " toggle 3 ".parse::<Command>(),
            Ok(Command::Toggle(ItemId::from_raw(3)))
        );
        assert_eq!("save".parse::<Command>(), Ok(Command::Save));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("delete".parse::<Command>(), Err(CommandError::MissingId("delete")));
        assert_eq!(
            "edit x".parse::<Command>(),
            Err(CommandError::InvalidId("x".to_string()))
        );
        assert_eq!(
            "jump 1".parse::<Command>(),
            Err(CommandError::Unknown("jump".to_string()))
        );
    }

    #[test]
    fn test_session_script() {
        let mut screen = ListScreen::new(ItemStore::new());
        let script = ["add A", "add B", "toggle 1", "swipe 2", "edit 2", "type B2", "save", "delete 1"];
        for line in script {
            line.parse::<Command>().unwrap().apply(&mut screen).unwrap();
        }

        let items = screen.store().items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "B2");
        assert!(!items[0].checked);
    }

    #[test]
    fn test_delete_unknown_id_succeeds() {
        let mut screen = ListScreen::new(ItemStore::new());
        assert!(Command::Delete(ItemId::from_raw(999)).apply(&mut screen).is_ok());
    }

    #[test]
    fn test_rejected_add_surfaces_error() {
        let config = StoreConfig {
            seed: Vec::new(),
            text_policy: TextPolicy::RejectBlank,
        };
        let mut screen = ListScreen::new(ItemStore::from_config(&config).unwrap());

        assert!(Command::Add("  ".to_string()).apply(&mut screen).is_err());
        assert_eq!(screen.draft(), "  ");
    }
}
