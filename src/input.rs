//! Typed commands standing in for taps on the recipe screen.

use std::str::FromStr;

use thiserror::Error;

use crate::screen::{ScreenEvent, ScreenProps};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("'{0}' needs a card number")]
    MissingIndex(String),

    #[error("'{0}' is not a card number")]
    InvalidIndex(String),

    #[error("no card #{index} on screen ({len} shown)")]
    NoSuchCard { index: usize, len: usize },

    #[error("input line is not valid UTF-8")]
    NotUtf8,
}

/// One parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Press the "Add meal"/"Remove meal" button.
    Select(usize),
    /// Tap the card body.
    Expand(usize),
    /// Tap the heart.
    Favourite(usize),
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  s|select <n>      add or remove meal n
  e|expand <n>      show or hide the ingredients of card n
  f|fav <n>         mark or unmark card n as favourite
  h|help            show this help
  q|quit            exit";

impl FromStr for Intent {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.find(|c: char| c.is_ascii_digit() || c.is_whitespace()) {
            Some(at) => line.split_at(at),
            None => (line, ""),
        };
        let rest = rest.trim();

        let card = |make: fn(usize) -> Intent| -> Result<Intent, InputError> {
            if rest.is_empty() {
                return Err(InputError::MissingIndex(verb.to_string()));
            }
            rest.parse::<usize>()
                .map(make)
                .map_err(|_| InputError::InvalidIndex(rest.to_string()))
        };

        match verb.to_ascii_lowercase().as_str() {
            "s" | "select" => card(Intent::Select),
            "e" | "expand" => card(Intent::Expand),
            "f" | "fav" | "favourite" | "favorite" => card(Intent::Favourite),
            "h" | "help" | "?" => Ok(Intent::Help),
            "q" | "quit" | "exit" => Ok(Intent::Quit),
            _ => Err(InputError::UnknownCommand(line.to_string())),
        }
    }
}

impl Intent {
    /// Parse a comma-separated list such as `e0,s1,f1`.
    pub fn parse_script(script: &str) -> Result<Vec<Intent>, InputError> {
        script
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect()
    }

    /// The screen event this intent produces, if it targets a card.
    pub fn event(self) -> Option<ScreenEvent> {
        match self {
            Intent::Select(i) => Some(ScreenEvent::ToggleSelected(i)),
            Intent::Expand(i) => Some(ScreenEvent::ToggleExpanded(i)),
            Intent::Favourite(i) => Some(ScreenEvent::ToggleFavourite(i)),
            Intent::Help | Intent::Quit => None,
        }
    }

    /// Invoke the matching callback on the card this intent targets.
    ///
    /// `Help` and `Quit` are not card intents and do nothing here.
    pub fn dispatch(self, props: &ScreenProps) -> Result<(), InputError> {
        let index = match self {
            Intent::Select(i) | Intent::Expand(i) | Intent::Favourite(i) => i,
            Intent::Help | Intent::Quit => return Ok(()),
        };
        let card = props.cards.get(index).ok_or(InputError::NoSuchCard {
            index,
            len: props.cards.len(),
        })?;

        match self {
            Intent::Select(_) => (card.on_select)(),
            Intent::Expand(_) => (card.on_expand)(),
            Intent::Favourite(_) => (card.on_favourite)(),
            Intent::Help | Intent::Quit => {}
        }
        Ok(())
    }
}
