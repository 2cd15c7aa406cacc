//! Stand-alone renders of screen pieces with inert callbacks.

use clap::ValueEnum;

use crate::recipe::Recipe;
use crate::screen::{self, CardCallbacks, InfoRowProps, PillProps, ScreenProps};
use crate::store::RecipeStore;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preview {
    /// The first demonstration recipe as a single card.
    Card,
    /// The metadata row on its own.
    Info,
    PrepTime,
    /// The "Quick prep" pill.
    PrepType,
    /// Every demonstration recipe.
    Screen,
}

pub fn card(recipe: &Recipe, theme: &Theme) -> ScreenProps {
    ScreenProps {
        background: theme.background,
        cards: vec![screen::card(0, recipe, CardCallbacks::noop())],
    }
}

pub fn info_row() -> InfoRowProps {
    screen::info_row()
}

pub fn prep_time() -> &'static str {
    screen::info_row().prep_time
}

pub fn prep_type() -> PillProps {
    screen::info_row().prep_type
}

pub fn screen(theme: &Theme) -> ScreenProps {
    let store = RecipeStore::demo();
    ScreenProps {
        background: theme.background,
        cards: store
            .recipes()
            .iter()
            .enumerate()
            .map(|(index, recipe)| screen::card(index, recipe, CardCallbacks::noop()))
            .collect(),
    }
}
