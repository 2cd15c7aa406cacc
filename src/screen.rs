//! The recipe screen: events, Props and the logic tying them to the store.

use crate::recipe::{demo_ingredients, Flag, Ingredient, ImageRes, Recipe};
use crate::store::RecipeStore;
use crate::theme::{Color, Theme};
use crate::{Effect, Emitter, MvuLogic};

pub const CARD_TITLE: &str = "Vegemite toast";
pub const CARD_SUBTITLE: &str = "Toast with vegemite";
pub const PREP_TIME: &str = "40 min";
pub const PREP_TYPE: &str = "Quick prep";
pub const TAGS: [&str; 3] = ["Family friendly", "Easy to cook", "Low carb"];
pub const NUTRITION_LABEL: &str = "Nutrition";
pub const ADD_MEAL_LABEL: &str = "Add meal";
pub const REMOVE_MEAL_LABEL: &str = "Remove meal";

/// A user intent targeting the card at the given index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    ToggleSelected(usize),
    ToggleExpanded(usize),
    ToggleFavourite(usize),
}

impl ScreenEvent {
    pub fn index(self) -> usize {
        match self {
            ScreenEvent::ToggleSelected(i)
            | ScreenEvent::ToggleExpanded(i)
            | ScreenEvent::ToggleFavourite(i) => i,
        }
    }

    pub fn flag(self) -> Flag {
        match self {
            ScreenEvent::ToggleSelected(_) => Flag::Selected,
            ScreenEvent::ToggleExpanded(_) => Flag::Expanded,
            ScreenEvent::ToggleFavourite(_) => Flag::Favourite,
        }
    }
}

pub type Callback = Box<dyn Fn() + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Info,
    Star,
    ArrowForward,
    ThumbUp,
    Favourite,
    FavouriteBorder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconProps {
    pub icon: Icon,
    pub tint: Color,
}

/// Rounded label with a filled background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PillProps {
    pub label: &'static str,
    pub background: Color,
    pub text: Color,
}

/// The horizontally scrolling metadata row under the title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRowProps {
    pub prep_time: &'static str,
    pub prep_type: PillProps,
    pub rating: IconProps,
    pub forward: IconProps,
    pub tags: [&'static str; 3],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonProps {
    pub icon: Option<Icon>,
    pub label: &'static str,
    pub background: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRowProps {
    /// "Nutrition"; has no handler.
    pub secondary: ButtonProps,
    /// "Add meal" or "Remove meal"; invokes [`CardProps::on_select`].
    pub primary: ButtonProps,
}

pub struct CardProps {
    pub index: usize,
    pub image: ImageRes,
    /// Heart overlaid on the image; invokes [`CardProps::on_favourite`].
    pub favourite: IconProps,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub info: InfoRowProps,
    /// Present only while the card is expanded.
    pub ingredients: Option<Vec<Ingredient>>,
    pub actions: ActionRowProps,
    pub border: Option<Color>,
    pub on_select: Callback,
    /// Tapping anywhere on the card body.
    pub on_expand: Callback,
    pub on_favourite: Callback,
}

pub struct ScreenProps {
    pub background: Color,
    pub cards: Vec<CardProps>,
}

/// The three callbacks a card exposes.
pub struct CardCallbacks {
    pub on_select: Callback,
    pub on_expand: Callback,
    pub on_favourite: Callback,
}

impl CardCallbacks {
    /// Callbacks that emit this card's events through `emitter`.
    pub fn bound(index: usize, emitter: &Emitter<ScreenEvent>) -> Self {
        let emit = |event: ScreenEvent| -> Callback {
            let emitter = emitter.clone();
            Box::new(move || emitter.emit(event))
        };
        Self {
            on_select: emit(ScreenEvent::ToggleSelected(index)),
            on_expand: emit(ScreenEvent::ToggleExpanded(index)),
            on_favourite: emit(ScreenEvent::ToggleFavourite(index)),
        }
    }

    pub fn noop() -> Self {
        Self {
            on_select: Box::new(|| {}),
            on_expand: Box::new(|| {}),
            on_favourite: Box::new(|| {}),
        }
    }
}

pub fn info_row() -> InfoRowProps {
    InfoRowProps {
        prep_time: PREP_TIME,
        prep_type: PillProps {
            label: PREP_TYPE,
            background: Color::Green,
            text: Color::Black,
        },
        rating: IconProps {
            icon: Icon::Star,
            tint: Color::Red,
        },
        forward: IconProps {
            icon: Icon::ArrowForward,
            tint: Color::Blue,
        },
        tags: TAGS,
    }
}

fn favourite_icon(is_favourite: bool) -> IconProps {
    if is_favourite {
        IconProps {
            icon: Icon::Favourite,
            tint: Color::Red,
        }
    } else {
        IconProps {
            icon: Icon::FavouriteBorder,
            tint: Color::Default,
        }
    }
}

fn action_row(is_selected: bool) -> ActionRowProps {
    let primary = if is_selected {
        ButtonProps {
            icon: None,
            label: REMOVE_MEAL_LABEL,
            background: Color::Green,
        }
    } else {
        ButtonProps {
            icon: None,
            label: ADD_MEAL_LABEL,
            background: Color::Red,
        }
    };
    ActionRowProps {
        secondary: ButtonProps {
            icon: Some(Icon::ThumbUp),
            label: NUTRITION_LABEL,
            background: Color::Default,
        },
        primary,
    }
}

/// Props for a single card showing `recipe` at position `index`.
pub fn card(index: usize, recipe: &Recipe, callbacks: CardCallbacks) -> CardProps {
    CardProps {
        index,
        image: recipe.image,
        favourite: favourite_icon(recipe.is_favourite),
        title: CARD_TITLE,
        subtitle: CARD_SUBTITLE,
        info: info_row(),
        ingredients: recipe.is_expanded.then(demo_ingredients),
        actions: action_row(recipe.is_selected),
        border: recipe.is_selected.then_some(Color::Green),
        on_select: callbacks.on_select,
        on_expand: callbacks.on_expand,
        on_favourite: callbacks.on_favourite,
    }
}

/// Screen logic over a [`RecipeStore`].
#[derive(Debug, Clone, Default)]
pub struct RecipeScreen {
    theme: Theme,
    startup: Vec<ScreenEvent>,
}

impl RecipeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Events replayed once, in order, right after the first render.
    pub fn with_startup_events(mut self, events: Vec<ScreenEvent>) -> Self {
        self.startup = events;
        self
    }
}

impl MvuLogic<ScreenEvent, RecipeStore, ScreenProps> for RecipeScreen {
    fn init(&self, model: RecipeStore) -> (RecipeStore, Effect<ScreenEvent>) {
        tracing::info!(recipes = model.len(), startup = self.startup.len(), "recipe screen initialised");
        (model, self.startup.iter().copied().collect())
    }

    fn update(&self, event: ScreenEvent, model: &RecipeStore) -> (RecipeStore, Effect<ScreenEvent>) {
        match model.toggled(event.index(), event.flag()) {
            Ok(next) => {
                tracing::debug!(?event, "recipe toggled");
                (next, Effect::none())
            }
            Err(err) => {
                tracing::warn!(?event, %err, "ignoring toggle");
                (model.clone(), Effect::none())
            }
        }
    }

    fn view(&self, model: &RecipeStore, emitter: &Emitter<ScreenEvent>) -> ScreenProps {
        let cards = model
            .recipes()
            .iter()
            .enumerate()
            .map(|(index, recipe)| card(index, recipe, CardCallbacks::bound(index, emitter)))
            .collect();

        ScreenProps {
            background: self.theme.background,
            cards,
        }
    }
}
