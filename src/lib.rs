//! A recipe card screen built on a small Model-View-Update (MVU) runtime.
//!
//! The [`RecipeStore`] is the model, [`RecipeScreen`] reduces it to
//! [`ScreenProps`] whose callbacks emit [`ScreenEvent`]s, and the
//! [`MvuRuntime`] folds those events back into a new store before rendering
//! again. Every user-visible change is one flag flipped on one recipe.
//!
//! ## Example
//!
//! ```rust
//! use recipe_cards::{MvuRuntime, RecipeScreen, RecipeStore, Renderer, ScreenProps};
//!
//! struct Labels(Vec<&'static str>);
//!
//! impl Renderer<ScreenProps> for Labels {
//!     fn render(&mut self, props: ScreenProps) {
//!         self.0 = props.cards.iter().map(|c| c.actions.primary.label).collect();
//!     }
//! }
//!
//! let mut runtime = MvuRuntime::new(RecipeStore::demo(), RecipeScreen::new(), Labels(vec![]));
//! runtime.start();
//!
//! runtime.emitter().emit(recipe_cards::ScreenEvent::ToggleSelected(1));
//! runtime.process_events();
//!
//! assert_eq!(runtime.renderer().0[0], "Add meal");
//! assert_eq!(runtime.renderer().0[1], "Remove meal");
//! ```

mod effect;
mod emitter;
mod logic;
mod renderer;
mod runtime;

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod preview;
pub mod recipe;
pub mod screen;
pub mod session;
pub mod store;
pub mod terminal;
pub mod theme;

pub use effect::Effect;
pub use emitter::Emitter;
pub use logic::MvuLogic;
pub use renderer::Renderer;
pub use runtime::MvuRuntime;

pub use recipe::{Flag, Ingredient, Recipe};
pub use screen::{CardProps, RecipeScreen, ScreenEvent, ScreenProps};
pub use store::{RecipeStore, StoreError};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
#[cfg(any(test, feature = "testing"))]
pub use runtime::{TestMvuDriver, TestMvuRuntime};
