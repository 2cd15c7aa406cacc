//! Screen logic trait defining the MVU contract.

use crate::{Effect, Emitter};

/// The three pure functions a screen provides to the runtime.
///
/// - [`init`](Self::init): prepare the starting model and start-up effects
/// - [`update`](Self::update): fold one event into a new model
/// - [`view`](Self::view): derive Props, wiring callbacks through the emitter
///
/// [`RecipeScreen`](crate::RecipeScreen) is the implementation shipped with
/// this crate.
pub trait MvuLogic<Event, Model, Props> {
    /// Called once by [`MvuRuntime::start`](crate::MvuRuntime::start) before
    /// the first render.
    fn init(&self, model: Model) -> (Model, Effect<Event>);

    /// Produce the next model for `event`.
    ///
    /// The returned model replaces the current one wholesale; `model` itself
    /// is never mutated.
    fn update(&self, event: Event, model: &Model) -> (Model, Effect<Event>);

    /// Derive renderable Props from a model snapshot.
    fn view(&self, model: &Model, emitter: &Emitter<Event>) -> Props;
}

impl<Event, Model, Props, L> MvuLogic<Event, Model, Props> for Box<L>
where
    L: MvuLogic<Event, Model, Props> + ?Sized,
{
    fn init(&self, model: Model) -> (Model, Effect<Event>) {
        (**self).init(model)
    }

    fn update(&self, event: Event, model: &Model) -> (Model, Effect<Event>) {
        (**self).update(event, model)
    }

    fn view(&self, model: &Model, emitter: &Emitter<Event>) -> Props {
        (**self).view(model, emitter)
    }
}
