//! Declarative follow-up events returned alongside a new model.

use crate::Emitter;

/// Declarative description of events to be queued after a model change.
///
/// Effects are returned from [`MvuLogic::init`](crate::MvuLogic::init) and
/// [`MvuLogic::update`](crate::MvuLogic::update). The runtime executes them
/// synchronously right after rendering, so any events they emit are processed
/// on the next pass over the queue.
///
/// # Example
///
/// ```rust
/// use recipe_cards::{Effect, ScreenEvent};
///
/// // Expand the first card and favourite the second one at start-up.
/// let effect = Effect::batch(vec![
///     Effect::just(ScreenEvent::ToggleExpanded(0)),
///     Effect::just(ScreenEvent::ToggleFavourite(1)),
/// ]);
///
/// let nothing: Effect<ScreenEvent> = Effect::none();
/// ```
#[allow(clippy::type_complexity)]
pub struct Effect<Event>(Box<dyn Fn(&Emitter<Event>) + Send + 'static>);

impl<Event: 'static> Effect<Event> {
    /// Queue every event this effect describes.
    pub fn execute(&self, emitter: &Emitter<Event>) {
        (self.0)(emitter);
    }

    /// An effect that emits a single event.
    pub fn just(event: Event) -> Self
    where
        Event: Clone + Send,
    {
        Self(Box::new(move |emitter: &Emitter<Event>| {
            emitter.emit(event.clone());
        }))
    }

    /// An effect that does nothing.
    pub fn none() -> Self {
        Self(Box::new(|_: &Emitter<Event>| {}))
    }

    /// Combine effects; their events are queued in the order given.
    pub fn batch(effects: Vec<Effect<Event>>) -> Self {
        Self(Box::new(move |emitter: &Emitter<Event>| {
            for effect in &effects {
                effect.execute(emitter);
            }
        }))
    }
}

impl<Event: Clone + Send + 'static> FromIterator<Event> for Effect<Event> {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        let effects: Vec<_> = iter.into_iter().map(Effect::just).collect();
        if effects.is_empty() {
            Effect::none()
        } else {
            Effect::batch(effects)
        }
    }
}
