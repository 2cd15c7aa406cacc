//! Event emitter embedded in card callbacks.

use flume::Sender;

/// Handle for queueing events from Props callbacks.
///
/// Every card callback holds a clone of the runtime's emitter. Cloning is a
/// channel-sender clone, so a screen full of cards costs a handful of
/// reference-count bumps per render.
///
/// Events are only queued here; the runtime applies them when its queue is
/// drained, in the order they were emitted.
pub struct Emitter<Event>(pub(crate) Sender<Event>);

impl<Event> Clone for Emitter<Event> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<Event> Emitter<Event> {
    pub(crate) fn new(sender: Sender<Event>) -> Self {
        Self(sender)
    }

    /// Queue an event for the runtime.
    ///
    /// Emitting after the runtime has been dropped is a no-op.
    pub fn emit(&self, event: Event) {
        if self.0.send(event).is_err() {
            tracing::debug!("event dropped: runtime no longer running");
        }
    }
}
