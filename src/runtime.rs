//! The MVU runtime that owns the model and drives the event loop.

use flume::Receiver;

use crate::{Emitter, MvuLogic, Renderer};

/// The MVU runtime.
///
/// Owns the current model and is the only place it is replaced:
/// 1. [`start`](Self::start) runs [`MvuLogic::init`], renders the first
///    snapshot and executes the start-up effect
/// 2. [`process_events`](Self::process_events) drains queued events, running
///    [`MvuLogic::update`] then [`MvuLogic::view`] and [`Renderer::render`]
///    for each, strictly in emission order
///
/// Everything happens on the calling thread. Callbacks inside rendered Props
/// only queue events through the [`Emitter`]; nothing changes until the
/// queue is drained.
pub struct MvuRuntime<Event, Model, Props, Logic, Render>
where
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
{
    logic: Logic,
    renderer: Render,
    event_receiver: Receiver<Event>,
    model: Model,
    emitter: Emitter<Event>,
    _props: core::marker::PhantomData<Props>,
}

impl<Event, Model, Props, Logic, Render> MvuRuntime<Event, Model, Props, Logic, Render>
where
    Event: 'static,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
{
    /// Create a runtime. Nothing is rendered until [`start`](Self::start).
    pub fn new(init_model: Model, logic: Logic, renderer: Render) -> Self {
        let (event_sender, event_receiver) = flume::unbounded();

        MvuRuntime {
            logic,
            renderer,
            event_receiver,
            model: init_model,
            emitter: Emitter::new(event_sender),
            _props: core::marker::PhantomData,
        }
    }

    /// Initialise the model, render it and queue the start-up effect.
    ///
    /// Events queued by the start-up effect are applied by the next call to
    /// [`process_events`](Self::process_events).
    pub fn start(&mut self)
    where
        Model: Clone,
    {
        let (init_model, init_effect) = self.logic.init(self.model.clone());
        self.model = init_model;

        let props = self.logic.view(&self.model, &self.emitter);
        self.renderer.render(props);
        tracing::debug!("initial render complete");

        init_effect.execute(&self.emitter);
    }

    /// Apply every queued event, including those queued while draining.
    ///
    /// Returns the number of events processed.
    pub fn process_events(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_receiver.try_recv() {
            self.step(event);
            processed += 1;
        }
        if processed > 0 {
            tracing::trace!(processed, "event queue drained");
        }
        processed
    }

    /// The current model snapshot.
    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn renderer(&self) -> &Render {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Render {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> Render {
        self.renderer
    }

    /// A handle for queueing events from outside rendered Props.
    pub fn emitter(&self) -> Emitter<Event> {
        self.emitter.clone()
    }

    fn step(&mut self, event: Event) {
        let (new_model, effect) = self.logic.update(event, &self.model);

        let props = self.logic.view(&new_model, &self.emitter);
        self.renderer.render(props);

        self.model = new_model;

        effect.execute(&self.emitter);
    }
}

#[cfg(any(test, feature = "testing"))]
/// Driver returned by [`TestMvuRuntime::run`].
///
/// Only available with the `testing` feature or during tests.
pub struct TestMvuDriver<
    Event,
    Model,
    Props,
    Logic = Box<dyn MvuLogic<Event, Model, Props>>,
    Render = Box<dyn Renderer<Props>>,
> where
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
{
    runtime: MvuRuntime<Event, Model, Props, Logic, Render>,
}

#[cfg(any(test, feature = "testing"))]
impl<Event, Model, Props, Logic, Render> TestMvuDriver<Event, Model, Props, Logic, Render>
where
    Event: 'static,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
{
    /// Process all queued events.
    pub fn process_events(&mut self) -> usize {
        self.runtime.process_events()
    }

    /// The model after the last processed event.
    pub fn model(&self) -> &Model {
        self.runtime.model()
    }

    pub fn emitter(&self) -> Emitter<Event> {
        self.runtime.emitter()
    }
}

#[cfg(any(test, feature = "testing"))]
/// Runtime wrapper for tests with manual event processing.
///
/// Only available with the `testing` feature or during tests.
///
/// ```rust
/// use recipe_cards::{RecipeScreen, RecipeStore, ScreenProps, TestMvuRuntime, TestRenderer};
///
/// let renderer = TestRenderer::<ScreenProps>::new();
/// let mut driver = TestMvuRuntime::new(
///     RecipeStore::demo(),
///     RecipeScreen::new(),
///     renderer.boxed(),
/// )
/// .run();
///
/// renderer.with_latest(|props| (props.cards[2].on_expand)());
/// driver.process_events();
///
/// assert!(driver.model().get(2).unwrap().is_expanded);
/// ```
pub struct TestMvuRuntime<
    Event,
    Model,
    Props,
    Logic = Box<dyn MvuLogic<Event, Model, Props>>,
    Render = Box<dyn Renderer<Props>>,
> where
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
{
    runtime: MvuRuntime<Event, Model, Props, Logic, Render>,
}

#[cfg(any(test, feature = "testing"))]
impl<Event, Model, Props, Logic, Render> TestMvuRuntime<Event, Model, Props, Logic, Render>
where
    Event: 'static,
    Model: Clone,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
{
    pub fn new(init_model: Model, logic: Logic, renderer: Render) -> Self {
        TestMvuRuntime {
            runtime: MvuRuntime::new(init_model, logic, renderer),
        }
    }

    /// Render the initial state and queue start-up effects without
    /// processing them.
    pub fn run(mut self) -> TestMvuDriver<Event, Model, Props, Logic, Render> {
        self.runtime.start();
        TestMvuDriver {
            runtime: self.runtime,
        }
    }
}
