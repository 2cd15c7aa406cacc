//! Renderer abstraction for drawing Props.

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// Draws Props produced by [`MvuLogic::view`](crate::MvuLogic::view).
///
/// The runtime calls [`render`](Self::render) once at start-up and once per
/// processed event, always with a complete snapshot. Props may carry
/// callbacks; a renderer that handles input keeps the latest Props around so
/// it can invoke them.
///
/// # Example
///
/// ```rust
/// use recipe_cards::{Renderer, ScreenProps};
///
/// struct CardCounter(usize);
///
/// impl Renderer<ScreenProps> for CardCounter {
///     fn render(&mut self, props: ScreenProps) {
///         self.0 = props.cards.len();
///     }
/// }
/// ```
pub trait Renderer<Props> {
    fn render(&mut self, props: Props);
}

impl<Props, R> Renderer<Props> for Box<R>
where
    R: Renderer<Props> + ?Sized,
{
    fn render(&mut self, props: Props) {
        (**self).render(props);
    }
}

#[cfg(any(test, feature = "testing"))]
/// Renderer that captures every Props it receives.
///
/// Only available with the `testing` feature.
///
/// Clones share the same capture buffer, so keep one clone for assertions
/// and hand [`boxed`](Self::boxed) (or another clone) to the runtime.
///
/// ```rust
/// use recipe_cards::{RecipeScreen, RecipeStore, ScreenProps, TestMvuRuntime, TestRenderer};
///
/// let renderer = TestRenderer::<ScreenProps>::new();
/// let runtime = TestMvuRuntime::new(
///     RecipeStore::demo(),
///     RecipeScreen::new(),
///     renderer.boxed(),
/// );
/// let _driver = runtime.run();
///
/// renderer.with_renders(|renders| {
///     assert_eq!(renders[0].cards.len(), 6);
/// });
/// ```
pub struct TestRenderer<Props> {
    renders: Arc<Mutex<Vec<Props>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Clone for TestRenderer<Props> {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Renderer<Props> for TestRenderer<Props> {
    fn render(&mut self, props: Props) {
        self.renders.lock().push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props: 'static> Default for TestRenderer<Props> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props: 'static> TestRenderer<Props> {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A boxed renderer sharing this renderer's capture buffer.
    pub fn boxed(&self) -> Box<dyn Renderer<Props>> {
        Box::new(self.clone())
    }

    /// Number of renders captured so far.
    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// Run `f` over every captured Props, oldest first.
    ///
    /// Callbacks invoked from inside `f` only queue events, so it is safe to
    /// trigger them here and process the queue afterwards.
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Props>) -> R,
    {
        let renders = self.renders.lock();
        f(&renders)
    }

    /// Run `f` over the most recent Props.
    ///
    /// # Panics
    ///
    /// Panics if nothing has been rendered yet.
    pub fn with_latest<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Props) -> R,
    {
        let renders = self.renders.lock();
        f(renders.last().expect("no props rendered yet"))
    }
}
