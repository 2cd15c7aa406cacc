use recipe_cards::recipe::RECIPE_IMAGE;
use recipe_cards::{
    Flag, MvuLogic, Recipe, RecipeScreen, RecipeStore, Renderer, ScreenEvent, ScreenProps,
    TestMvuDriver, TestMvuRuntime, TestRenderer,
};

pub(crate) type ScreenDriver = TestMvuDriver<ScreenEvent, RecipeStore, ScreenProps>;

mockall::mock! {
    pub(crate) Sink {}

    impl Renderer<ScreenProps> for Sink {
        fn render(&mut self, props: ScreenProps);
    }
}

/// A store of `n` recipes with every flag cleared.
pub(crate) fn store_of(n: usize) -> RecipeStore {
    RecipeStore::new(
        (1..=n)
            .map(|i| Recipe::new(format!("Recipe name {i}"), format!("Description {i}"), RECIPE_IMAGE))
            .collect(),
    )
}

pub(crate) fn event_for(index: usize, flag: Flag) -> ScreenEvent {
    match flag {
        Flag::Selected => ScreenEvent::ToggleSelected(index),
        Flag::Favourite => ScreenEvent::ToggleFavourite(index),
        Flag::Expanded => ScreenEvent::ToggleExpanded(index),
    }
}

pub(crate) fn build_screen_test() -> ScreenTestBuilder {
    ScreenTestBuilder {
        store: RecipeStore::demo(),
        startup: Vec::new(),
    }
}

pub(crate) struct ScreenTestBuilder {
    store: RecipeStore,
    startup: Vec<ScreenEvent>,
}

pub(crate) struct ScreenTest {
    pub(crate) driver: ScreenDriver,
    pub(crate) renders: TestRenderer<ScreenProps>,
}

impl ScreenTestBuilder {
    pub(crate) fn given_a_store_of(mut self, n: usize) -> Self {
        self.store = store_of(n);
        self
    }

    pub(crate) fn given_startup_events(mut self, events: Vec<ScreenEvent>) -> Self {
        self.startup = events;
        self
    }

    pub(crate) fn build(self) -> ScreenTest {
        let renders = TestRenderer::new();
        let logic: Box<dyn MvuLogic<ScreenEvent, RecipeStore, ScreenProps>> =
            Box::new(RecipeScreen::new().with_startup_events(self.startup));

        let driver = TestMvuRuntime::new(self.store, logic, renders.boxed()).run();

        ScreenTest { driver, renders }
    }
}

impl ScreenTest {
    /// Emit `event` and process it.
    pub(crate) fn apply(&mut self, event: ScreenEvent) {
        self.driver.emitter().emit(event);
        self.driver.process_events();
    }

    pub(crate) fn recipe(&self, index: usize) -> Recipe {
        self.driver
            .model()
            .get(index)
            .cloned()
            .expect("index within store")
    }
}
