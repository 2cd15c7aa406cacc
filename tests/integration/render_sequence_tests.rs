use mockall::Sequence;
use recipe_cards::{MvuLogic, RecipeScreen, RecipeStore, ScreenEvent, ScreenProps, TestMvuRuntime};

use super::{store_of, MockSink};

fn screen() -> Box<dyn MvuLogic<ScreenEvent, RecipeStore, ScreenProps>> {
    Box::new(RecipeScreen::new())
}

#[test]
fn given_no_events_should_render_once() {
    let mut sink = MockSink::new();
    sink.expect_render()
        .withf(|props| props.cards.len() == 3)
        .times(1)
        .return_const(());

    let mut driver = TestMvuRuntime::new(store_of(3), screen(), sink).run();

    assert_eq!(driver.process_events(), 0);
}

#[test]
fn given_queued_events_should_render_each_snapshot_in_emission_order() {
    let mut seq = Sequence::new();
    let mut sink = MockSink::new();
    sink.expect_render()
        .withf(|props| props.cards.iter().all(|c| c.ingredients.is_none() && c.border.is_none()))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    sink.expect_render()
        .withf(|props| props.cards[0].ingredients.is_some() && props.cards[1].border.is_none())
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    sink.expect_render()
        .withf(|props| props.cards[0].ingredients.is_some() && props.cards[1].border.is_some())
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());

    let mut driver = TestMvuRuntime::new(store_of(2), screen(), sink).run();
    let emitter = driver.emitter();
    emitter.emit(ScreenEvent::ToggleExpanded(0));
    emitter.emit(ScreenEvent::ToggleSelected(1));

    assert_eq!(driver.process_events(), 2);
}
