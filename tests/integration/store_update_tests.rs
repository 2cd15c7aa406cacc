use std::sync::Arc;

use recipe_cards::{Flag, RecipeStore, ScreenEvent, StoreError};

use super::{build_screen_test, event_for, store_of};

#[test]
fn given_the_demo_store_should_hold_six_recipes_with_all_flags_cleared() {
    let store = RecipeStore::demo();

    assert_eq!(store.len(), 6);
    for recipe in store.recipes() {
        for flag in Flag::ALL {
            assert!(!recipe.flag(flag));
        }
    }
}

#[test]
fn given_a_select_toggle_applied_twice_should_restore_the_item() {
    let mut test = build_screen_test().build();
    let before = test.driver.model().clone();

    test.apply(ScreenEvent::ToggleSelected(2));
    assert!(test.recipe(2).is_selected);
    assert!(!test.recipe(2).is_favourite);
    assert!(!test.recipe(2).is_expanded);

    test.apply(ScreenEvent::ToggleSelected(2));
    assert_eq!(*test.driver.model(), before);
}

#[test]
fn given_any_toggle_on_one_index_should_leave_every_other_index_untouched() {
    for flag in Flag::ALL {
        for i in 0..4 {
            let store = store_of(4);
            let next = store.toggled(i, flag).unwrap();

            for j in (0..4).filter(|j| *j != i) {
                assert_eq!(next.get(j), store.get(j), "index {j} changed after {flag:?} on {i}");
                assert!(Arc::ptr_eq(&next.recipes()[j], &store.recipes()[j]));
            }
            assert_ne!(next.get(i), store.get(i));
        }
    }
}

#[test]
fn given_a_toggle_on_one_flag_should_leave_the_other_flags_of_that_item_alone() {
    for toggled in Flag::ALL {
        for observed in Flag::ALL.into_iter().filter(|f| *f != toggled) {
            // Start with the observed flag set so a stray flip shows either way.
            let mut test = build_screen_test().given_a_store_of(1).build();
            test.apply(event_for(0, observed));
            assert!(test.recipe(0).flag(observed));

            test.apply(event_for(0, toggled));

            assert!(test.recipe(0).flag(toggled));
            assert!(
                test.recipe(0).flag(observed),
                "{observed:?} changed when toggling {toggled:?}"
            );
        }
    }
}

#[test]
fn given_an_out_of_range_event_should_keep_the_store_and_still_render() {
    let mut test = build_screen_test().given_a_store_of(2).build();
    let before = test.driver.model().clone();

    test.apply(ScreenEvent::ToggleExpanded(7));

    assert_eq!(*test.driver.model(), before);
    assert_eq!(test.renders.count(), 2);
    assert_eq!(
        before.toggled(7, Flag::Expanded),
        Err(StoreError::IndexOutOfRange { index: 7, len: 2 })
    );
}
