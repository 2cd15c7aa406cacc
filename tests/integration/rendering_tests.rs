use recipe_cards::screen::{Icon, ADD_MEAL_LABEL, CARD_TITLE, PREP_TIME, REMOVE_MEAL_LABEL, TAGS};
use recipe_cards::terminal::TerminalRenderer;
use recipe_cards::theme::{Color, Theme};
use recipe_cards::{
    preview, Ingredient, RecipeScreen, RecipeStore, ScreenEvent, ScreenProps, TestMvuRuntime,
    TestRenderer,
};

use super::build_screen_test;

#[test]
fn given_two_recipes_when_first_expanded_should_show_five_ingredients_on_that_card_only() {
    let mut test = build_screen_test().given_a_store_of(2).build();

    test.renders.with_latest(|props| (props.cards[0].on_expand)());
    test.driver.process_events();

    test.renders.with_latest(|props| {
        assert_eq!(
            props.cards[0].ingredients,
            Some(vec![
                Ingredient::new("Beef", "400 g"),
                Ingredient::new("Carrot", "1"),
                Ingredient::new("Onion", "3"),
                Ingredient::new("Potato", "4"),
                Ingredient::new("Tomato paste", "2 sp"),
            ])
        );
        assert!(props.cards[1].ingredients.is_none());
    });
}

#[test]
fn given_a_favourite_tap_should_swap_the_outline_heart_for_a_red_one() {
    let mut test = build_screen_test().build();

    test.renders.with_latest(|props| {
        assert_eq!(props.cards[1].favourite.icon, Icon::FavouriteBorder);
        (props.cards[1].on_favourite)();
    });
    test.driver.process_events();

    test.renders.with_latest(|props| {
        assert_eq!(props.cards[1].favourite.icon, Icon::Favourite);
        assert_eq!(props.cards[1].favourite.tint, Color::Red);
        assert_eq!(props.cards[0].favourite.icon, Icon::FavouriteBorder);
    });
}

#[test]
fn given_a_selected_card_should_render_green_remove_button_and_border() {
    let mut test = build_screen_test().build();

    test.apply(ScreenEvent::ToggleSelected(0));

    test.renders.with_latest(|props| {
        let card = &props.cards[0];
        assert_eq!(card.actions.primary.label, REMOVE_MEAL_LABEL);
        assert_eq!(card.actions.primary.background, Color::Green);
        assert_eq!(card.border, Some(Color::Green));
        assert_eq!(props.cards[1].actions.primary.label, ADD_MEAL_LABEL);
        assert_eq!(props.cards[1].actions.primary.background, Color::Red);
    });
}

#[test]
fn given_any_card_should_carry_the_fixed_copy_and_info_row() {
    let test = build_screen_test().build();

    test.renders.with_latest(|props| {
        for card in &props.cards {
            assert_eq!(card.title, CARD_TITLE);
            assert_eq!(card.info.prep_time, PREP_TIME);
            assert_eq!(card.info.tags, TAGS);
            assert_eq!(card.info.prep_type.background, Color::Green);
            assert_eq!(card.actions.secondary.icon, Some(Icon::ThumbUp));
        }
    });
}

#[test]
fn given_a_plain_terminal_when_screen_drawn_should_print_every_card_without_escapes() {
    let mut renderer = TerminalRenderer::new(Vec::new(), Theme::default()).plain(true);

    renderer.draw(&preview::screen(&Theme::default())).unwrap();
    let out = String::from_utf8(renderer.into_inner()).unwrap();

    assert!(out.starts_with("── Recipes (6)"));
    assert_eq!(out.matches("Vegemite toast").count(), 6);
    assert_eq!(out.matches("Add meal").count(), 6);
    assert!(!out.contains('\u{1b}'));
}

#[test]
fn given_the_info_preview_should_draw_prep_time_and_tags_on_one_line() {
    let mut renderer = TerminalRenderer::new(Vec::new(), Theme::default()).plain(true);

    renderer.draw_info_row(&preview::info_row()).unwrap();
    let out = String::from_utf8(renderer.into_inner()).unwrap();

    assert_eq!(out.lines().count(), 1);
    assert!(out.contains("40 min"));
    assert!(out.contains("Quick prep"));
    assert!(out.contains("Low carb"));
}

#[test]
fn given_the_prep_previews_should_draw_each_piece_on_its_own_line() {
    let mut renderer = TerminalRenderer::new(Vec::new(), Theme::default()).plain(true);

    renderer.draw_prep_time(preview::prep_time()).unwrap();
    renderer.draw_prep_type(&preview::prep_type()).unwrap();
    let out = String::from_utf8(renderer.into_inner()).unwrap();

    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("40 min"));
    assert_eq!(lines[1], "( Quick prep )");
}

#[test]
fn given_a_themed_screen_should_carry_the_theme_background_to_the_props() {
    let theme = Theme {
        background: Color::Black,
        ..Theme::default()
    };
    let renderer = TestRenderer::<ScreenProps>::new();
    let _driver = TestMvuRuntime::new(
        RecipeStore::demo(),
        RecipeScreen::new().with_theme(theme),
        renderer.boxed(),
    )
    .run();

    renderer.with_latest(|props| assert_eq!(props.background, Color::Black));
    assert_eq!(preview::screen(&theme).background, Color::Black);
}
