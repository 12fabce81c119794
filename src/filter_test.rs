use pretty_assertions::assert_eq;

use super::*;

use super::CardTransition::{Hide, Show};

// =============================================================
// Filter
// =============================================================

#[test]
fn parse_all_sentinel_and_blank() {
    assert_eq!(Filter::parse(Some("all")), Filter::All);
    assert_eq!(Filter::parse(Some("")), Filter::All);
    assert_eq!(Filter::parse(None), Filter::All);
}

#[test]
fn parse_category() {
    assert_eq!(Filter::parse(Some("web")), Filter::Category("web".to_owned()));
    assert_eq!(Filter::parse(Some(" web ")), Filter::Category("web".to_owned()));
}

#[test]
fn all_matches_cards_without_category() {
    assert!(Filter::All.matches(None));
    assert!(Filter::All.matches(Some("mobile")));
}

#[test]
fn category_matches_exactly() {
    let filter = Filter::Category("web".to_owned());
    assert!(filter.matches(Some("web")));
    assert!(!filter.matches(Some("Web")));
    assert!(!filter.matches(Some("webapp")));
    assert!(!filter.matches(None));
}

// =============================================================
// FilterState
// =============================================================

#[test]
fn category_filter_shows_only_matching_cards() {
    let mut state = FilterState::default();
    let cards = [Some("web"), Some("mobile"), Some("web"), None];
    let plan = state.apply(&Filter::parse(Some("web")), cards);
    assert_eq!(plan.transitions, vec![Show, Hide, Show, Hide]);
    assert_eq!(plan.visible_count(), 2);
}

#[test]
fn all_filter_shows_every_card() {
    let mut state = FilterState::default();
    let cards = [Some("web"), Some("mobile"), None];
    let plan = state.apply(&Filter::parse(Some("all")), cards);
    assert_eq!(plan.transitions, vec![Show, Show, Show]);
}

#[test]
fn unknown_category_hides_everything() {
    let mut state = FilterState::default();
    let plan = state.apply(&Filter::parse(Some("games")), [Some("web"), Some("mobile")]);
    assert_eq!(plan.visible_count(), 0);
}

#[test]
fn empty_card_list_yields_empty_plan() {
    let mut state = FilterState::default();
    let plan = state.apply(&Filter::All, std::iter::empty());
    assert!(plan.transitions.is_empty());
}

#[test]
fn newer_plan_supersedes_older_one() {
    let mut state = FilterState::default();
    let first = state.apply(&Filter::All, [Some("web")]);
    assert!(state.is_current(first.generation));

    let second = state.apply(&Filter::parse(Some("mobile")), [Some("web")]);
    assert!(!state.is_current(first.generation));
    assert!(state.is_current(second.generation));
    assert!(second.generation > first.generation);
}

// =============================================================
// CardTransition
// =============================================================

#[test]
fn show_displays_first_then_fades_in() {
    assert_eq!(Show.immediate(), &[("display", "block")]);
    assert_eq!(Show.delayed(), &[("opacity", "1"), ("transform", "translateY(0)")]);
}

#[test]
fn hide_fades_out_first_then_removes() {
    assert_eq!(Hide.immediate(), &[("opacity", "0"), ("transform", "translateY(20px)")]);
    assert_eq!(Hide.delayed(), &[("display", "none")]);
}

#[test]
fn delays_come_from_timings() {
    let timings = Timings::default();
    assert_eq!(Show.delay_ms(&timings), 100);
    assert_eq!(Hide.delay_ms(&timings), 300);
}
