//! Project card filtering by category.
//!
//! DESIGN
//! ======
//! Each click produces a `FilterPlan`: one `CardTransition` per card, in
//! document order. A transition has an immediate style step and a delayed one
//! so CSS transitions can run (fade in after `display: block`, `display: none`
//! after the fade out). Plans carry a generation number; a delayed step from a
//! plan that has since been superseded is dropped, so rapid clicks cannot hide
//! a card the latest filter shows.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::config::Timings;

/// Filter value that matches every card.
pub const ALL_SENTINEL: &str = "all";

type StyleSteps = &'static [(&'static str, &'static str)];

const SHOW_NOW: StyleSteps = &[("display", "block")];
const SHOW_LATER: StyleSteps = &[("opacity", "1"), ("transform", "translateY(0)")];
const HIDE_NOW: StyleSteps = &[("opacity", "0"), ("transform", "translateY(20px)")];
const HIDE_LATER: StyleSteps = &[("display", "none")];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    /// Parse a `data-filter` value. Missing or blank means `All`.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("" | ALL_SENTINEL) => Self::All,
            Some(category) => Self::Category(category.to_owned()),
        }
    }

    #[must_use]
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => category.is_some_and(|c| c == wanted),
        }
    }
}

/// Visual change applied to one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardTransition {
    Show,
    Hide,
}

impl CardTransition {
    #[must_use]
    pub fn immediate(self) -> StyleSteps {
        match self {
            Self::Show => SHOW_NOW,
            Self::Hide => HIDE_NOW,
        }
    }

    #[must_use]
    pub fn delayed(self) -> StyleSteps {
        match self {
            Self::Show => SHOW_LATER,
            Self::Hide => HIDE_LATER,
        }
    }

    #[must_use]
    pub fn delay_ms(self, timings: &Timings) -> u32 {
        match self {
            Self::Show => timings.card_show_delay_ms,
            Self::Hide => timings.card_hide_delay_ms,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterPlan {
    pub generation: u64,
    pub transitions: Vec<CardTransition>,
}

impl FilterPlan {
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.transitions.iter().filter(|t| **t == CardTransition::Show).count()
    }
}

/// Tracks the latest plan so stale delayed steps can be recognized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    generation: u64,
}

impl FilterState {
    pub fn apply<'a, I>(&mut self, filter: &Filter, categories: I) -> FilterPlan
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        self.generation += 1;
        let transitions = categories
            .into_iter()
            .map(|category| {
                if filter.matches(category) {
                    CardTransition::Show
                } else {
                    CardTransition::Hide
                }
            })
            .collect();
        FilterPlan { generation: self.generation, transitions }
    }

    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

// =============================================================================
// BROWSER
// =============================================================================

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::Cell;
    use std::rc::Rc;

    use web_sys::{Document, Element};

    use super::{Filter, FilterState};
    use crate::config::{FilterConfig, Timings};
    use crate::dom;
    use crate::error::DomError;

    /// Bind every filter button to the project cards.
    pub fn mount(document: &Document, config: &FilterConfig, timings: Timings) -> Result<(), DomError> {
        let buttons = Rc::new(dom::query_all(document, &config.button_selector));
        if buttons.is_empty() {
            return Err(DomError::missing(config.button_selector.clone()));
        }
        let cards = Rc::new(dom::query_all(document, &config.card_selector));
        let state = Rc::new(Cell::new(FilterState::default()));

        for button in buttons.iter() {
            let (buttons, cards, state) = (Rc::clone(&buttons), Rc::clone(&cards), Rc::clone(&state));
            let (clicked, config) = (button.clone(), config.clone());
            dom::listen(button, "click", move |_| {
                for other in buttons.iter() {
                    dom::set_class(other, &config.active_class, false);
                }
                dom::set_class(&clicked, &config.active_class, true);

                let filter = Filter::parse(clicked.get_attribute(&config.filter_attribute).as_deref());
                run(&cards, &filter, &config, timings, &state);
            })?;
        }
        Ok(())
    }

    fn run(cards: &[Element], filter: &Filter, config: &FilterConfig, timings: Timings, state: &Rc<Cell<FilterState>>) {
        let categories: Vec<Option<String>> = cards
            .iter()
            .map(|card| card.get_attribute(&config.category_attribute))
            .collect();
        let mut current = state.get();
        let plan = current.apply(filter, categories.iter().map(Option::as_deref));
        state.set(current);
        log::debug!("filter {filter:?}: {} of {} cards visible", plan.visible_count(), cards.len());

        for (card, transition) in cards.iter().zip(plan.transitions) {
            apply_steps(card, transition.immediate());
            let (card, state) = (card.clone(), Rc::clone(state));
            let generation = plan.generation;
            dom::after(transition.delay_ms(&timings), move || {
                if state.get().is_current(generation) {
                    apply_steps(&card, transition.delayed());
                }
            });
        }
    }

    fn apply_steps(card: &Element, steps: &[(&str, &str)]) {
        for (property, value) in steps {
            dom::set_style(card, property, value);
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::mount;
