//! Mobile navigation menu toggle.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Open/closed state of the collapsible menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu; returns whether it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::Cell;
    use std::rc::Rc;

    use web_sys::{Document, Element};

    use super::NavMenu;
    use crate::config::NavConfig;
    use crate::dom;
    use crate::error::DomError;

    /// Bind the menu toggle and close-on-link-click behaviour.
    pub fn mount(document: &Document, config: &NavConfig) -> Result<(), DomError> {
        let toggle = dom::by_id(document, &config.toggle_id)?;
        let menu = dom::query(document, &config.menu_selector)?;
        let state = Rc::new(Cell::new(NavMenu::default()));

        {
            let state = Rc::clone(&state);
            let (toggle_el, menu, class) = (toggle.clone(), menu.clone(), config.active_class.clone());
            dom::listen(&toggle, "click", move |_| {
                let mut nav = state.get();
                let open = nav.toggle();
                state.set(nav);
                render(&toggle_el, &menu, &class, open);
            })?;
        }

        for link in dom::query_all(document, &config.link_selector) {
            let state = Rc::clone(&state);
            let (toggle, menu, class) = (toggle.clone(), menu.clone(), config.active_class.clone());
            dom::listen(&link, "click", move |_| {
                let mut nav = state.get();
                nav.close();
                state.set(nav);
                render(&toggle, &menu, &class, false);
            })?;
        }
        Ok(())
    }

    fn render(toggle: &Element, menu: &Element, class: &str, open: bool) {
        dom::set_class(menu, class, open);
        dom::set_class(toggle, class, open);
    }
}

#[cfg(feature = "hydrate")]
pub use browser::mount;
