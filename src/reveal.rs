//! Scroll-triggered reveal and progress-bar animations.
//!
//! ARCHITECTURE
//! ============
//! Two `IntersectionObserver`s: one adds the reveal class to cards and
//! timeline items, the other replays skill progress bars from zero. Both use
//! a `OnceLedger` so each target is processed on its first intersection only,
//! and both stop observing a target once it has been handled.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Width a progress bar collapses to before animating back.
pub const COLLAPSED_WIDTH: &str = "0%";

/// Remembers which keys have already been handled.
#[derive(Clone, Debug)]
pub struct OnceLedger<K> {
    seen: Vec<K>,
}

impl<K> Default for OnceLedger<K> {
    fn default() -> Self {
        Self { seen: Vec::new() }
    }
}

impl<K: PartialEq> OnceLedger<K> {
    /// Record `key`; true only the first time it is seen.
    pub fn mark(&mut self, key: K) -> bool {
        if self.seen.contains(&key) {
            return false;
        }
        self.seen.push(key);
        true
    }

    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.seen.contains(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Decide whether an intersection should reveal `key`.
pub fn should_reveal<K: PartialEq>(ledger: &mut OnceLedger<K>, key: K, intersecting: bool) -> bool {
    intersecting && ledger.mark(key)
}

/// Two-phase width change for one progress bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressStep {
    pub collapsed: &'static str,
    pub target_width: String,
}

/// Replays each progress bar at most once.
#[derive(Clone, Debug)]
pub struct ProgressGate<K> {
    animated: OnceLedger<K>,
}

impl<K> Default for ProgressGate<K> {
    fn default() -> Self {
        Self { animated: OnceLedger::default() }
    }
}

impl<K: PartialEq> ProgressGate<K> {
    /// `current_width` is the bar's inline width, which is also where it ends up.
    pub fn on_intersection(&mut self, key: K, intersecting: bool, current_width: &str) -> Option<ProgressStep> {
        if !intersecting || !self.animated.mark(key) {
            return None;
        }
        Some(ProgressStep {
            collapsed: COLLAPSED_WIDTH,
            target_width: current_width.to_owned(),
        })
    }

    #[must_use]
    pub fn animated_count(&self) -> usize {
        self.animated.len()
    }
}

// =============================================================================
// BROWSER
// =============================================================================

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{OnceLedger, ProgressGate, should_reveal};
    use crate::config::{RevealConfig, Timings};
    use crate::dom;
    use crate::error::DomError;

    fn observer<F>(init: Option<&IntersectionObserverInit>, mut callback: F) -> Result<IntersectionObserver, DomError>
    where
        F: FnMut(IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let closure = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() {
                        callback(entry.clone(), &observer);
                    }
                }
            },
        );
        let function = closure.as_ref().unchecked_ref();
        let observer = match init {
            Some(init) => IntersectionObserver::new_with_options(function, init),
            None => IntersectionObserver::new(function),
        }
        .map_err(|e| DomError::js("IntersectionObserver", &e))?;
        closure.forget();
        Ok(observer)
    }

    /// Reveal cards and timeline items as they scroll into view.
    pub fn mount_reveal(document: &Document, config: &RevealConfig) -> Result<(), DomError> {
        let targets = dom::query_all(document, &config.target_selector);
        if targets.is_empty() {
            return Err(DomError::missing(config.target_selector.clone()));
        }

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.threshold));
        init.set_root_margin(&config.root_margin);

        let ledger = Rc::new(RefCell::new(OnceLedger::default()));
        let class = config.reveal_class.clone();
        let observer = observer(Some(&init), move |entry, observer| {
            let target = entry.target();
            if should_reveal(&mut ledger.borrow_mut(), target.clone(), entry.is_intersecting()) {
                dom::set_class(&target, &class, true);
                observer.unobserve(&target);
            }
        })?;

        for target in &targets {
            observer.observe(target);
        }
        log::debug!("observing {} reveal targets", targets.len());
        Ok(())
    }

    /// Replay progress bars from zero the first time each becomes visible.
    pub fn mount_progress(document: &Document, config: &RevealConfig, timings: Timings) -> Result<(), DomError> {
        let bars = dom::query_all(document, &config.progress_selector);
        if bars.is_empty() {
            return Err(DomError::missing(config.progress_selector.clone()));
        }

        let gate = Rc::new(RefCell::new(ProgressGate::default()));
        let observer = observer(None, move |entry, observer| {
            let target = entry.target();
            let width = dom::style_value(&target, "width");
            let Some(step) = gate
                .borrow_mut()
                .on_intersection(target.clone(), entry.is_intersecting(), &width)
            else {
                return;
            };
            observer.unobserve(&target);
            dom::set_style(&target, "width", step.collapsed);
            dom::after(timings.progress_delay_ms, move || {
                dom::set_style(&target, "width", &step.target_width);
            });
        })?;

        for bar in &bars {
            observer.observe(bar);
        }
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{mount_progress, mount_reveal};
