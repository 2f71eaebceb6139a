use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fires once, on the first observation that reports the element as visible.
#[derive(Debug, Default)]
pub struct RevealLatch {
    fired: bool,
}

impl RevealLatch {
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.fired || !intersecting {
            return false;
        }
        self.fired = true;
        true
    }
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

#[derive(Debug, Error)]
pub enum RevealError {
    #[error("no element to observe")]
    MissingElement,
    #[error("IntersectionObserver unavailable: {0}")]
    Observer(String),
}

/// Shows the content straight away when the observer could not be attached.
fn attached_or_shown<T>(attached: Result<T, RevealError>, show: impl FnOnce()) -> Option<T> {
    match attached {
        Ok(observed) => Some(observed),
        Err(e) => {
            warn!("Reveal skipped, showing content: {}", e);
            show();
            None
        }
    }
}

fn observe_once(
    element: &Element,
    threshold: f64,
    on_visible: impl Fn() + 'static,
) -> Result<(IntersectionObserver, EntriesCallback), RevealError> {
    let latch = Rc::new(RefCell::new(RevealLatch::default()));
    let callback: EntriesCallback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|e| e.is_intersecting())
                    .unwrap_or(false)
            });
            if latch.borrow_mut().observe(intersecting) {
                observer.disconnect();
                on_visible();
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| RevealError::Observer(format!("{:?}", e)))?;
    observer.observe(element);
    Ok((observer, callback))
}

/// Play-once entrance trigger. Returns true from the first render after `threshold`
/// of the referenced element has entered the viewport.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let attached = {
                    let visible = visible.clone();
                    node.cast::<Element>()
                        .ok_or(RevealError::MissingElement)
                        .and_then(|element| {
                            observe_once(&element, threshold, move || visible.set(true))
                        })
                };
                let observed = attached_or_shown(attached, move || visible.set(true));
                move || {
                    if let Some((observer, _callback)) = observed {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
    }

    #[test]
    fn failed_attach_shows_content() {
        for error in [
            RevealError::MissingElement,
            RevealError::Observer("ReferenceError".to_string()),
        ] {
            let mut shown = false;
            let observed = attached_or_shown::<()>(Err(error), || shown = true);
            assert!(observed.is_none());
            assert!(shown, "content must not stay hidden without an observer");
        }
    }

    #[test]
    fn attached_observer_waits_for_intersection() {
        let mut shown = false;
        assert_eq!(attached_or_shown(Ok(7), || shown = true), Some(7));
        assert!(!shown);
    }
}
