//! Scroll-triggered reveal for section content.
//!
//! Watches an element with an `IntersectionObserver` and fires a callback
//! the first time it scrolls into view, then disconnects. Requires a
//! browser environment; on the server the callback fires immediately so
//! SSR output is never hidden.

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Invoke `on_visible` once when `el` first intersects the viewport.
#[cfg(feature = "hydrate")]
pub fn observe_once(el: &web_sys::Element, on_visible: impl FnOnce() + 'static) {
    use std::cell::RefCell;
    use std::rc::Rc;

    let fired = Rc::new(RefCell::new(Some(on_visible)));
    let observer: Rc<RefCell<Option<web_sys::IntersectionObserver>>> =
        Rc::new(RefCell::new(None));

    let cb = {
        let fired = Rc::clone(&fired);
        let observer = Rc::clone(&observer);
        Closure::wrap(Box::new(move |entries: js_sys::Array| {
            let intersecting = entries.iter().any(|entry| {
                entry
                    .dyn_into::<web_sys::IntersectionObserverEntry>()
                    .map(|e| e.is_intersecting())
                    .unwrap_or(false)
            });
            if intersecting {
                if let Some(f) = fired.borrow_mut().take() {
                    f();
                }
                if let Some(obs) = observer.borrow_mut().take() {
                    obs.disconnect();
                }
            }
        }) as Box<dyn FnMut(js_sys::Array)>)
    };

    match web_sys::IntersectionObserver::new(cb.as_ref().unchecked_ref()) {
        Ok(obs) => {
            obs.observe(el);
            *observer.borrow_mut() = Some(obs);
            // The closure must outlive the observation.
            cb.forget();
        }
        Err(_) => {
            // Observer unavailable (very old browser); reveal right away.
            drop(cb);
            if let Some(f) = fired.borrow_mut().take() {
                f();
            }
        }
    }
}
