use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    window, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions,
};
use yew::prelude::*;

use crate::config::HEADER_OFFSET_PX;

/// Elements that animate in the first time they scroll into view.
pub const REVEAL_SELECTOR: &str = ".feature-card, .section-header";
const REVEAL_CLASS: &str = "animate-in";

/// `href` as a selector when it points at an element on this page.
pub fn anchor_selector(href: &str) -> Option<&str> {
    (href.len() > 1 && href.starts_with('#')).then_some(href)
}

/// Page offset that puts an element at `element_top` (viewport relative) just below the nav.
pub fn anchor_scroll_top(element_top: f64, page_offset: f64) -> f64 {
    element_top + page_offset - HEADER_OFFSET_PX
}

/// Smoothly scrolls to the element `href` names. Returns false if there is none.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(selector) = anchor_selector(href) else {
        return false;
    };
    let Some(window) = window() else {
        return false;
    };
    let target = window
        .document()
        .and_then(|d| d.query_selector(selector).ok().flatten());
    let Some(target) = target else {
        return false;
    };

    let top = anchor_scroll_top(
        target.get_bounding_client_rect().top(),
        window.scroll_y().unwrap_or(0.0),
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// Click handler for an in-page link.
pub fn anchor_click(href: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor(href);
    })
}

/// Live reveal-on-scroll observer. Dropping it stops observing.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn observe_reveal_targets() -> Option<RevealObserver> {
    let document = window()?.document()?;

    let callback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let target = entry.target();
                let _ = target.class_list().add_1(REVEAL_CLASS);
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

    if let Ok(targets) = document.query_selector_all(REVEAL_SELECTOR) {
        for i in 0..targets.length() {
            if let Some(element) = targets.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
                observer.observe(&element);
            }
        }
    }

    Some(RevealObserver {
        observer,
        _callback: callback,
    })
}
