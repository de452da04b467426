//! Типизированные DOM-запросы вместо `try/catch` вокруг `closest()`.

use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use super::super::model::Marker;

/// Element the event was dispatched to
pub fn target_element(ev: &Event) -> Option<Element> {
    ev.target()?.dyn_into::<Element>().ok()
}

pub fn has_marker(el: &Element, marker: Marker) -> bool {
    el.has_attribute(marker.attr())
}

/// Value of `marker` on the target or its closest marked ancestor
pub fn closest_marker(ev: &Event, marker: Marker) -> Option<String> {
    target_element(ev)?
        .closest(&marker.selector())
        .ok()
        .flatten()?
        .get_attribute(marker.attr())
}
