//! `web_sys` implementations of the host capabilities, plus the small DOM
//! helpers the mount code uses to find elements and attach listeners.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, Window,
};

use super::{Element, Rect, Scheduler, Visibility};
use crate::error::EffectsError;
use crate::log;

/// A live page element
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement(pub HtmlElement);

impl DomElement {
    /// Whether this wraps the same node as `other`
    pub fn is(&self, other: &web_sys::Element) -> bool {
        AsRef::<JsValue>::as_ref(&self.0) == AsRef::<JsValue>::as_ref(other)
    }
}

impl Element for DomElement {
    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn set_style(&self, property: &str, value: &str) {
        let style = self.0.style();
        if value.is_empty() {
            let _ = style.remove_property(property);
        } else {
            let _ = style.set_property(property, value);
        }
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn bounding_rect(&self) -> Rect {
        let rect = self.0.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}

/// Timers and animation frames on the browser window
#[derive(Debug, Clone)]
pub struct BrowserScheduler {
    window: Window,
}

impl BrowserScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Scheduler for BrowserScheduler {
    fn request_frame(&self, task: Box<dyn FnOnce()>) -> bool {
        let callback = Closure::once_into_js(move |_timestamp: f64| task());
        match self.window.request_animation_frame(callback.unchecked_ref()) {
            Ok(_) => true,
            Err(err) => {
                log::warn(&format!("requestAnimationFrame failed: {:?}", err));
                false
            }
        }
    }

    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

pub fn window() -> Result<Window, EffectsError> {
    web_sys::window().ok_or(EffectsError::WindowNotAvailable)
}

pub fn document(window: &Window) -> Result<Document, EffectsError> {
    window.document().ok_or(EffectsError::DocumentNotAvailable)
}

/// First element matching `selector`; invalid selectors match nothing
pub fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    document
        .query_selector_all(selector)
        .map(|list| collect_nodes(&list))
        .unwrap_or_default()
}

/// Descendants of `root` matching `selector`
pub fn query_all_within(root: &HtmlElement, selector: &str) -> Vec<HtmlElement> {
    root.query_selector_all(selector)
        .map(|list| collect_nodes(&list))
        .unwrap_or_default()
}

fn collect_nodes(list: &web_sys::NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// New element of `tag` carrying `class`
pub fn create_element(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, EffectsError> {
    let element = document
        .create_element(tag)
        .map_err(EffectsError::dom)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| EffectsError::Dom(format!("<{}> is not an HtmlElement", tag)))?;
    element.class_list().add_1(class).map_err(EffectsError::dom)?;
    Ok(element)
}

/// Attach `handler` for the page's lifetime
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), EffectsError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(EffectsError::dom)?;
    closure.forget();
    Ok(())
}

/// Like [`listen`], for pointer events that need client coordinates
pub fn listen_mouse<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), EffectsError>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(EffectsError::dom)?;
    closure.forget();
    Ok(())
}

/// Observe `targets` at `threshold`.
///
/// `on_entry` receives each report; returning `true` stops observing that
/// element.
pub fn observe_visibility<F>(
    threshold: f64,
    targets: &[HtmlElement],
    mut on_entry: F,
) -> Result<IntersectionObserver, EffectsError>
where
    F: FnMut(&web_sys::Element, Visibility) -> bool + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let visibility = Visibility::new(entry.is_intersecting(), entry.intersection_ratio());
            if on_entry(&target, visibility) {
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(EffectsError::dom)?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Ok(observer)
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_height(document: &Document) -> f64 {
    document
        .document_element()
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0)
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_dom_element_classes_and_styles() -> Result<(), EffectsError> {
        let document = document(&window()?)?;
        let el = DomElement(create_element(&document, "div", "sample")?);

        assert!(el.has_class("sample"));
        el.set_class("open", true);
        assert!(el.has_class("open"));
        el.set_class("open", false);
        assert!(!el.has_class("open"));

        el.set_style("left", "12px");
        assert_eq!(el.0.style().get_property_value("left").ok().as_deref(), Some("12px"));
        el.set_style("left", "");
        assert_eq!(el.0.style().get_property_value("left").ok().as_deref(), Some(""));
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_dom_element_text() -> Result<(), EffectsError> {
        let document = document(&window()?)?;
        let el = DomElement(create_element(&document, "em", "headline")?);
        el.set_text("typed");
        assert_eq!(el.text(), "typed");
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_query_missing_selector() -> Result<(), EffectsError> {
        let document = document(&window()?)?;
        assert!(query(&document, ".definitely-not-on-the-page").is_none());
        assert!(query_all(&document, "[[invalid").is_empty());
        Ok(())
    }
}
