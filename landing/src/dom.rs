//! Browser adapters for the scroll bookkeeping in `portfolio::scroll`.
//!
//! Everything that touches `web_sys` lives here. Handles that register
//! callbacks with the browser ([`ScrollListener`], [`VisibilityWatch`])
//! release them in `Drop`.

use portfolio::{ScrollBehavior, SectionBounds, SectionId, SectionLayout, Viewport};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::controller::ScrollSnapshot;

/// Browser API failures. None of these are shown to visitors.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global `window`")]
    NoWindow,
    #[error("window has no `document`")]
    NoDocument,
    #[error("{context}: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

impl DomError {
    fn js(context: &'static str, value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{value:?}"));
        DomError::Js { context, message }
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Current scroll offset and the sizes needed for scroll progress.
///
/// Both sizes come from the root element: `clientHeight` leaves out a
/// horizontal scrollbar, so progress is exactly 1 at the bottom.
pub fn scroll_snapshot(window: &Window) -> Result<ScrollSnapshot, DomError> {
    let scroll_y = window
        .scroll_y()
        .map_err(|e| DomError::js("read scrollY", e))?;
    let root = window
        .document()
        .ok_or(DomError::NoDocument)?
        .document_element()
        .ok_or(DomError::NoDocument)?;

    Ok(ScrollSnapshot {
        scroll_y,
        document_height: f64::from(root.scroll_height()),
        viewport_height: f64::from(root.client_height()),
    })
}

/// Section bounds read from the rendered document.
pub struct DomLayout {
    document: Document,
}

impl DomLayout {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl SectionLayout for DomLayout {
    fn bounds(&self, id: SectionId) -> Option<SectionBounds> {
        let element = self
            .document
            .get_element_by_id(id.as_str())?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(SectionBounds::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }
}

/// The browser window as a scroll target.
pub struct DomViewport {
    document: Document,
}

impl DomViewport {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Viewport for DomViewport {
    type Element = Element;

    fn find(&self, id: SectionId) -> Option<Element> {
        self.document.get_element_by_id(id.as_str())
    }

    fn scroll_into_view(&self, element: &Element, behavior: ScrollBehavior) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
            ScrollBehavior::Auto => web_sys::ScrollBehavior::Auto,
        });
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// A passive `scroll` listener on the window, removed on drop.
pub struct ScrollListener {
    target: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach(window: &Window, handler: impl FnMut() + 'static) -> Result<Self, DomError> {
        let callback = Closure::<dyn FnMut()>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| DomError::js("add scroll listener", e))?;

        tracing::debug!("scroll listener attached");
        Ok(Self {
            target: window.clone(),
            callback,
        })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            tracing::warn!("{}", DomError::js("remove scroll listener", e));
        } else {
            tracing::debug!("scroll listener detached");
        }
    }
}

/// Reports when an element enters or leaves the viewport.
/// The observer is disconnected on drop.
pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

/// Observe `element`. With `once`, `on_change(true)` fires the first time it
/// intersects and observation stops; otherwise every transition is reported.
pub fn watch_visibility(
    element: &Element,
    once: bool,
    on_change: impl Fn(bool) + 'static,
) -> Result<VisibilityWatch, DomError> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let seen = entry.is_intersecting();
                if once {
                    if seen {
                        on_change(true);
                        observer.unobserve(&entry.target());
                    }
                } else {
                    on_change(seen);
                }
            }
        },
    );
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|e| DomError::js("create IntersectionObserver", e))?;
    observer.observe(element);

    Ok(VisibilityWatch {
        observer,
        _callback: callback,
    })
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
