//! Browser tests for the DOM adapters. Run with `wasm-pack test --headless --firefox landing`.
#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use portfolio::config::MotionConfig;
use portfolio::scroll::scroll_progress;
use portfolio::{Navigation, Navigator, Reveal, ScrollBehavior, SectionId, SectionLayout, SiteConfig};
use portfolio_landing::components::Motion;
use portfolio_landing::controller::PageController;
use portfolio_landing::dom::{self, DomLayout, DomViewport, ScrollListener};
use portfolio_landing::track_scroll;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

/// Stand-ins for the six sections, 800px each, pinned to the document top
/// so offsets and scroll positions share one coordinate space.
fn mount_sections(skip: Option<SectionId>) -> HtmlElement {
    let document = dom::document().expect("document");
    let root: HtmlElement = document
        .create_element("div")
        .expect("create root")
        .unchecked_into();
    for (name, value) in [("position", "absolute"), ("top", "0"), ("left", "0"), ("width", "100%")] {
        root.style().set_property(name, value).expect("style root");
    }

    for id in SectionId::ALL.into_iter().filter(|id| Some(*id) != skip) {
        let section: HtmlElement = document
            .create_element("section")
            .expect("create section")
            .unchecked_into();
        section.set_id(id.as_str());
        section.style().set_property("height", "800px").expect("height");
        section.style().set_property("margin", "0").expect("margin");
        root.append_child(&section).expect("append section");
    }

    document
        .body()
        .expect("body")
        .append_child(&root)
        .expect("append root");
    root
}

/// A 40px box absolutely placed at `top` (document coordinates).
fn mount_box(top: &str) -> HtmlElement {
    let document = dom::document().expect("document");
    let el: HtmlElement = document
        .create_element("div")
        .expect("create box")
        .unchecked_into();
    for (name, value) in [("position", "absolute"), ("left", "0"), ("width", "40px"), ("height", "40px"), ("top", top)] {
        el.style().set_property(name, value).expect("style box");
    }
    document
        .body()
        .expect("body")
        .append_child(&el)
        .expect("append box");
    el
}

fn scroll_to_top() {
    dom::window().expect("window").scroll_to_with_x_and_y(0.0, 0.0);
}

async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        dom::window()
            .expect("window")
            .request_animation_frame(&resolve)
            .expect("request frame");
    });
    JsFuture::from(promise).await.expect("frame");
}

/// Long enough for IntersectionObserver to deliver its records.
async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        dom::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 150)
            .expect("set timeout");
    });
    JsFuture::from(promise).await.expect("timeout");
}

#[wasm_bindgen_test]
fn layout_reads_offsets_and_heights() {
    let root = mount_sections(None);
    let layout = DomLayout::new(dom::document().expect("document"));

    let hero = layout.bounds(SectionId::Hero).expect("hero rendered");
    let skills = layout.bounds(SectionId::Skills).expect("skills rendered");
    assert_eq!(hero.height, 800.0);
    assert_eq!(skills.top - hero.top, 1600.0);

    root.remove();
}

#[wasm_bindgen_test]
fn layout_skips_missing_sections() {
    let root = mount_sections(Some(SectionId::Projects));
    let layout = DomLayout::new(dom::document().expect("document"));

    assert!(layout.bounds(SectionId::Projects).is_none());
    assert!(layout.bounds(SectionId::Contact).is_some());

    root.remove();
}

#[wasm_bindgen_test]
fn navigator_scrolls_only_to_present_targets() {
    scroll_to_top();
    let window = dom::window().expect("window");
    let root = mount_sections(Some(SectionId::About));
    let viewport = DomViewport::new(dom::document().expect("document"));
    let navigator = Navigator::new(ScrollBehavior::Instant);

    assert_eq!(
        navigator.navigate(SectionId::About, &viewport),
        Navigation::Missing(SectionId::About)
    );
    assert_eq!(window.scroll_y().expect("scrollY"), 0.0);

    // Without About, Skills sits one section lower at 800px
    assert_eq!(
        navigator.navigate(SectionId::Skills, &viewport),
        Navigation::Scrolled(SectionId::Skills)
    );
    let skills = layout_top(SectionId::Skills);
    let scroll_y = window.scroll_y().expect("scrollY");
    assert!((scroll_y - skills).abs() < 1.0, "scrollY {scroll_y}, Skills at {skills}");

    root.remove();
    scroll_to_top();
}

fn layout_top(id: SectionId) -> f64 {
    DomLayout::new(dom::document().expect("document"))
        .bounds(id)
        .expect("section rendered")
        .top
}

#[wasm_bindgen_test]
fn progress_reaches_one_at_the_bottom() {
    let window = dom::window().expect("window");
    let root = mount_sections(None);
    window.scroll_to_with_x_and_y(0.0, 1.0e6);

    let snapshot = dom::scroll_snapshot(&window).expect("snapshot");
    let client_height = dom::document()
        .expect("document")
        .document_element()
        .expect("root element")
        .client_height();
    assert_eq!(snapshot.viewport_height, f64::from(client_height));

    let progress = scroll_progress(
        snapshot.scroll_y,
        snapshot.document_height,
        snapshot.viewport_height,
    );
    assert!((progress - 1.0).abs() < 1e-9, "progress {progress}");

    root.remove();
    scroll_to_top();
}

#[wasm_bindgen_test]
fn scroll_listener_detaches_on_drop() {
    let window = dom::window().expect("window");
    let calls = Rc::new(Cell::new(0u32));

    let counter = calls.clone();
    let listener =
        ScrollListener::attach(&window, move || counter.set(counter.get() + 1)).expect("attach");

    let event = web_sys::Event::new("scroll").expect("event");
    window.dispatch_event(&event).expect("dispatch");
    assert_eq!(calls.get(), 1);

    drop(listener);
    window.dispatch_event(&event).expect("dispatch");
    assert_eq!(calls.get(), 1);
}

#[wasm_bindgen_test]
async fn visibility_once_fires_a_single_time() {
    scroll_to_top();
    let target = mount_box("0px");
    let seen = Rc::new(RefCell::new(Vec::new()));

    let log = seen.clone();
    let watch = dom::watch_visibility(&target, true, move |v| log.borrow_mut().push(v))
        .expect("observe");
    settle().await;
    assert_eq!(*seen.borrow(), vec![true]);

    target.style().set_property("top", "-5000px").expect("move out");
    settle().await;
    target.style().set_property("top", "0px").expect("move in");
    settle().await;
    assert_eq!(*seen.borrow(), vec![true]);

    drop(watch);
    target.remove();
}

#[wasm_bindgen_test]
async fn visibility_watch_disconnects_on_drop() {
    scroll_to_top();
    let target = mount_box("0px");
    let seen = Rc::new(RefCell::new(Vec::new()));

    let log = seen.clone();
    let watch = dom::watch_visibility(&target, false, move |v| log.borrow_mut().push(v))
        .expect("observe");
    settle().await;
    target.style().set_property("top", "-5000px").expect("move out");
    settle().await;
    assert_eq!(*seen.borrow(), vec![true, false]);

    drop(watch);
    target.style().set_property("top", "0px").expect("move in");
    settle().await;
    assert_eq!(*seen.borrow(), vec![true, false]);

    target.remove();
}

#[wasm_bindgen_test]
async fn tracking_starts_at_mount_and_stops_at_unmount() {
    let window = dom::window().expect("window");
    let root = mount_sections(None);
    window.scroll_to_with_x_and_y(0.0, 2350.0);

    let controller = PageController::new(&SiteConfig::default());
    let handle = leptos::mount::mount_to(root.clone(), move || {
        track_scroll(controller);
        view! { <span></span> }
    });
    leptos::task::tick().await;
    leptos::task::tick().await;
    // No scroll event yet: this is the pass made at mount
    assert_eq!(controller.active().get_untracked(), SectionId::Experience);

    let event = web_sys::Event::new("scroll").expect("event");
    window.scroll_to_with_x_and_y(0.0, 900.0);
    window.dispatch_event(&event).expect("dispatch");
    assert_eq!(controller.active().get_untracked(), SectionId::About);

    drop(handle);
    window.scroll_to_with_x_and_y(0.0, 0.0);
    window.dispatch_event(&event).expect("dispatch");
    next_frame().await;
    assert_eq!(controller.active().get_untracked(), SectionId::About);

    root.remove();
}

#[wasm_bindgen_test]
async fn mount_reveal_stays_hidden_for_one_frame() {
    let document = dom::document().expect("document");
    let host: HtmlElement = document
        .create_element("div")
        .expect("create host")
        .unchecked_into();
    document
        .body()
        .expect("body")
        .append_child(&host)
        .expect("append host");

    let reveal = Reveal::fade_up(&MotionConfig::default()).on_mount();
    let handle = leptos::mount::mount_to(host.clone(), move || {
        view! {
            <Motion reveal=reveal>
                <p>"hello"</p>
            </Motion>
        }
    });
    let style = || {
        host.first_element_child()
            .and_then(|el| el.get_attribute("style"))
            .unwrap_or_default()
    };

    leptos::task::tick().await;
    next_frame().await;
    assert!(style().starts_with("opacity: 0;"), "{}", style());

    next_frame().await;
    next_frame().await;
    leptos::task::tick().await;
    assert!(style().starts_with("opacity: 1;"), "{}", style());

    drop(handle);
    host.remove();
}
