//! Page controller: owns the active section and the scroll progress.
//!
//! Only [`PageController::track`] writes the active section, through a
//! single setter; the view layer gets a read-only signal.

use leptos::prelude::*;
use portfolio::scroll::{parallax_offset, scroll_progress};
use portfolio::{
    Navigation, Navigator, ScrollTracker, SectionId, SectionLayout, SiteConfig, Viewport,
};

use crate::dom::{self, DomError, DomLayout, DomViewport};

/// Scroll position plus the sizes needed for progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

#[derive(Clone, Copy)]
pub struct PageController {
    active: RwSignal<SectionId>,
    progress: RwSignal<f64>,
    tracker: ScrollTracker,
    navigator: Navigator,
    parallax_max: f64,
}

impl PageController {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            active: RwSignal::new(SectionId::Hero),
            progress: RwSignal::new(0.0),
            tracker: config.tracker(),
            navigator: config.navigator(),
            parallax_max: config.parallax.max_offset_percent,
        }
    }

    /// Section currently in view.
    pub fn active(&self) -> ReadSignal<SectionId> {
        self.active.read_only()
    }

    /// Tracked check used by nav items.
    pub fn is_active(&self, id: SectionId) -> bool {
        self.active.get() == id
    }

    /// Hero backdrop offset in percent, tracked.
    pub fn parallax_percent(&self) -> f64 {
        parallax_offset(self.progress.get(), self.parallax_max)
    }

    fn set_active(&self, id: SectionId) {
        if self.active.get_untracked() != id {
            tracing::debug!(section = %id, "active section changed");
            self.active.set(id);
        }
    }

    /// Recompute state for one scroll event.
    pub fn track(&self, snapshot: ScrollSnapshot, layout: &impl SectionLayout) {
        let current = self.active.get_untracked();
        self.set_active(self.tracker.next_active(current, snapshot.scroll_y, layout));

        let progress = scroll_progress(
            snapshot.scroll_y,
            snapshot.document_height,
            snapshot.viewport_height,
        );
        if self.progress.get_untracked() != progress {
            self.progress.set(progress);
        }
    }

    /// Scroll `viewport` to `id`. Does not touch the active section; the
    /// scroll events that follow do.
    pub fn navigate(&self, id: SectionId, viewport: &impl Viewport) -> Navigation {
        self.navigator.navigate(id, viewport)
    }

    /// [`PageController::track`] against the live document.
    pub fn sync(&self) {
        let result = dom::window().and_then(|window| {
            let snapshot = dom::scroll_snapshot(&window)?;
            let document = window.document().ok_or(DomError::NoDocument)?;
            self.track(snapshot, &DomLayout::new(document));
            Ok(())
        });
        if let Err(e) = result {
            tracing::debug!("scroll sync skipped: {e}");
        }
    }

    /// [`PageController::navigate`] against the live document.
    pub fn go_to(&self, id: SectionId) {
        match dom::document() {
            Ok(document) => {
                self.navigate(id, &DomViewport::new(document));
            }
            Err(e) => tracing::debug!(section = %id, "navigation skipped: {e}"),
        }
    }
}
