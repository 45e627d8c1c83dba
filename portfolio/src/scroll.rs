//! Scroll bookkeeping: which section is in view, and how to get to one.
//!
//! Nothing in here touches the browser. The page layout is reached through
//! [`SectionLayout`] and the viewport through [`Viewport`], so the landing
//! app plugs in DOM adapters while tests plug in plain closures and fakes.

use serde::Deserialize;

use crate::section::SectionId;

/// Default distance, in pixels, added to the scroll offset before testing
/// section ranges, so a section counts as active slightly before its top
/// reaches the viewport edge.
pub const DEFAULT_LOOKAHEAD_PX: f64 = 100.0;

/// Vertical extent of a rendered section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open range check: `top <= position < top + height`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Read-only view of where sections sit in the document.
pub trait SectionLayout {
    /// Bounds of the section element, `None` when it is not rendered.
    fn bounds(&self, id: SectionId) -> Option<SectionBounds>;
}

impl<F> SectionLayout for F
where
    F: Fn(SectionId) -> Option<SectionBounds>,
{
    fn bounds(&self, id: SectionId) -> Option<SectionBounds> {
        self(id)
    }
}

/// Works out the active section from a scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTracker {
    lookahead_px: f64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKAHEAD_PX)
    }
}

impl ScrollTracker {
    pub const fn new(lookahead_px: f64) -> Self {
        Self { lookahead_px }
    }

    pub fn lookahead_px(&self) -> f64 {
        self.lookahead_px
    }

    /// First section, in document order, whose range holds
    /// `scroll_y + lookahead`. Sections missing from the layout are skipped.
    pub fn locate(&self, scroll_y: f64, layout: &impl SectionLayout) -> Option<SectionId> {
        let position = scroll_y + self.lookahead_px;
        SectionId::ALL.into_iter().find(|&id| match layout.bounds(id) {
            Some(bounds) => bounds.contains(position),
            None => {
                tracing::trace!(section = %id, "section not rendered, skipping");
                false
            }
        })
    }

    /// Active section after a scroll event: the located section, or
    /// `current` when nothing matches (e.g. mid layout transition).
    pub fn next_active(
        &self,
        current: SectionId,
        scroll_y: f64,
        layout: &impl SectionLayout,
    ) -> SectionId {
        self.locate(scroll_y, layout).unwrap_or(current)
    }
}

/// How a navigation scroll should animate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
    Auto,
}

/// The scrollable viewport and a way to find section elements in it.
pub trait Viewport {
    type Element;

    /// Resolve a section to its element, `None` when absent.
    fn find(&self, id: SectionId) -> Option<Self::Element>;

    /// Ask the viewport to bring `element`'s top to the viewport top.
    fn scroll_into_view(&self, element: &Self::Element, behavior: ScrollBehavior);
}

/// Result of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// A scroll request was issued.
    Scrolled(SectionId),
    /// The section had no element; nothing happened.
    Missing(SectionId),
}

/// Scrolls the viewport to a section on request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Navigator {
    behavior: ScrollBehavior,
}

impl Navigator {
    pub const fn new(behavior: ScrollBehavior) -> Self {
        Self { behavior }
    }

    /// Issue exactly one scroll request for `id`, or none if it is absent.
    pub fn navigate<V: Viewport>(&self, id: SectionId, viewport: &V) -> Navigation {
        match viewport.find(id) {
            Some(element) => {
                viewport.scroll_into_view(&element, self.behavior);
                Navigation::Scrolled(id)
            }
            None => {
                tracing::debug!(section = %id, "navigation target not rendered");
                Navigation::Missing(id)
            }
        }
    }
}

/// Fraction of the page scrolled, in `[0, 1]`.
///
/// A document that fits in the viewport reports `0`.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Linear map of scroll progress onto a vertical offset in percent.
pub fn parallax_offset(progress: f64, max_percent: f64) -> f64 {
    progress.clamp(0.0, 1.0) * max_percent
}
