//! Declarative reveal transitions.
//!
//! A [`Reveal`] describes where an element starts (offset, scale, opacity 0)
//! and how long it takes to settle into place. The UI layer decides *when*
//! to flip it visible based on [`Trigger`], then renders [`Reveal::style`].

use crate::config::MotionConfig;

/// When a reveal plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// As soon as the element is mounted.
    Mount,
    /// When the element enters the viewport. `once` keeps it visible after
    /// it scrolls out again.
    InView { once: bool },
}

/// Start state and timing of an entrance transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub trigger: Trigger,
}

impl Reveal {
    fn base(motion: &MotionConfig) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            duration_s: motion.duration_s,
            delay_s: 0.0,
            trigger: Trigger::InView { once: true },
        }
    }

    /// Rise from below. Section headers and cards.
    pub fn fade_up(motion: &MotionConfig) -> Self {
        Self {
            y: motion.distance_px,
            ..Self::base(motion)
        }
    }

    /// Slide in from the left.
    pub fn from_left(motion: &MotionConfig) -> Self {
        Self {
            x: -motion.distance_px,
            ..Self::base(motion)
        }
    }

    /// Slide in from the right.
    pub fn from_right(motion: &MotionConfig) -> Self {
        Self {
            x: motion.distance_px,
            ..Self::base(motion)
        }
    }

    /// Grow from 80% size, slightly after the rest of the hero.
    pub fn zoom(motion: &MotionConfig) -> Self {
        Self {
            scale: 0.8,
            delay_s: 0.2,
            ..Self::base(motion)
        }
    }

    /// Short slide used by the navigation brand, library default timing.
    pub fn slide_in(motion: &MotionConfig) -> Self {
        Self {
            x: -20.0,
            duration_s: 0.3,
            trigger: Trigger::Mount,
            ..Self::base(motion)
        }
    }

    /// Even rows from the left, odd rows from the right.
    pub fn alternating(index: usize, motion: &MotionConfig) -> Self {
        let side = if index % 2 == 0 {
            Self::from_left(motion)
        } else {
            Self::from_right(motion)
        };
        side.staggered(index, motion)
    }

    /// Delay by `index` steps of the configured stagger.
    pub fn staggered(self, index: usize, motion: &MotionConfig) -> Self {
        Self {
            delay_s: index as f64 * motion.stagger_s,
            ..self
        }
    }

    pub fn on_mount(self) -> Self {
        Self {
            trigger: Trigger::Mount,
            ..self
        }
    }

    /// Inline CSS for the hidden or settled state.
    pub fn style(&self, visible: bool) -> String {
        let transition = format!(
            "transition: opacity {d}s ease-out {delay}s, transform {d}s ease-out {delay}s",
            d = fmt_num(self.duration_s),
            delay = fmt_num(self.delay_s),
        );
        if visible {
            format!("opacity: 1; transform: none; {transition}")
        } else {
            format!(
                "opacity: 0; transform: translate({x}px, {y}px) scale({s}); {transition}",
                x = fmt_num(self.x),
                y = fmt_num(self.y),
                s = fmt_num(self.scale),
            )
        }
    }
}

/// Shortest decimal form, so `0.1 * 3` renders as `0.3` not `0.30000000000000004`.
fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn motion() -> MotionConfig {
        MotionConfig::default()
    }

    #[test]
    fn hidden_state_carries_offset() {
        let reveal = Reveal::fade_up(&motion());
        assert_eq!(
            reveal.style(false),
            "opacity: 0; transform: translate(0px, 50px) scale(1); \
             transition: opacity 0.8s ease-out 0s, transform 0.8s ease-out 0s"
        );
    }

    #[test]
    fn visible_state_is_identity() {
        let style = Reveal::zoom(&motion()).style(true);
        assert!(style.starts_with("opacity: 1; transform: none;"));
        assert!(style.contains("ease-out 0.2s"));
    }

    #[test]
    fn stagger_multiplies_index() {
        let m = motion();
        let delays: Vec<f64> = (0..4)
            .map(|i| Reveal::fade_up(&m).staggered(i, &m).delay_s)
            .collect();
        assert_eq!(delays, vec![0.0, 0.1, 0.2, 0.30000000000000004]);
        assert!(Reveal::fade_up(&m).staggered(3, &m).style(false).contains("ease-out 0.3s"));
    }

    #[test]
    fn alternating_switches_sides() {
        let m = motion();
        assert_eq!(Reveal::alternating(0, &m).x, -50.0);
        assert_eq!(Reveal::alternating(1, &m).x, 50.0);
        assert_eq!(Reveal::alternating(2, &m).delay_s, 0.2);
    }

    #[test]
    fn triggers() {
        let m = motion();
        assert_eq!(Reveal::fade_up(&m).trigger, Trigger::InView { once: true });
        assert_eq!(Reveal::fade_up(&m).on_mount().trigger, Trigger::Mount);
        assert_eq!(Reveal::slide_in(&m).trigger, Trigger::Mount);
    }

    #[test]
    fn slide_in_is_short_and_fixed() {
        let far = MotionConfig {
            distance_px: 200.0,
            duration_s: 2.0,
            ..MotionConfig::default()
        };
        let reveal = Reveal::slide_in(&far);
        assert_eq!((reveal.x, reveal.y), (-20.0, 0.0));
        assert_eq!(reveal.duration_s, 0.3);
    }

    #[test]
    fn respects_configured_distance() {
        let m = MotionConfig {
            distance_px: 20.0,
            ..MotionConfig::default()
        };
        assert_eq!(Reveal::from_left(&m).x, -20.0);
        assert_eq!(Reveal::fade_up(&m).y, 20.0);
    }
}
