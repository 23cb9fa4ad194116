//! Height transition for expandable submenu panels
//!
//! The panel's content is measured, never computed: the animator only
//! interpolates a numeric height between the current value and the target
//! (0 when collapsed, the measured content height when expanded).
//! Time is passed in explicitly, in milliseconds.

use crate::shared::logging::log_submenu_transition;

/// Duration of a full collapse/expand transition
pub const SUBMENU_TRANSITION_MS: f64 = 200.0;

/// Control points of CSS `ease-in-out`
const EASE_IN_OUT: (f64, f64, f64, f64) = (0.42, 0.0, 0.58, 1.0);

#[derive(Debug, Clone, Copy, PartialEq)]
struct HeightTransition {
    from: f64,
    to: f64,
    started_at: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmenuAnimator {
    expanded: bool,
    content_height: Option<f64>,
    transition: Option<HeightTransition>,
}

impl SubmenuAnimator {
    pub fn new(expanded: bool) -> Self {
        Self {
            expanded,
            content_height: None,
            transition: None,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_measured(&self) -> bool {
        self.content_height.is_some()
    }

    /// Height the panel is heading to
    pub fn target_height(&self) -> f64 {
        if self.expanded {
            self.content_height.unwrap_or(0.0)
        } else {
            0.0
        }
    }

    /// Flip the expanded flag; returns true when a transition started
    pub fn set_expanded(&mut self, expanded: bool, now: f64) -> bool {
        if self.expanded == expanded {
            return false;
        }
        let current = self.height_at(now);
        self.expanded = expanded;
        self.retarget(current, now)
    }

    /// Record a fresh measurement of the content height.
    ///
    /// The first measurement snaps, later ones animate while expanded.
    pub fn set_content_height(&mut self, height: f64, now: f64) -> bool {
        let height = height.max(0.0);
        let first = self.content_height.is_none();
        if self.content_height == Some(height) {
            return false;
        }

        let current = self.height_at(now);
        self.content_height = Some(height);

        if first {
            self.transition = None;
            return false;
        }
        if !self.expanded {
            return false;
        }
        self.retarget(current, now)
    }

    /// Rendered height at `now`
    pub fn height_at(&self, now: f64) -> f64 {
        match self.transition {
            Some(transition) => {
                let progress = ((now - transition.started_at) / SUBMENU_TRANSITION_MS).clamp(0.0, 1.0);
                let eased = ease_in_out(progress);
                transition.from + (transition.to - transition.from) * eased
            }
            None => self.target_height(),
        }
    }

    pub fn is_settled(&self, now: f64) -> bool {
        match self.transition {
            Some(transition) => now - transition.started_at >= SUBMENU_TRANSITION_MS,
            None => true,
        }
    }

    fn retarget(&mut self, from: f64, now: f64) -> bool {
        let to = self.target_height();
        if (from - to).abs() < f64::EPSILON {
            self.transition = None;
            return false;
        }

        log_submenu_transition(from, to);
        self.transition = Some(HeightTransition {
            from,
            to,
            started_at: now,
        });
        true
    }
}

/// CSS `ease-in-out` timing function on [0, 1]
pub fn ease_in_out(progress: f64) -> f64 {
    let (x1, y1, x2, y2) = EASE_IN_OUT;
    let t = solve_bezier_parameter(progress.clamp(0.0, 1.0), x1, x2);
    bezier(t, y1, y2)
}

fn bezier(t: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - t;
    3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t
}

fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - t;
    3.0 * inv * inv * p1 + 6.0 * inv * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

/// Find `t` with x(t) == x, Newton first then bisection
fn solve_bezier_parameter(x: f64, x1: f64, x2: f64) -> f64 {
    const EPSILON: f64 = 1e-7;

    let mut t = x;
    for _ in 0..8 {
        let error = bezier(t, x1, x2) - x;
        if error.abs() < EPSILON {
            return t;
        }
        let slope = bezier_slope(t, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        t -= error / slope;
    }

    let (mut low, mut high) = (0.0, 1.0);
    t = x;
    while high - low > EPSILON {
        let value = bezier(t, x1, x2);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            low = t;
        } else {
            high = t;
        }
        t = (low + high) / 2.0;
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-3, "expected {expected}, got {actual}");
    }

    fn measured(expanded: bool, height: f64) -> SubmenuAnimator {
        let mut animator = SubmenuAnimator::new(expanded);
        animator.set_content_height(height, 0.0);
        animator
    }

    #[test]
    fn test_easing_endpoints_and_midpoint() {
        assert_close(ease_in_out(0.0), 0.0);
        assert_close(ease_in_out(1.0), 1.0);
        assert_close(ease_in_out(0.5), 0.5);
    }

    #[test]
    fn test_easing_is_monotonic() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let value = ease_in_out(step as f64 / 100.0);
            assert!(value >= previous - 1e-9);
            previous = value;
        }
    }

    #[test]
    fn test_targets() {
        assert_eq!(measured(false, 120.0).target_height(), 0.0);
        assert_eq!(measured(true, 120.0).target_height(), 120.0);
    }

    #[test]
    fn test_first_measurement_snaps() {
        let animator = measured(true, 96.0);

        assert_eq!(animator.height_at(0.0), 96.0);
        assert!(animator.is_settled(0.0));
    }

    #[test]
    fn test_expand_animates_to_content_height() {
        let mut animator = measured(false, 120.0);

        assert!(animator.set_expanded(true, 1000.0));

        assert_close(animator.height_at(1000.0), 0.0);
        assert!(!animator.is_settled(1100.0));
        let midway = animator.height_at(1100.0);
        assert!(midway > 0.0 && midway < 120.0);
        assert_close(animator.height_at(1000.0 + SUBMENU_TRANSITION_MS), 120.0);
        assert!(animator.is_settled(1000.0 + SUBMENU_TRANSITION_MS));
    }

    #[test]
    fn test_collapse_animates_to_zero() {
        let mut animator = measured(true, 80.0);

        animator.set_expanded(false, 0.0);

        assert_close(animator.height_at(0.0), 80.0);
        assert_close(animator.height_at(500.0), 0.0);
    }

    #[test]
    fn test_retarget_mid_flight_starts_from_current_height() {
        let mut animator = measured(false, 100.0);
        animator.set_expanded(true, 0.0);
        let at_half = animator.height_at(100.0);

        animator.set_expanded(false, 100.0);

        assert_close(animator.height_at(100.0), at_half);
        assert_close(animator.height_at(300.0), 0.0);
    }

    #[test]
    fn test_remeasure_while_expanded_retargets() {
        let mut animator = measured(true, 60.0);

        assert!(animator.set_content_height(90.0, 0.0));

        assert_close(animator.height_at(0.0), 60.0);
        assert_close(animator.height_at(SUBMENU_TRANSITION_MS), 90.0);
    }

    #[test]
    fn test_remeasure_while_collapsed_stays_closed() {
        let mut animator = measured(false, 60.0);

        assert!(!animator.set_content_height(90.0, 0.0));
        assert_eq!(animator.height_at(0.0), 0.0);

        animator.set_expanded(true, 10.0);
        assert_close(animator.height_at(10.0 + SUBMENU_TRANSITION_MS), 90.0);
    }

    #[test]
    fn test_same_state_is_noop() {
        let mut animator = measured(true, 40.0);

        assert!(!animator.set_expanded(true, 0.0));
        assert!(!animator.set_content_height(40.0, 0.0));
        assert!(animator.is_settled(0.0));
    }
}
