//! Entrance animation stagger and resize cleanup.
//!
//! The keyframes live in the stylesheet on `.fade-up`; this module only
//! spaces out their start times so elements cascade in document order.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::{FADE_UP_CLASS, NAV_LINKS_CLASS};
use crate::dom::{Node, Page, class_selector};

/// Animation delays for `count` elements: `0, step, 2 * step, ...`.
#[must_use]
pub fn stagger_delays(count: usize, step_ms: u32) -> Vec<u32> {
    (0..count).map(|i| u32::try_from(i).unwrap_or(u32::MAX).saturating_mul(step_ms)).collect()
}

/// Give every `.fade-up` element its staggered `animation-delay`. Returns the
/// number of elements touched.
pub fn apply_reveal<P: Page>(page: &P, step_ms: u32) -> usize {
    let nodes = page.query_selector_all(&class_selector(FADE_UP_CLASS));
    for (node, delay) in nodes.iter().zip(stagger_delays(nodes.len(), step_ms)) {
        node.set_style("animation-delay", &format!("{delay}ms"));
        node.add_class(FADE_UP_CLASS);
    }
    log::debug!("staggered {} fade-up elements", nodes.len());
    nodes.len()
}

/// Above the breakpoint, drop any inline `display` left on `.nav-links`
/// containers by the mobile menu. Returns the number of containers reset.
pub fn on_resize<P: Page>(page: &P, viewport_width: f64, breakpoint_px: f64) -> usize {
    if viewport_width <= breakpoint_px {
        return 0;
    }
    let containers = page.query_selector_all(&class_selector(NAV_LINKS_CLASS));
    for nav in &containers {
        nav.set_style("display", "");
    }
    containers.len()
}
