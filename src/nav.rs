//! Mobile navigation toggle.
//!
//! Below the mobile breakpoint the stylesheet hides the link container. The
//! toggle button forces it visible with an inline `display: flex` and clears
//! that again on the next click, so "closed" is always the stylesheet
//! default rather than an explicit `none`.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::NavPair;
use crate::consts::{NAV_LINK_CLASS, NAV_OPEN_DISPLAY, OPEN_CLASS};
use crate::dom::{Node, Page, class_selector};

/// Open/closed state of one navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

/// One toggle button wired to its link container.
#[derive(Clone, Debug)]
pub struct NavToggle<N: Node> {
    toggle: N,
    links: N,
    link_nodes: Vec<N>,
    breakpoint_px: f64,
}

impl<N: Node> NavToggle<N> {
    /// Resolve both elements of `pair`. Returns `None` when either is absent.
    pub fn attach<P: Page<Node = N>>(page: &P, pair: &NavPair, breakpoint_px: f64) -> Option<Self> {
        let toggle = page.element_by_id(&pair.toggle_id)?;
        let links = page.element_by_id(&pair.links_id)?;
        let link_nodes = page.query_within(&links, &class_selector(NAV_LINK_CLASS));
        log::debug!("nav toggle #{} attached with {} links", pair.toggle_id, link_nodes.len());
        Some(Self { toggle, links, link_nodes, breakpoint_px })
    }

    #[must_use]
    pub fn state(&self) -> NavState {
        if self.links.style("display") == NAV_OPEN_DISPLAY { NavState::Open } else { NavState::Closed }
    }

    /// Flip the panel and the button's `open` marker.
    pub fn on_toggle_click(&self) -> NavState {
        let next = match self.state() {
            NavState::Open => {
                self.links.set_style("display", "");
                NavState::Closed
            }
            NavState::Closed => {
                self.links.set_style("display", NAV_OPEN_DISPLAY);
                NavState::Open
            }
        };
        self.toggle.toggle_class(OPEN_CLASS);
        next
    }

    /// A link inside the panel was followed. On narrow viewports the panel
    /// collapses back to its stylesheet default.
    pub fn on_link_click(&self, viewport_width: f64) {
        if viewport_width < self.breakpoint_px {
            self.close();
        }
    }

    /// Back to the stylesheet default, with the button marker cleared so the
    /// next toggle click opens the panel and marks the button again.
    pub fn close(&self) {
        self.links.set_style("display", "");
        self.toggle.remove_class(OPEN_CLASS);
    }

    #[must_use]
    pub fn toggle(&self) -> &N {
        &self.toggle
    }

    #[must_use]
    pub fn links(&self) -> &N {
        &self.links
    }

    /// The `.nav-link` elements found inside the container at attach time.
    #[must_use]
    pub fn link_nodes(&self) -> &[N] {
        &self.link_nodes
    }
}
