//! Page-wide controller set.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Site::init` runs once when the module starts. It attaches every
//! navigation toggle, theme toggle and the contact form it can find; features
//! whose markup is missing are skipped without error. The browser layer then
//! routes DOM events to the handlers exposed here, and headless tests drive
//! the same handlers directly.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use std::rc::Rc;

use crate::config::SiteConfig;
use crate::consts::{NAV_TOGGLE_PREFIX, THEME_TOGGLE_PREFIX};
use crate::contact::ContactForm;
use crate::dom::Page;
use crate::nav::NavToggle;
use crate::reveal;
use crate::storage::SettingsStore;
use crate::theme::ThemeToggle;

/// Every controller attached to the current page.
pub struct Site<P: Page, S: SettingsStore> {
    page: P,
    config: SiteConfig,
    navs: Vec<NavToggle<P::Node>>,
    themes: Vec<ThemeToggle<P, S>>,
    contact: Option<ContactForm<P>>,
}

impl<P: Page + Clone, S: SettingsStore> Site<P, S> {
    /// Attach all controllers whose markup exists on `page`.
    pub fn init(page: P, store: Rc<S>, config: SiteConfig) -> Self {
        let navs: Vec<_> = config
            .nav_pairs(&page.ids_with_prefix(NAV_TOGGLE_PREFIX))
            .iter()
            .filter_map(|pair| NavToggle::attach(&page, pair, config.mobile_breakpoint_px))
            .collect();

        let themes: Vec<_> = config
            .theme_ids(&page.ids_with_prefix(THEME_TOGGLE_PREFIX))
            .iter()
            .filter_map(|id| ThemeToggle::attach(&page, Rc::clone(&store), &config.storage_key, id))
            .collect();

        let contact = ContactForm::attach(&page, &config.contact_form_id, &config.form_status_id);

        log::info!(
            "site initialized: {} nav toggles, {} theme toggles, contact form {}",
            navs.len(),
            themes.len(),
            if contact.is_some() { "present" } else { "absent" },
        );

        Self { page, config, navs, themes, contact }
    }

    /// Document-ready work: stagger the fade-up elements.
    pub fn on_ready(&self) -> usize {
        reveal::apply_reveal(&self.page, self.config.fade_stagger_ms)
    }

    /// Window resized: collapse inline nav state once past the breakpoint.
    pub fn on_resize(&self) -> usize {
        let width = self.page.viewport_width();
        if width > self.config.mobile_breakpoint_px {
            for nav in &self.navs {
                nav.close();
            }
        }
        reveal::on_resize(&self.page, width, self.config.mobile_breakpoint_px)
    }

    /// The page is being hidden. A page kept in the back/forward cache
    /// (`persisted`) resumes its timers when restored, so its pending form
    /// completion must survive; only a real unload drops it.
    pub fn on_page_hide(&self, persisted: bool) {
        if persisted {
            return;
        }
        if let Some(contact) = &self.contact {
            contact.cancel();
        }
    }

    /// A `.nav-link` inside nav `index` was clicked.
    pub fn on_nav_link_click(&self, index: usize) {
        if let Some(nav) = self.navs.get(index) {
            nav.on_link_click(self.page.viewport_width());
        }
    }

    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn navs(&self) -> &[NavToggle<P::Node>] {
        &self.navs
    }

    #[must_use]
    pub fn themes(&self) -> &[ThemeToggle<P, S>] {
        &self.themes
    }

    #[must_use]
    pub fn contact(&self) -> Option<&ContactForm<P>> {
        self.contact.as_ref()
    }
}
