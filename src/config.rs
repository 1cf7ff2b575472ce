//! Element identifiers and tunables for the portfolio pages.
//!
//! DESIGN
//! ======
//! Each page carries its own copy of the navigation and theme buttons with
//! numbered ids (`navToggle2`, `themeToggle3`, ...). Rather than hard-coding
//! every id, the config lists the known ones and, when `discover` is set, the
//! site also attaches to any element whose id starts with the same prefix.
//! A page may override any field with a JSON `<script id="siteConfig">`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    CONTACT_FORM_ID, FADE_STAGGER_MS, FORM_DELAY_MS, FORM_STATUS_ID, MOBILE_BREAKPOINT_PX, NAV_TOGGLE_PREFIX,
    THEME_STORAGE_KEY, THEME_TOGGLE_PREFIX,
};
use crate::error::Result;

/// Runtime configuration for every controller on the page.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub nav_toggle_ids: Vec<String>,
    pub theme_toggle_ids: Vec<String>,
    /// Also attach to elements whose id starts with the toggle prefixes.
    pub discover: bool,
    pub contact_form_id: String,
    pub form_status_id: String,
    pub storage_key: String,
    pub mobile_breakpoint_px: f64,
    pub form_delay_ms: u32,
    pub fade_stagger_ms: u32,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav_toggle_ids: numbered_ids(NAV_TOGGLE_PREFIX, 4),
            theme_toggle_ids: numbered_ids(THEME_TOGGLE_PREFIX, 4),
            discover: true,
            contact_form_id: CONTACT_FORM_ID.to_owned(),
            form_status_id: FORM_STATUS_ID.to_owned(),
            storage_key: THEME_STORAGE_KEY.to_owned(),
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            form_delay_ms: FORM_DELAY_MS,
            fade_stagger_ms: FADE_STAGGER_MS,
            log_level: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SiteError::Config`] when the text is not valid JSON
    /// for this shape.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Console log level, falling back to `Info` for unknown names.
    #[must_use]
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Navigation pairs to attach: configured ids first, then discovered ones.
    #[must_use]
    pub fn nav_pairs(&self, discovered: &[String]) -> Vec<NavPair> {
        merge_ids(&self.nav_toggle_ids, self.discovered(discovered))
            .iter()
            .map(|id| NavPair::from_toggle_id(id))
            .collect()
    }

    /// Theme button ids to attach: configured ids first, then discovered ones.
    #[must_use]
    pub fn theme_ids(&self, discovered: &[String]) -> Vec<String> {
        merge_ids(&self.theme_toggle_ids, self.discovered(discovered))
    }

    fn discovered<'a>(&self, discovered: &'a [String]) -> &'a [String] {
        if self.discover { discovered } else { &[] }
    }
}

/// Toggle button and link container ids for one navigation fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavPair {
    pub toggle_id: String,
    pub links_id: String,
}

impl NavPair {
    /// Derive the container id by naming convention: `navToggle2` -> `navLinks2`.
    #[must_use]
    pub fn from_toggle_id(toggle_id: &str) -> Self {
        Self {
            toggle_id: toggle_id.to_owned(),
            links_id: toggle_id.replacen("Toggle", "Links", 1),
        }
    }
}

/// `prefix`, `prefix2`, ... `prefix{count}`.
#[must_use]
pub fn numbered_ids(prefix: &str, count: usize) -> Vec<String> {
    (1..=count)
        .map(|n| if n == 1 { prefix.to_owned() } else { format!("{prefix}{n}") })
        .collect()
}

fn merge_ids(configured: &[String], discovered: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(configured.len() + discovered.len());
    for id in configured.iter().chain(discovered) {
        if !out.contains(id) {
            out.push(id.clone());
        }
    }
    out
}
