use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_lists_four_numbered_nav_toggles() {
    let config = SiteConfig::default();
    assert_eq!(config.nav_toggle_ids, vec!["navToggle", "navToggle2", "navToggle3", "navToggle4"]);
}

#[test]
fn default_lists_four_numbered_theme_toggles() {
    let config = SiteConfig::default();
    assert_eq!(config.theme_toggle_ids, vec!["themeToggle", "themeToggle2", "themeToggle3", "themeToggle4"]);
}

#[test]
fn default_tunables_match_constants() {
    let config = SiteConfig::default();
    assert_eq!(config.storage_key, "portfolio_theme");
    assert_eq!(config.mobile_breakpoint_px, 680.0);
    assert_eq!(config.form_delay_ms, 900);
    assert_eq!(config.fade_stagger_ms, 80);
    assert!(config.discover);
}

// =============================================================
// JSON overrides
// =============================================================

#[test]
fn from_json_keeps_defaults_for_missing_fields() {
    let config = SiteConfig::from_json(r#"{"formDelayMs": 10}"#).unwrap();
    assert_eq!(config.form_delay_ms, 10);
    assert_eq!(config.contact_form_id, "contactForm");
    assert_eq!(config.nav_toggle_ids.len(), 4);
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
}

#[test]
fn from_json_rejects_malformed_text() {
    let err = SiteConfig::from_json("{not json").unwrap_err();
    assert!(err.to_string().starts_with("invalid site config"));
}

#[test]
fn level_falls_back_to_info() {
    let mut config = SiteConfig::default();
    config.log_level = "debug".to_owned();
    assert_eq!(config.level(), log::Level::Debug);
    config.log_level = "chatty".to_owned();
    assert_eq!(config.level(), log::Level::Info);
}

// =============================================================
// Naming convention and discovery
// =============================================================

#[test]
fn nav_pair_replaces_toggle_with_links() {
    let pair = NavPair::from_toggle_id("navToggle3");
    assert_eq!(pair.toggle_id, "navToggle3");
    assert_eq!(pair.links_id, "navLinks3");
}

#[test]
fn nav_pair_replaces_only_first_occurrence() {
    assert_eq!(NavPair::from_toggle_id("navToggleToggle").links_id, "navLinksToggle");
}

#[test]
fn numbered_ids_first_has_no_suffix() {
    assert_eq!(numbered_ids("x", 3), vec!["x", "x2", "x3"]);
    assert!(numbered_ids("x", 0).is_empty());
}

#[test]
fn nav_pairs_merge_discovered_without_duplicates() {
    let config = SiteConfig::default();
    let discovered = vec!["navToggle2".to_owned(), "navToggle9".to_owned()];
    let pairs = config.nav_pairs(&discovered);
    assert_eq!(pairs.len(), 5);
    assert_eq!(pairs[4], NavPair::from_toggle_id("navToggle9"));
}

#[test]
fn discovery_disabled_ignores_found_ids() {
    let config = SiteConfig { discover: false, ..SiteConfig::default() };
    let ids = config.theme_ids(&["themeToggle7".to_owned()]);
    assert_eq!(ids, config.theme_toggle_ids);
}
