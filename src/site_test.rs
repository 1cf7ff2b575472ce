use super::*;
use crate::dom::Node;
use crate::dom::memory::{MemoryNode, MemoryPage};
use crate::nav::NavState;
use crate::storage::MemoryStore;
use crate::theme::Theme;

struct Portfolio {
    page: MemoryPage,
    site_wrapper: MemoryNode,
    nav_links: MemoryNode,
    theme_icons: Vec<MemoryNode>,
    status: MemoryNode,
    field: MemoryNode,
    fades: Vec<MemoryNode>,
}

/// A contact page as the static markup lays it out.
fn portfolio(width: f64) -> Portfolio {
    let page = MemoryPage::new(width);
    let site_wrapper = page.create("", "site");
    let header = page.create_in(&site_wrapper, "", "header fade-up");
    page.create_in(&header, "navToggle2", "nav-toggle");
    let nav_links = page.create_in(&header, "navLinks2", "nav-links");
    page.create_in(&nav_links, "", "nav-link");
    page.create_in(&nav_links, "", "nav-link");
    let theme_icons = vec![page.create_in(&header, "themeToggle2", "theme-toggle")];
    let hero = page.create_in(&site_wrapper, "", "hero fade-up");
    let form = page.create_form("contactForm");
    let field = page.create_in(&form, "", "");
    field.set_value("hi");
    let status = page.create_in(&site_wrapper, "formStatus", "");
    let footer = page.create_in(&site_wrapper, "", "footer fade-up");
    Portfolio { page, site_wrapper, nav_links, theme_icons, status, field, fades: vec![header, hero, footer] }
}

fn init(p: &Portfolio, store: &Rc<MemoryStore>) -> Site<MemoryPage, MemoryStore> {
    Site::init(p.page.clone(), Rc::clone(store), SiteConfig::default())
}

#[test]
fn empty_page_attaches_nothing() {
    let site = Site::init(MemoryPage::new(1024.0), Rc::new(MemoryStore::new()), SiteConfig::default());
    assert!(site.navs().is_empty());
    assert!(site.themes().is_empty());
    assert!(site.contact().is_none());
    assert_eq!(site.on_ready(), 0);
    assert_eq!(site.on_resize(), 0);
    site.on_nav_link_click(0);
}

#[test]
fn init_attaches_page_specific_ids() {
    let p = portfolio(400.0);
    let site = init(&p, &Rc::new(MemoryStore::new()));
    assert_eq!(site.navs().len(), 1);
    assert_eq!(site.themes().len(), 1);
    assert!(site.contact().is_some());
    assert_eq!(site.config().storage_key, "portfolio_theme");
    assert_eq!(site.page().viewport_width(), 400.0);
}

#[test]
fn discovered_ids_beyond_defaults_attach() {
    let p = portfolio(400.0);
    p.page.create("navToggle12", "");
    p.page.create("navLinks12", "nav-links");
    p.page.create("themeToggle12", "theme-toggle");
    let site = init(&p, &Rc::new(MemoryStore::new()));
    assert_eq!(site.navs().len(), 2);
    assert_eq!(site.themes().len(), 2);
}

#[test]
fn mobile_menu_flow() {
    let p = portfolio(400.0);
    let site = init(&p, &Rc::new(MemoryStore::new()));
    let nav = &site.navs()[0];

    assert_eq!(nav.on_toggle_click(), NavState::Open);
    site.on_nav_link_click(0);
    assert_eq!(nav.state(), NavState::Closed);

    nav.on_toggle_click();
    p.page.set_viewport_width(1280.0);
    assert_eq!(site.on_resize(), 1);
    assert_eq!(p.nav_links.style("display"), "");
    assert!(!nav.toggle().has_class("open"));

    p.page.set_viewport_width(400.0);
    assert_eq!(nav.on_toggle_click(), NavState::Open);
    assert!(nav.toggle().has_class("open"));
}

#[test]
fn resize_below_breakpoint_keeps_menu_open() {
    let p = portfolio(400.0);
    let site = init(&p, &Rc::new(MemoryStore::new()));
    let nav = &site.navs()[0];
    nav.on_toggle_click();
    p.page.set_viewport_width(600.0);
    assert_eq!(site.on_resize(), 0);
    assert_eq!(nav.state(), NavState::Open);
    assert!(nav.toggle().has_class("open"));
}

#[test]
fn theme_example_from_absent_preference() {
    let p = portfolio(1024.0);
    let store = Rc::new(MemoryStore::new());
    let site = init(&p, &store);

    assert!(!p.site_wrapper.has_class("light"));
    assert_eq!(p.theme_icons[0].text(), "🌙");

    assert_eq!(site.themes()[0].on_click(), Theme::Light);
    assert!(p.site_wrapper.has_class("light"));
    assert_eq!(store.get("portfolio_theme").as_deref(), Some("light"));
    assert_eq!(p.theme_icons[0].text(), "☀️");
}

#[test]
fn preference_survives_reload() {
    let store = Rc::new(MemoryStore::new());
    let first = portfolio(1024.0);
    init(&first, &store).themes()[0].on_click();

    let reloaded = portfolio(1024.0);
    init(&reloaded, &store);
    assert!(reloaded.site_wrapper.has_class("light"));
    assert_eq!(reloaded.theme_icons[0].text(), "☀️");
}

#[test]
fn contact_flow() {
    let p = portfolio(1024.0);
    let site = init(&p, &Rc::new(MemoryStore::new()));
    let contact = site.contact().unwrap();
    let ticket = contact.submit();
    assert_eq!(p.status.text(), "Sending...");
    assert!(contact.complete(ticket));
    assert!(p.status.text().starts_with("Thanks!"));
    assert_eq!(p.field.value(), "");
}

#[test]
fn ready_staggers_fade_up_elements() {
    let p = portfolio(1024.0);
    let site = init(&p, &Rc::new(MemoryStore::new()));
    assert_eq!(site.on_ready(), 3);
    let delays: Vec<String> = p.fades.iter().map(|n| n.style("animation-delay")).collect();
    assert_eq!(delays, vec!["0ms", "80ms", "160ms"]);
}

#[test]
fn cached_page_hide_keeps_pending_completion() {
    let p = portfolio(1024.0);
    let site = init(&p, &Rc::new(MemoryStore::new()));
    let contact = site.contact().unwrap();
    let ticket = contact.submit();

    site.on_page_hide(true);
    assert_eq!(contact.pending(), Some(ticket));
    assert!(contact.complete(ticket));
    assert!(p.status.text().starts_with("Thanks!"));
    assert_eq!(p.field.value(), "");
}

#[test]
fn unloading_page_hide_drops_pending_completion() {
    let p = portfolio(1024.0);
    let site = init(&p, &Rc::new(MemoryStore::new()));
    let contact = site.contact().unwrap();
    let ticket = contact.submit();

    site.on_page_hide(false);
    assert_eq!(contact.pending(), None);
    assert!(!contact.complete(ticket));
}

#[test]
fn page_hide_without_form_is_noop() {
    let site = Site::init(MemoryPage::new(1024.0), Rc::new(MemoryStore::new()), SiteConfig::default());
    site.on_page_hide(false);
    site.on_page_hide(true);
}
