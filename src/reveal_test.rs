use super::*;
use crate::dom::memory::MemoryPage;

#[test]
fn stagger_starts_at_zero_and_steps() {
    assert_eq!(stagger_delays(4, 80), vec![0, 80, 160, 240]);
    assert!(stagger_delays(0, 80).is_empty());
}

#[test]
fn stagger_is_strictly_increasing() {
    let delays = stagger_delays(50, 80);
    assert!(delays.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn apply_reveal_sets_delays_in_document_order() {
    let page = MemoryPage::new(1024.0);
    let hero = page.create("hero", "fade-up");
    page.create("plain", "card");
    let about = page.create("about", "card fade-up");
    let inner = page.create_in(&about, "inner", "fade-up");

    assert_eq!(apply_reveal(&page, 80), 3);
    assert_eq!(hero.style("animation-delay"), "0ms");
    assert_eq!(about.style("animation-delay"), "80ms");
    assert_eq!(inner.style("animation-delay"), "160ms");
    assert!(inner.has_class("fade-up"));
    assert_eq!(page.element_by_id("plain").map(|n| n.style("animation-delay")), Some(String::new()));
}

#[test]
fn apply_reveal_on_empty_page() {
    assert_eq!(apply_reveal(&MemoryPage::new(1024.0), 80), 0);
}

#[test]
fn resize_above_breakpoint_clears_open_panels() {
    let page = MemoryPage::new(1024.0);
    let a = page.create("navLinks", "nav-links");
    let b = page.create("navLinks2", "nav-links");
    a.set_style("display", "flex");

    assert_eq!(on_resize(&page, 681.0, 680.0), 2);
    assert_eq!(a.style("display"), "");
    assert_eq!(b.style("display"), "");
}

#[test]
fn resize_at_or_below_breakpoint_keeps_panels() {
    let page = MemoryPage::new(1024.0);
    let a = page.create("navLinks", "nav-links");
    a.set_style("display", "flex");
    assert_eq!(on_resize(&page, 680.0, 680.0), 0);
    assert_eq!(on_resize(&page, 375.0, 680.0), 0);
    assert_eq!(a.style("display"), "flex");
}
