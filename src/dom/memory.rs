//! In-memory [`Page`] for headless runs.
//!
//! Elements live in a shared arena in insertion order, which doubles as
//! document order. Only `#id` and `.class` selectors are understood; that is
//! all the controllers ask for. Removed elements (and their descendants) stop
//! matching lookups but existing handles keep working, like detached DOM
//! nodes.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use super::{Node, Page};

#[derive(Debug, Default)]
struct ElementData {
    id: String,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    text: String,
    value: String,
    is_form: bool,
    parent: Option<usize>,
    removed: bool,
}

#[derive(Debug, Default)]
struct Arena {
    elements: Vec<ElementData>,
}

impl Arena {
    fn is_live(&self, index: usize) -> bool {
        let mut cursor = Some(index);
        while let Some(i) = cursor {
            let el = &self.elements[i];
            if el.removed {
                return false;
            }
            cursor = el.parent;
        }
        true
    }

    fn is_descendant(&self, index: usize, ancestor: usize) -> bool {
        let mut cursor = self.elements[index].parent;
        while let Some(i) = cursor {
            if i == ancestor {
                return true;
            }
            cursor = self.elements[i].parent;
        }
        false
    }

    fn matches(&self, index: usize, selector: &Selector<'_>) -> bool {
        let el = &self.elements[index];
        match selector {
            Selector::Id(id) => el.id == *id,
            Selector::Class(class) => el.classes.iter().any(|c| c == class),
            Selector::Unsupported => false,
        }
    }
}

enum Selector<'a> {
    Id(&'a str),
    Class(&'a str),
    Unsupported,
}

fn parse_selector(selector: &str) -> Selector<'_> {
    if let Some(id) = selector.strip_prefix('#') {
        Selector::Id(id)
    } else if let Some(class) = selector.strip_prefix('.') {
        Selector::Class(class)
    } else {
        Selector::Unsupported
    }
}

/// Shared in-memory document.
#[derive(Clone, Debug)]
pub struct MemoryPage {
    arena: Rc<RefCell<Arena>>,
    viewport_width: Rc<Cell<f64>>,
}

impl MemoryPage {
    #[must_use]
    pub fn new(viewport_width: f64) -> Self {
        Self { arena: Rc::default(), viewport_width: Rc::new(Cell::new(viewport_width)) }
    }

    pub fn set_viewport_width(&self, width: f64) {
        self.viewport_width.set(width);
    }

    /// Append an element at the document root. `id` may be empty; `classes`
    /// is whitespace separated.
    pub fn create(&self, id: &str, classes: &str) -> MemoryNode {
        self.insert(None, id, classes, false)
    }

    /// Append an element inside `parent`.
    pub fn create_in(&self, parent: &MemoryNode, id: &str, classes: &str) -> MemoryNode {
        self.insert(Some(parent.index), id, classes, false)
    }

    /// Append a `<form>` element at the document root.
    pub fn create_form(&self, id: &str) -> MemoryNode {
        self.insert(None, id, "", true)
    }

    fn insert(&self, parent: Option<usize>, id: &str, classes: &str, is_form: bool) -> MemoryNode {
        let mut arena = self.arena.borrow_mut();
        arena.elements.push(ElementData {
            id: id.to_owned(),
            classes: classes.split_whitespace().map(str::to_owned).collect(),
            is_form,
            parent,
            ..ElementData::default()
        });
        MemoryNode { arena: Rc::clone(&self.arena), index: arena.elements.len() - 1 }
    }

    fn live_matches(&self, selector: &str, within: Option<usize>) -> Vec<MemoryNode> {
        let selector = parse_selector(selector);
        let arena = self.arena.borrow();
        (0..arena.elements.len())
            .filter(|&i| arena.is_live(i))
            .filter(|&i| within.is_none_or(|root| arena.is_descendant(i, root)))
            .filter(|&i| arena.matches(i, &selector))
            .map(|index| MemoryNode { arena: Rc::clone(&self.arena), index })
            .collect()
    }
}

impl Page for MemoryPage {
    type Node = MemoryNode;

    fn element_by_id(&self, id: &str) -> Option<MemoryNode> {
        self.live_matches(&format!("#{id}"), None).into_iter().next()
    }

    fn query_selector(&self, selector: &str) -> Option<MemoryNode> {
        self.live_matches(selector, None).into_iter().next()
    }

    fn query_selector_all(&self, selector: &str) -> Vec<MemoryNode> {
        self.live_matches(selector, None)
    }

    fn query_within(&self, root: &MemoryNode, selector: &str) -> Vec<MemoryNode> {
        self.live_matches(selector, Some(root.index))
    }

    fn ids_with_prefix(&self, prefix: &str) -> Vec<String> {
        let arena = self.arena.borrow();
        arena
            .elements
            .iter()
            .enumerate()
            .filter(|(i, el)| !el.id.is_empty() && el.id.starts_with(prefix) && arena.is_live(*i))
            .map(|(_, el)| el.id.clone())
            .collect()
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width.get()
    }
}

/// Handle to an element in a [`MemoryPage`].
#[derive(Clone, Debug)]
pub struct MemoryNode {
    arena: Rc<RefCell<Arena>>,
    index: usize,
}

impl MemoryNode {
    fn with<R>(&self, f: impl FnOnce(&ElementData) -> R) -> R {
        f(&self.arena.borrow().elements[self.index])
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut ElementData) -> R) -> R {
        f(&mut self.arena.borrow_mut().elements[self.index])
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.with(|el| el.text.clone())
    }

    #[must_use]
    pub fn value(&self) -> String {
        self.with(|el| el.value.clone())
    }

    /// Simulate typing into a form control.
    pub fn set_value(&self, value: &str) {
        self.with_mut(|el| el.value = value.to_owned());
    }

    /// Detach the element from the document.
    pub fn remove(&self) {
        self.with_mut(|el| el.removed = true);
    }
}

impl Node for MemoryNode {
    fn id(&self) -> String {
        self.with(|el| el.id.clone())
    }

    fn style(&self, property: &str) -> String {
        self.with(|el| el.styles.get(property).cloned().unwrap_or_default())
    }

    fn set_style(&self, property: &str, value: &str) {
        self.with_mut(|el| {
            if value.is_empty() {
                el.styles.remove(property);
            } else {
                el.styles.insert(property.to_owned(), value.to_owned());
            }
        });
    }

    fn has_class(&self, class: &str) -> bool {
        self.with(|el| el.classes.iter().any(|c| c == class))
    }

    fn add_class(&self, class: &str) {
        self.with_mut(|el| {
            if !el.classes.iter().any(|c| c == class) {
                el.classes.push(class.to_owned());
            }
        });
    }

    fn remove_class(&self, class: &str) {
        self.with_mut(|el| el.classes.retain(|c| c != class));
    }

    fn toggle_class(&self, class: &str) -> bool {
        self.with_mut(|el| {
            if let Some(pos) = el.classes.iter().position(|c| c == class) {
                el.classes.remove(pos);
                false
            } else {
                el.classes.push(class.to_owned());
                true
            }
        })
    }

    fn set_text(&self, text: &str) {
        self.with_mut(|el| el.text = text.to_owned());
    }

    fn reset_form(&self) {
        let mut arena = self.arena.borrow_mut();
        if !arena.elements[self.index].is_form {
            return;
        }
        let descendants: Vec<usize> =
            (0..arena.elements.len()).filter(|&i| arena.is_descendant(i, self.index)).collect();
        for i in descendants {
            arena.elements[i].value.clear();
        }
    }
}
