use super::{Element, LAYOUT_ATTR, OUTLET_ATTR, Surface};
use crate::types::RouteId;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Slot {
    tag: String,
    attrs: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl Slot {
    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Arena-backed document for headless use and tests. Node `0` is the
/// document body; mount targets are found by their `id` attribute.
#[derive(Debug)]
pub struct MemorySurface {
    slots: Vec<Slot>,
}

const BODY: NodeId = NodeId(0);

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySurface {
    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                tag: "body".to_string(),
                attrs: Vec::new(),
                text: None,
                children: Vec::new(),
                parent: None,
            }],
        }
    }

    /// Adds an empty `<div id=name>` directly under the body.
    pub fn with_target(mut self, name: &str) -> Self {
        self.attach(&BODY, Element::new("div").id(name));
        self
    }

    pub fn body(&self) -> NodeId {
        BODY
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.slots
            .get(node.0)
            .map(|slot| slot.children.as_slice())
            .unwrap_or_default()
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.slots.get(node.0).and_then(|slot| slot.attr(name))
    }

    /// Concatenated text of the connected subtree under the named target.
    pub fn target_text(&self, name: &str) -> Option<String> {
        let node = self.mount_target(name)?;
        Some(self.text_content(node))
    }

    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        let Some(slot) = self.slots.get(node.0) else {
            return;
        };
        if let Some(text) = &slot.text {
            out.push_str(text);
        }
        for &child in &slot.children {
            self.collect_text(child, out);
        }
    }

    /// Serializes a subtree as markup; handy for assertions.
    pub fn to_markup(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_markup(node, &mut out);
        out
    }

    fn write_markup(&self, node: NodeId, out: &mut String) {
        let Some(slot) = self.slots.get(node.0) else {
            return;
        };
        let _ = write!(out, "<{}", slot.tag);
        for (name, value) in &slot.attrs {
            let _ = write!(out, " {name}=\"{value}\"");
        }
        out.push('>');
        if let Some(text) = &slot.text {
            out.push_str(text);
        }
        for &child in &slot.children {
            self.write_markup(child, out);
        }
        let _ = write!(out, "</{}>", slot.tag);
    }

    fn insert(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot {
            tag: element.tag,
            attrs: element.attrs,
            text: element.text,
            children: Vec::with_capacity(element.children.len()),
            parent: Some(parent),
        });
        for child in element.children {
            let child_id = self.insert(id, child);
            self.slots[id.0].children.push(child_id);
        }
        id
    }

    fn find_in_subtree(&self, root: NodeId, pred: &dyn Fn(&Slot) -> bool) -> Option<NodeId> {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            let slot = self.slots.get(node.0)?;
            if pred(slot) {
                return Some(node);
            }
            stack.extend(slot.children.iter().rev().copied());
        }
        None
    }
}

impl Surface for MemorySurface {
    type View = Element;
    type Node = NodeId;

    fn mount_target(&self, name: &str) -> Option<NodeId> {
        self.find_in_subtree(BODY, &|slot| slot.attr("id") == Some(name))
    }

    fn clear(&mut self, mount: &NodeId) {
        let Some(slot) = self.slots.get_mut(mount.0) else {
            return;
        };
        let removed = std::mem::take(&mut slot.children);
        for child in removed {
            if let Some(child_slot) = self.slots.get_mut(child.0) {
                child_slot.parent = None;
            }
        }
    }

    fn attach(&mut self, mount: &NodeId, view: Element) -> NodeId {
        let root = self.insert(*mount, view);
        if let Some(slot) = self.slots.get_mut(mount.0) {
            slot.children.push(root);
        }
        root
    }

    fn find_outlet(&self, root: &NodeId) -> Option<NodeId> {
        self.find_in_subtree(*root, &|slot| slot.attr(OUTLET_ATTR).is_some())
    }

    fn mark_layout(&mut self, root: &NodeId, layout: RouteId) {
        if let Some(slot) = self.slots.get_mut(root.0) {
            let value = layout.to_string();
            match slot.attrs.iter_mut().find(|(name, _)| name == LAYOUT_ATTR) {
                Some(entry) => entry.1 = value,
                None => slot.attrs.push((LAYOUT_ATTR.to_string(), value)),
            }
        }
    }

    fn is_connected(&self, node: &NodeId) -> bool {
        let mut cursor = *node;
        loop {
            if cursor == BODY {
                return true;
            }
            match self.slots.get(cursor.0).and_then(|slot| slot.parent) {
                Some(parent) => cursor = parent,
                None => return false,
            }
        }
    }
}
