// File: crates/stream-chart/src/overlay.rs
// Summary: Overlay surface: floating nodes appended to the page body, owned by an explicit
// manager instead of being looked up document-wide.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

/// Identifier of an overlay node. Never reused within one manager.
pub type NodeId = u64;

/// Renderable content of an overlay node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayContent {
    pub html: String,
    /// Plain-text lines, used to measure the node.
    pub lines: Vec<String>,
    /// Extra horizontal pixels beyond the widest line (padding, swatches).
    pub chrome_px: f32,
}

/// Where floating nodes live. Implemented by the in-memory [`OverlayManager`] and by
/// host bindings that own a real document.
pub trait OverlayHost {
    /// Append a new node with `class` to the body.
    fn create(&mut self, class: &str) -> NodeId;
    /// Remove one node; false when it no longer exists.
    fn remove(&mut self, id: NodeId) -> bool;
    /// Remove every node carrying `class`; returns how many were removed.
    fn remove_by_class(&mut self, class: &str) -> usize;
    fn contains(&self, id: NodeId) -> bool;
    fn count_by_class(&self, class: &str) -> usize;
    fn set_content(&mut self, id: NodeId, content: OverlayContent);
    fn set_position(&mut self, id: NodeId, left: f32, top: f32);
    /// Rendered width of the node in pixels (0 for unknown nodes).
    fn width(&self, id: NodeId) -> f32;
}

/// Measures rendered text width in pixels.
pub trait TextMeasure {
    fn text_width(&self, text: &str) -> f32;
}

/// Fixed advance per character; good enough when no font backend is around.
#[derive(Clone, Copy, Debug)]
pub struct CharWidthMeasure {
    pub px_per_char: f32,
}

impl Default for CharWidthMeasure {
    fn default() -> Self { Self { px_per_char: 7.0 } }
}

impl TextMeasure for CharWidthMeasure {
    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.px_per_char
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverlayNode {
    pub class: String,
    pub left: f32,
    pub top: f32,
    pub content: OverlayContent,
}

/// In-memory model of the page body's floating nodes.
pub struct OverlayManager {
    nodes: BTreeMap<NodeId, OverlayNode>,
    next_id: NodeId,
    measure: Box<dyn TextMeasure>,
}

impl OverlayManager {
    pub fn new() -> Self {
        Self::with_measure(Box::new(CharWidthMeasure::default()))
    }

    pub fn with_measure(measure: Box<dyn TextMeasure>) -> Self {
        Self { nodes: BTreeMap::new(), next_id: 1, measure }
    }

    pub fn node(&self, id: NodeId) -> Option<&OverlayNode> {
        self.nodes.get(&id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &OverlayNode)> {
        self.nodes.iter().map(|(id, n)| (*id, n))
    }

    pub fn len(&self) -> usize { self.nodes.len() }
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }
}

impl Default for OverlayManager {
    fn default() -> Self { Self::new() }
}

impl fmt::Debug for OverlayManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayManager")
            .field("nodes", &self.nodes)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl OverlayHost for OverlayManager {
    fn create(&mut self, class: &str) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(
            id,
            OverlayNode { class: class.to_string(), left: 0.0, top: 0.0, content: OverlayContent::default() },
        );
        debug!(id, class, "overlay node created");
        id
    }

    fn remove(&mut self, id: NodeId) -> bool {
        let removed = self.nodes.remove(&id).is_some();
        if removed {
            debug!(id, "overlay node removed");
        }
        removed
    }

    fn remove_by_class(&mut self, class: &str) -> usize {
        let before = self.nodes.len();
        self.nodes.retain(|_, n| n.class != class);
        let removed = before - self.nodes.len();
        if removed > 0 {
            debug!(class, removed, "swept overlay nodes");
        }
        removed
    }

    fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    fn count_by_class(&self, class: &str) -> usize {
        self.nodes.values().filter(|n| n.class == class).count()
    }

    fn set_content(&mut self, id: NodeId, content: OverlayContent) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.content = content;
        }
    }

    fn set_position(&mut self, id: NodeId, left: f32, top: f32) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.left = left;
            node.top = top;
        }
    }

    fn width(&self, id: NodeId) -> f32 {
        let Some(node) = self.nodes.get(&id) else { return 0.0 };
        let widest = node
            .content
            .lines
            .iter()
            .map(|l| self.measure.text_width(l))
            .fold(0.0f32, f32::max);
        widest + node.content.chrome_px
    }
}
