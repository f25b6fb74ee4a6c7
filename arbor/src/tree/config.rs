use std::fmt;
use std::sync::Arc;

use super::animations::Animations;
use super::data::Node;
use super::header::{DefaultHeader, NodeHeader};
use crate::decorators::Decorators;
use crate::event::DragEvent;
use crate::types::TreeStyle;

pub type ToggleCallback = Arc<dyn Fn(&Node, bool) + Send + Sync>;
pub type DragCallback = Arc<dyn Fn(&DragEvent) + Send + Sync>;

/// Selector class given to draggable node roots when none is set.
pub const DEFAULT_NODE_SELECTOR: &str = "tree-node";

/// Drag handling shared by every node of a tree.
#[derive(Clone)]
pub struct DragAndDrop {
    pub on_move: Option<DragCallback>,
    pub on_end: DragCallback,
    /// Class put on every node root, identifying it as draggable.
    pub node_selector: String,
}

impl DragAndDrop {
    pub fn new(on_end: impl Fn(&DragEvent) + Send + Sync + 'static) -> Self {
        Self {
            on_move: None,
            on_end: Arc::new(on_end),
            node_selector: DEFAULT_NODE_SELECTOR.to_string(),
        }
    }

    pub fn on_move(mut self, on_move: impl Fn(&DragEvent) + Send + Sync + 'static) -> Self {
        self.on_move = Some(Arc::new(on_move));
        self
    }

    pub fn node_selector(mut self, selector: impl Into<String>) -> Self {
        self.node_selector = selector.into();
        self
    }
}

impl fmt::Debug for DragAndDrop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragAndDrop")
            .field("on_move", &self.on_move.is_some())
            .field("node_selector", &self.node_selector)
            .finish_non_exhaustive()
    }
}

/// Everything a tree needs besides its nodes. The same value is handed,
/// unchanged, to every level of the tree.
#[derive(Clone)]
pub struct TreeConfig {
    pub style: TreeStyle,
    pub decorators: Decorators,
    pub animations: Animations,
    pub on_toggle: Option<ToggleCallback>,
    pub drag_and_drop: Option<DragAndDrop>,
    pub header: Arc<dyn NodeHeader>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            decorators: Decorators::with_defaults(),
            animations: Animations::default(),
            on_toggle: None,
            drag_and_drop: None,
            header: Arc::new(DefaultHeader),
        }
    }
}

impl TreeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, style: TreeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn decorators(mut self, decorators: Decorators) -> Self {
        self.decorators = decorators;
        self
    }

    pub fn animations(mut self, animations: Animations) -> Self {
        self.animations = animations;
        self
    }

    /// Turn animations off for every node.
    pub fn without_animations(self) -> Self {
        self.animations(Animations::Disabled)
    }

    pub fn on_toggle(mut self, on_toggle: impl Fn(&Node, bool) + Send + Sync + 'static) -> Self {
        self.on_toggle = Some(Arc::new(on_toggle));
        self
    }

    pub fn drag_and_drop(mut self, drag_and_drop: DragAndDrop) -> Self {
        self.drag_and_drop = Some(drag_and_drop);
        self
    }

    pub fn header(mut self, header: impl NodeHeader + 'static) -> Self {
        self.header = Arc::new(header);
        self
    }
}

impl fmt::Debug for TreeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeConfig")
            .field("style", &self.style)
            .field("decorators", &self.decorators)
            .field("animations", &self.animations)
            .field("on_toggle", &self.on_toggle.is_some())
            .field("drag_and_drop", &self.drag_and_drop)
            .finish_non_exhaustive()
    }
}

/// The props a node renders from: the node and the tree configuration.
#[derive(Debug, Clone, Copy)]
pub struct NodeProps<'a> {
    pub node: &'a Node,
    pub config: &'a TreeConfig,
}

impl<'a> NodeProps<'a> {
    pub fn new(node: &'a Node, config: &'a TreeConfig) -> Self {
        Self { node, config }
    }
}
