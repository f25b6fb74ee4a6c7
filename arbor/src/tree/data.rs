use std::sync::Arc;

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use super::animations::AnimationOverrides;
use super::config::NodeProps;
use crate::decorators::{DecoratorProps, Decorators};
use crate::element::Element;
use crate::error::TreeError;
use crate::transitions::{DrawerTransition, TransitionConfig};

/// One entry of the tree being displayed.
///
/// Nodes are owned by the caller. Rendering only reads them; expanding a
/// node means the caller flips `toggled` and hands the tree back.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Node {
    /// Strings and numbers are accepted; an empty id counts as none.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: Option<String>,
    pub name: String,
    /// Whether the node is expanded.
    pub toggled: bool,
    /// Whether the children are still being fetched.
    pub loading: bool,
    /// Whether the node is highlighted.
    pub active: bool,
    pub children: Option<Children>,
    #[serde(skip)]
    pub decorators: Decorators,
    #[serde(skip)]
    pub animations: AnimationOverrides,
}

/// The `children` field as supplied: one node, a list, or something else.
#[derive(Debug, Clone)]
pub enum Children {
    Many(Vec<Node>),
    One(Box<Node>),
    /// Neither an object nor a list. Rendered as no children.
    Malformed(Value),
}

impl<'de> Deserialize<'de> for Children {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Array(_) => serde_json::from_value(value)
                .map(Children::Many)
                .map_err(de::Error::custom),
            Value::Object(_) => serde_json::from_value(value)
                .map(|node| Children::One(Box::new(node)))
                .map_err(de::Error::custom),
            other => {
                log::warn!("[tree] ignoring malformed children: {other}");
                Ok(Children::Malformed(other))
            }
        }
    }
}

fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(id)) if id.is_empty() => Ok(None),
        Some(Value::String(id)) => Ok(Some(id)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "node id must be a string or a number, got {other}"
        ))),
    }
}

/// Escape the characters paths are built from, so an id can never look like
/// a separator, a suffix or a positional key.
fn escape_key(id: &str) -> String {
    let mut key = String::with_capacity(id.len());
    for c in id.chars() {
        match c {
            '%' => key.push_str("%25"),
            '/' => key.push_str("%2F"),
            ':' => key.push_str("%3A"),
            '#' => key.push_str("%23"),
            '~' => key.push_str("%7E"),
            c => key.push(c),
        }
    }
    key
}

impl Children {
    /// The children as a slice; a single child becomes a one-element slice.
    pub fn as_slice(&self) -> &[Node] {
        match self {
            Children::Many(nodes) => nodes,
            Children::One(node) => std::slice::from_ref(node.as_ref()),
            Children::Malformed(_) => &[],
        }
    }
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parse a node tree from JSON.
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a list of root nodes from JSON. A single object is accepted as a
    /// one-element list.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, TreeError> {
        let roots: Children = serde_json::from_str(json)?;
        Ok(roots.as_slice().to_vec())
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn toggled(mut self, toggled: bool) -> Self {
        self.toggled = toggled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Append a child, turning a single child into a list.
    pub fn child(mut self, child: Node) -> Self {
        self.children = Some(match self.children.take() {
            Some(Children::Many(mut nodes)) => {
                nodes.push(child);
                Children::Many(nodes)
            }
            Some(Children::One(first)) => Children::Many(vec![*first, child]),
            _ => Children::Many(vec![child]),
        });
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    /// Set a lone child without wrapping it in a list.
    pub fn single_child(mut self, child: Node) -> Self {
        self.children = Some(Children::One(Box::new(child)));
        self
    }

    pub fn decorator(
        mut self,
        name: impl Into<String>,
        decorator: impl Fn(&DecoratorProps<'_>) -> Element + Send + Sync + 'static,
    ) -> Self {
        self.decorators.insert(name, decorator);
        self
    }

    pub fn toggle_animation(
        mut self,
        animation: impl Fn(&NodeProps<'_>) -> TransitionConfig + Send + Sync + 'static,
    ) -> Self {
        self.animations.toggle = Some(Arc::new(animation));
        self
    }

    pub fn drawer_animation(
        mut self,
        animation: impl Fn(&NodeProps<'_>) -> DrawerTransition + Send + Sync + 'static,
    ) -> Self {
        self.animations.drawer = Some(Arc::new(animation));
        self
    }

    /// Normalized children; empty when absent or malformed.
    pub fn child_nodes(&self) -> &[Node] {
        self.children.as_ref().map(Children::as_slice).unwrap_or(&[])
    }

    pub fn child_nodes_mut(&mut self) -> &mut [Node] {
        match &mut self.children {
            Some(Children::Many(nodes)) => nodes,
            Some(Children::One(node)) => std::slice::from_mut(node.as_mut()),
            _ => &mut [],
        }
    }

    /// Depth-first search for the node with `id`, this node included.
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.child_nodes().iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Node> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.child_nodes_mut()
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }

    /// Whether the node has no `children` field at all.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Key among siblings: the escaped id, or `#<index>` when the id is
    /// missing or empty.
    pub fn key(&self, index: usize) -> String {
        match self.id.as_deref() {
            Some(id) if !id.is_empty() => escape_key(id),
            _ => format!("#{index}"),
        }
    }
}
