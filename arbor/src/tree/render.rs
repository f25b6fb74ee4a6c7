//! Rendering nodes into elements.

use std::collections::HashSet;

use super::config::{NodeProps, TreeConfig};
use super::data::Node;
use super::header::HeaderProps;
use super::instance::Instances;
use crate::decorators::{DecoratorProps, Decorators, LOADING};
use crate::element::Element;
use crate::error::TreeError;
use crate::tree::animations::ResolvedAnimations;

const PATH_SEPARATOR: char = '/';
const HEADER_SUFFIX: &str = ":header";
const DRAWER_SUFFIX: &str = ":drawer";
const SUBTREE_SUFFIX: &str = ":subtree";

/// Path of the child with `key` under `parent`; roots have no parent.
pub fn child_path(parent: Option<&str>, key: &str) -> String {
    match parent {
        Some(parent) => format!("{parent}{PATH_SEPARATOR}{key}"),
        None => key.to_string(),
    }
}

/// Id of the clickable header of the node at `path`.
pub fn header_id(path: &str) -> String {
    format!("{path}{HEADER_SUFFIX}")
}

/// Node path of a header id.
pub fn path_of_header(id: &str) -> Option<&str> {
    id.strip_suffix(HEADER_SUFFIX)
}

pub fn drawer_id(path: &str) -> String {
    format!("{path}{DRAWER_SUFFIX}")
}

pub fn subtree_id(path: &str) -> String {
    format!("{path}{SUBTREE_SUFFIX}")
}

/// Path keys of a list of siblings. Keys that repeat get the position of
/// the later sibling appended, so every sibling keeps its own path.
pub fn sibling_keys(nodes: &[Node]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(nodes.len());
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let key = node.key(index);
            if seen.insert(key.clone()) {
                return key;
            }
            log::warn!("[render] duplicate sibling key '{key}' at position {index}");
            let unique = format!("{key}~{index}");
            seen.insert(unique.clone());
            unique
        })
        .collect()
}

/// Render a single node tree without any instance state.
pub fn render(node: &Node, config: &TreeConfig) -> Result<Element, TreeError> {
    let instances = Instances::new();
    RenderPass::new(config, &instances).node(node, &node.key(0), Vec::new())
}

/// A node that ended up in the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNode {
    pub path: String,
    /// Position of the node, as child indices starting from the roots.
    pub indices: Vec<usize>,
}

/// One walk over a tree. Collects which nodes were rendered.
pub struct RenderPass<'a> {
    config: &'a TreeConfig,
    instances: &'a Instances,
    rendered: Vec<RenderedNode>,
}

impl<'a> RenderPass<'a> {
    pub fn new(config: &'a TreeConfig, instances: &'a Instances) -> Self {
        Self {
            config,
            instances,
            rendered: Vec::new(),
        }
    }

    /// Nodes rendered so far, parents before children.
    pub fn finish(self) -> Vec<RenderedNode> {
        self.rendered
    }

    /// Render `node` as a list item with its header and drawer.
    pub fn node(
        &mut self,
        node: &Node,
        path: &str,
        indices: Vec<usize>,
    ) -> Result<Element, TreeError> {
        let config = self.config;
        let props = NodeProps::new(node, config);
        log::trace!("[render] {path}: {props:?}");

        let decorators = config.decorators.merged(&node.decorators);
        let animations = config.animations.resolve(&props);

        let mut item = Element::list_item()
            .id(path)
            .style(config.style.base.clone());
        if let Some(drag_and_drop) = &config.drag_and_drop {
            item = item
                .class(drag_and_drop.node_selector.clone())
                .draggable(true);
        }
        if let Some(offset) = self.instances.offset(path) {
            item = item
                .transform(offset)
                .data("data-x", offset.x.to_string())
                .data("data-y", offset.y.to_string());
        }

        self.rendered.push(RenderedNode {
            path: path.to_string(),
            indices: indices.clone(),
        });

        let header = config.header.render(&HeaderProps {
            decorators: &decorators,
            animations: animations.as_ref(),
            style: &config.style,
            node,
            on_click: &header_id(path),
        });
        item = item.child(header);

        match self.drawer(node, path, &indices, &decorators, animations.as_ref())? {
            Some(drawer) => Ok(item.child(drawer)),
            None => Ok(item),
        }
    }

    fn drawer(
        &mut self,
        node: &Node,
        path: &str,
        indices: &[usize],
        decorators: &Decorators,
        animations: Option<&ResolvedAnimations>,
    ) -> Result<Option<Element>, TreeError> {
        match (animations, node.toggled) {
            (None, false) => Ok(None),
            (None, true) => self.children(node, path, indices, decorators).map(Some),
            (Some(animations), toggled) => {
                let group = Element::transition_group(animations.drawer).id(drawer_id(path));
                if toggled {
                    let children = self.children(node, path, indices, decorators)?;
                    Ok(Some(group.child(children)))
                } else {
                    Ok(Some(group))
                }
            }
        }
    }

    fn children(
        &mut self,
        node: &Node,
        path: &str,
        indices: &[usize],
        decorators: &Decorators,
    ) -> Result<Element, TreeError> {
        let config = self.config;
        let style = &config.style;
        let list = Element::list()
            .id(subtree_id(path))
            .style(style.subtree.clone());

        if node.loading {
            let loading = decorators
                .get(LOADING)
                .ok_or_else(|| TreeError::MissingDecorator {
                    name: LOADING.to_string(),
                    node: path.to_string(),
                })?;
            let row = loading(&DecoratorProps {
                node,
                style: &style.loading,
                transition: None,
            });
            return Ok(list.child(Element::list_item().child(row)));
        }

        let keys = sibling_keys(node.child_nodes());
        let mut items = Vec::with_capacity(keys.len());
        for (index, (child, key)) in node.child_nodes().iter().zip(&keys).enumerate() {
            let mut child_indices = indices.to_vec();
            child_indices.push(index);
            let key_path = child_path(Some(path), key);
            items.push(self.node(child, &key_path, child_indices)?);
        }
        Ok(list.children(items))
    }
}
