use std::collections::HashMap;

use crossterm::event::MouseEvent;

use super::config::TreeConfig;
use super::data::Node;
use super::instance::{Instances, NodeInstance};
use super::render::{child_path, path_of_header, sibling_keys, RenderPass};
use crate::element::Element;
use crate::error::TreeError;
use crate::event::TreeEvent;
use crate::gesture::{GestureHost, Interactions};

/// Id of the list holding the root nodes.
pub const TREE_ID: &str = "__tree";

/// A tree of nodes with its configuration, node instances and gesture host.
///
/// The view never changes the nodes. Callbacks report what the user did;
/// the owner applies it to its data and passes the data back with
/// [`TreeView::set_data`] or [`TreeView::update`].
pub struct TreeView<H: GestureHost> {
    roots: Vec<Node>,
    config: TreeConfig,
    instances: Instances,
    host: H,
    /// Node path -> child indices from the roots, for the last render.
    paths: HashMap<String, Vec<usize>>,
}

impl<H: GestureHost> TreeView<H> {
    /// Create the view and render it once. Freshly created nodes do not
    /// attach drag handling until their first update.
    pub fn new(
        roots: impl IntoIterator<Item = Node>,
        config: TreeConfig,
        host: H,
    ) -> Result<Self, TreeError> {
        let mut view = Self {
            roots: roots.into_iter().collect(),
            config,
            instances: Instances::new(),
            host,
            paths: HashMap::new(),
        };
        view.render()?;
        Ok(view)
    }

    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn instances(&self) -> &Instances {
        &self.instances
    }

    pub fn instance(&self, path: &str) -> Option<&NodeInstance> {
        self.instances.get(path)
    }

    /// The rendered node at `path`.
    pub fn node(&self, path: &str) -> Option<&Node> {
        let (first, rest) = self.paths.get(path)?.split_first()?;
        let mut node = self.roots.get(*first)?;
        for &index in rest {
            node = node.child_nodes().get(index)?;
        }
        Some(node)
    }

    /// Paths of all rendered nodes.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.paths.keys().map(String::as_str)
    }

    /// Replace nodes and configuration, then re-render.
    pub fn update(&mut self, roots: Vec<Node>, config: TreeConfig) -> Result<Element, TreeError> {
        self.roots = roots;
        self.config = config;
        self.props_updated()
    }

    pub fn set_data(&mut self, roots: Vec<Node>) -> Result<Element, TreeError> {
        self.roots = roots;
        self.props_updated()
    }

    pub fn set_config(&mut self, config: TreeConfig) -> Result<Element, TreeError> {
        self.config = config;
        self.props_updated()
    }

    fn props_updated(&mut self) -> Result<Element, TreeError> {
        let attached = self
            .instances
            .props_updated(self.config.drag_and_drop.as_ref(), &mut self.host);
        if attached > 0 {
            log::debug!("[tree] attached drag handling to {attached} nodes");
        }
        self.render()
    }

    /// Render the whole tree and commit it to the gesture host.
    pub fn render(&mut self) -> Result<Element, TreeError> {
        let mut pass = RenderPass::new(&self.config, &self.instances);
        let keys = sibling_keys(&self.roots);
        let mut items = Vec::with_capacity(keys.len());
        for (index, (root, key)) in self.roots.iter().zip(&keys).enumerate() {
            let path = child_path(None, key);
            items.push(pass.node(root, &path, vec![index])?);
        }
        let rendered = pass.finish();

        let tree = Element::list()
            .id(TREE_ID)
            .style(self.config.style.tree.clone())
            .children(items);

        self.host.commit(&tree);
        self.instances
            .sync(rendered.iter().map(|node| node.path.as_str()), &mut self.host);
        self.paths = rendered
            .into_iter()
            .map(|node| (node.path, node.indices))
            .collect();

        Ok(tree)
    }

    /// Route an event to the callbacks. Returns whether it was handled.
    pub fn dispatch(&mut self, event: &TreeEvent) -> bool {
        match event {
            TreeEvent::Click { target } => {
                let Some(node) = path_of_header(target).and_then(|path| self.node(path)) else {
                    return false;
                };
                match &self.config.on_toggle {
                    Some(on_toggle) => {
                        on_toggle(node, !node.toggled);
                        true
                    }
                    None => false,
                }
            }
            TreeEvent::DragMove(drag) => {
                let Some(drag_and_drop) = self.config.drag_and_drop.as_ref() else {
                    return false;
                };
                let Some(instance) = self
                    .instances
                    .get_mut(&drag.target)
                    .filter(|instance| instance.is_mounted())
                else {
                    log::trace!("[tree] drag on unmounted {}", drag.target);
                    return false;
                };
                let offset = instance.drag_moved(drag.dx, drag.dy);
                log::trace!("[tree] {} moved to {offset}", drag.target);
                if let Some(on_move) = &drag_and_drop.on_move {
                    on_move(drag);
                }
                true
            }
            TreeEvent::DragEnd(drag) => {
                let Some(drag_and_drop) = self.config.drag_and_drop.as_ref() else {
                    return false;
                };
                if !self
                    .instances
                    .get(&drag.target)
                    .is_some_and(NodeInstance::is_mounted)
                {
                    return false;
                }
                (drag_and_drop.on_end)(drag);
                true
            }
        }
    }
}

impl TreeView<Interactions> {
    /// Feed a terminal mouse event through the gesture host and dispatch
    /// whatever it produces.
    pub fn handle_mouse(
        &mut self,
        event: &MouseEvent,
        hit: impl Fn(u16, u16) -> Option<String>,
    ) -> bool {
        match self.host.handle_mouse(event, hit) {
            Some(event) => self.dispatch(&event),
            None => false,
        }
    }
}
