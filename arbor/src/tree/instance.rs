//! Per-node state that outlives a single render.

use std::collections::HashMap;

use super::config::DragAndDrop;
use crate::gesture::{DraggableOptions, GestureHost};
use crate::types::Translate;

/// Whether drag handling has been attached to a node's root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureMount {
    #[default]
    Unmounted,
    Mounted,
}

/// State of one rendered node.
#[derive(Debug, Clone, Default)]
pub struct NodeInstance {
    mount: GestureMount,
    offset: Translate,
    moved: bool,
}

impl NodeInstance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount_state(&self) -> GestureMount {
        self.mount
    }

    pub fn is_mounted(&self) -> bool {
        self.mount == GestureMount::Mounted
    }

    /// Accumulated drag offset.
    pub fn offset(&self) -> Translate {
        self.offset
    }

    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Called whenever the node receives new props. Until drag handling is
    /// attached, every call tries to attach it to `target`; returns true on
    /// the call that succeeds.
    pub fn props_updated(
        &mut self,
        target: &str,
        drag_and_drop: Option<&DragAndDrop>,
        host: &mut dyn GestureHost,
    ) -> bool {
        if self.is_mounted() || drag_and_drop.is_none() {
            return false;
        }

        match host.attach_draggable(target, DraggableOptions::default()) {
            Ok(()) => {
                log::debug!("[gesture] {target} mounted");
                self.mount = GestureMount::Mounted;
                true
            }
            Err(e) => {
                log::debug!("[gesture] {target} not mounted yet: {e}");
                false
            }
        }
    }

    /// Add a drag step to the offset and return the new offset.
    pub fn drag_moved(&mut self, dx: f64, dy: f64) -> Translate {
        self.offset = Translate::new(self.offset.x + dx, self.offset.y + dy);
        self.moved = true;
        self.offset
    }
}

/// Instances of all rendered nodes, keyed by node path.
#[derive(Debug, Default)]
pub struct Instances {
    nodes: HashMap<String, NodeInstance>,
}

impl Instances {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&NodeInstance> {
        self.nodes.get(path)
    }

    pub fn get_mut(&mut self, path: &str) -> Option<&mut NodeInstance> {
        self.nodes.get_mut(path)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drag offset to render for `path`, once the node has been dragged.
    pub fn offset(&self, path: &str) -> Option<Translate> {
        self.nodes
            .get(path)
            .filter(|instance| instance.has_moved())
            .map(NodeInstance::offset)
    }

    /// Deliver a props update to every existing instance. Returns how many
    /// attached drag handling on this update.
    pub fn props_updated(
        &mut self,
        drag_and_drop: Option<&DragAndDrop>,
        host: &mut dyn GestureHost,
    ) -> usize {
        let mut attached = 0;
        for (path, instance) in &mut self.nodes {
            if instance.props_updated(path, drag_and_drop, host) {
                attached += 1;
            }
        }
        attached
    }

    /// Match instances to the nodes of the latest render: new paths get a
    /// fresh instance, paths no longer rendered are dropped.
    pub fn sync<'a>(
        &mut self,
        rendered: impl IntoIterator<Item = &'a str>,
        host: &mut dyn GestureHost,
    ) {
        let mut next = HashMap::with_capacity(self.nodes.len());
        for path in rendered {
            let instance = self.nodes.remove(path).unwrap_or_default();
            next.insert(path.to_string(), instance);
        }
        for (path, instance) in self.nodes.drain() {
            if instance.is_mounted() {
                host.detach(&path);
            }
            log::trace!("[gesture] dropped instance {path}");
        }
        self.nodes = next;
    }
}
