//! Attaching drag behavior to rendered elements.
//!
//! A [`GestureHost`] sits between the rendered element tree and the input
//! source. [`Interactions`] is the host used with terminal input: it turns
//! crossterm mouse events into [`TreeEvent`]s for the elements it knows.

use std::collections::{HashMap, HashSet};

use crossterm::event::{MouseButton as CtButton, MouseEvent, MouseEventKind};

use crate::element::{walk, Element};
use crate::error::GestureError;
use crate::event::{DragEvent, MouseButton, TreeEvent};

/// Options for a draggable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraggableOptions {
    /// Keep moving after release, following the throw.
    pub inertia: bool,
    /// Scroll the container when dragging near its edge.
    pub auto_scroll: bool,
}

impl Default for DraggableOptions {
    fn default() -> Self {
        Self {
            inertia: true,
            auto_scroll: true,
        }
    }
}

pub trait GestureHost {
    /// Called with every rendered tree once it is in place.
    fn commit(&mut self, _root: &Element) {}

    /// Make `target` draggable. Fails when the element is not committed yet.
    fn attach_draggable(
        &mut self,
        target: &str,
        options: DraggableOptions,
    ) -> Result<(), GestureError>;

    fn detach(&mut self, _target: &str) {}
}

#[derive(Debug, Clone)]
struct Press {
    target: String,
    draggable: Option<String>,
    last: (u16, u16),
    moved: bool,
}

/// Gesture host fed by crossterm mouse events.
#[derive(Debug, Default)]
pub struct Interactions {
    mounted: HashSet<String>,
    clickable: HashSet<String>,
    parents: HashMap<String, String>,
    draggables: HashMap<String, DraggableOptions>,
    press: Option<Press>,
}

impl Interactions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self, id: &str) -> bool {
        self.mounted.contains(id)
    }

    pub fn is_draggable(&self, id: &str) -> bool {
        self.draggables.contains_key(id)
    }

    pub fn options(&self, id: &str) -> Option<DraggableOptions> {
        self.draggables.get(id).copied()
    }

    /// Whether a press is in progress.
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// `id` and its ancestors, innermost first.
    fn ancestors<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        std::iter::successors(Some(id), move |current| {
            self.parents.get(*current).map(String::as_str)
        })
    }

    fn draggable_for(&self, id: &str) -> Option<String> {
        self.ancestors(id)
            .find(|candidate| self.is_draggable(candidate))
            .map(str::to_string)
    }

    fn clickable_for(&self, id: &str) -> Option<String> {
        self.ancestors(id)
            .find(|candidate| self.clickable.contains(*candidate))
            .map(str::to_string)
    }

    /// Translate a mouse event. `hit` finds the element under a cell.
    pub fn handle_mouse(
        &mut self,
        event: &MouseEvent,
        hit: impl Fn(u16, u16) -> Option<String>,
    ) -> Option<TreeEvent> {
        let (col, row) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(CtButton::Left) => {
                let target = hit(col, row)?;
                let draggable = self.draggable_for(&target);
                log::trace!("[gesture] press on {target}, draggable {draggable:?}");
                self.press = Some(Press {
                    target,
                    draggable,
                    last: (col, row),
                    moved: false,
                });
                None
            }
            MouseEventKind::Drag(button @ CtButton::Left) => {
                let press = self.press.as_mut()?;
                let dx = f64::from(col) - f64::from(press.last.0);
                let dy = f64::from(row) - f64::from(press.last.1);
                if dx == 0.0 && dy == 0.0 {
                    return None;
                }
                // A press that moved is never a click, draggable or not.
                press.last = (col, row);
                press.moved = true;
                let target = press.draggable.clone()?;
                Some(TreeEvent::DragMove(DragEvent {
                    target,
                    x: f64::from(col),
                    y: f64::from(row),
                    dx,
                    dy,
                    button: MouseButton::from(button),
                }))
            }
            MouseEventKind::Up(button @ CtButton::Left) => {
                let press = self.press.take()?;
                if press.moved {
                    let target = press.draggable?;
                    log::debug!("[gesture] drag of {target} ended at ({col}, {row})");
                    return Some(TreeEvent::DragEnd(DragEvent {
                        target,
                        x: f64::from(col),
                        y: f64::from(row),
                        dx: 0.0,
                        dy: 0.0,
                        button: MouseButton::from(button),
                    }));
                }
                self.clickable_for(&press.target)
                    .map(|target| TreeEvent::Click { target })
            }
            _ => None,
        }
    }
}

impl GestureHost for Interactions {
    fn commit(&mut self, root: &Element) {
        self.mounted.clear();
        self.clickable.clear();
        self.parents.clear();
        walk(root, &mut |element, parent| {
            self.mounted.insert(element.id.clone());
            if element.clickable {
                self.clickable.insert(element.id.clone());
            }
            if let Some(parent) = parent {
                self.parents.insert(element.id.clone(), parent.id.clone());
            }
        });
        let mounted = &self.mounted;
        self.draggables.retain(|id, _| mounted.contains(id));
    }

    fn attach_draggable(
        &mut self,
        target: &str,
        options: DraggableOptions,
    ) -> Result<(), GestureError> {
        if !self.mounted.contains(target) {
            return Err(GestureError::TargetNotMounted(target.to_string()));
        }
        self.draggables.insert(target.to_string(), options);
        Ok(())
    }

    fn detach(&mut self, target: &str) {
        self.draggables.remove(target);
    }
}
