//! Named rendering overrides for parts of a tree node.
//!
//! A tree carries one global [`Decorators`] set and every node may carry its
//! own; for a node's own rendering the two are merged with the node's entries
//! winning. Children start again from the global set.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::element::Element;
use crate::transitions::TransitionConfig;
use crate::tree::Node;
use crate::types::Style;

/// Placeholder row shown while a node's children are loading.
pub const LOADING: &str = "Loading";
/// Expand/collapse indicator in a header.
pub const TOGGLE: &str = "Toggle";
/// Label of a header.
pub const HEADER: &str = "Header";

/// Inputs handed to a decorator.
pub struct DecoratorProps<'a> {
    pub node: &'a Node,
    pub style: &'a Style,
    /// Transition resolved for this part, when animations are enabled.
    pub transition: Option<&'a TransitionConfig>,
}

pub type Decorator = Arc<dyn Fn(&DecoratorProps<'_>) -> Element + Send + Sync>;

#[derive(Clone, Default)]
pub struct Decorators {
    entries: BTreeMap<String, Decorator>,
}

impl Decorators {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in `Loading`, `Toggle` and `Header` decorators.
    pub fn with_defaults() -> Self {
        Self::new()
            .with(LOADING, |props| {
                Element::text("loading...").style(props.style.clone())
            })
            .with(TOGGLE, |props| {
                let glyph = if props.node.toggled { "▾" } else { "▸" };
                let toggle = Element::text(glyph).style(props.style.clone());
                match props.transition {
                    Some(transition) => toggle.transition(*transition),
                    None => toggle,
                }
            })
            .with(HEADER, |props| {
                Element::text(props.node.name.clone()).style(props.style.clone())
            })
    }

    pub fn with(
        mut self,
        name: impl Into<String>,
        decorator: impl Fn(&DecoratorProps<'_>) -> Element + Send + Sync + 'static,
    ) -> Self {
        self.insert(name, decorator);
        self
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        decorator: impl Fn(&DecoratorProps<'_>) -> Element + Send + Sync + 'static,
    ) {
        self.entries.insert(name.into(), Arc::new(decorator));
    }

    pub fn get(&self, name: &str) -> Option<&Decorator> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `self` overlaid with `overrides`; entries of `overrides` win.
    pub fn merged(&self, overrides: &Decorators) -> Decorators {
        let mut entries = self.entries.clone();
        for (name, decorator) in &overrides.entries {
            entries.insert(name.clone(), Arc::clone(decorator));
        }
        Decorators { entries }
    }
}

impl fmt::Debug for Decorators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
