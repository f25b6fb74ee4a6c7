use crate::decorators::{DecoratorProps, Decorators, HEADER, TOGGLE};
use crate::element::Element;
use crate::types::TreeStyle;

use super::animations::ResolvedAnimations;
use super::data::Node;

/// What a header gets to render from.
pub struct HeaderProps<'a> {
    /// Decorators merged for this node.
    pub decorators: &'a Decorators,
    pub animations: Option<&'a ResolvedAnimations>,
    pub style: &'a TreeStyle,
    pub node: &'a Node,
    /// Id the clickable part of the header must carry. Clicks on it toggle
    /// the node.
    pub on_click: &'a str,
}

/// Renders the row shown for a node above its children.
pub trait NodeHeader: Send + Sync {
    fn render(&self, props: &HeaderProps<'_>) -> Element;
}

/// Toggle indicator for inner nodes followed by the node label.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHeader;

impl NodeHeader for DefaultHeader {
    fn render(&self, props: &HeaderProps<'_>) -> Element {
        let style = if props.node.active {
            &props.style.active
        } else {
            &props.style.header
        };

        let mut row = Element::row()
            .id(props.on_click)
            .style(style.clone())
            .clickable(true);

        if !props.node.is_leaf() {
            if let Some(toggle) = props.decorators.get(TOGGLE) {
                row = row.child(toggle(&DecoratorProps {
                    node: props.node,
                    style,
                    transition: props.animations.map(|a| &a.toggle),
                }));
            }
        }

        let label = match props.decorators.get(HEADER) {
            Some(header) => header(&DecoratorProps {
                node: props.node,
                style,
                transition: None,
            }),
            None => Element::text(props.node.name.clone()).style(style.clone()),
        };
        row.child(label)
    }
}
