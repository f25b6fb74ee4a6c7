//! The recursive tree node component and the view owning a whole tree.

pub mod animations;
mod config;
mod data;
mod header;
pub mod instance;
pub mod render;
mod view;

pub use animations::{AnimationOverrides, AnimationSet, Animations, ResolvedAnimations};
pub use config::{
    DragAndDrop, DragCallback, NodeProps, ToggleCallback, TreeConfig, DEFAULT_NODE_SELECTOR,
};
pub use data::{Children, Node};
pub use header::{DefaultHeader, HeaderProps, NodeHeader};
pub use instance::{GestureMount, Instances, NodeInstance};
pub use render::{render, RenderPass, RenderedNode};
pub use view::{TreeView, TREE_ID};
