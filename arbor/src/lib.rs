pub mod decorators;
pub mod element;
pub mod error;
pub mod event;
pub mod gesture;
pub mod transitions;
pub mod tree;
pub mod types;

pub use decorators::{Decorator, DecoratorProps, Decorators};
pub use element::Element;
pub use error::{GestureError, TreeError};
pub use event::{DragEvent, MouseButton, TreeEvent};
pub use gesture::{DraggableOptions, GestureHost, Interactions};
pub use transitions::{DrawerTransition, Easing, Effect, TransitionConfig};
pub use tree::{
    render, AnimationSet, Animations, Children, DefaultHeader, DragAndDrop, GestureMount,
    HeaderProps, Node, NodeHeader, NodeProps, TreeConfig, TreeView,
};
pub use types::*;
