use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::transitions::{DrawerTransition, TransitionConfig};
use crate::types::{Direction, Style, Tag, Translate};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,
    /// Selector class, used to mark draggable node roots.
    pub class: Option<String>,

    // Content
    pub content: Content,
    pub direction: Direction,

    // Visual
    pub style: Style,
    pub transform: Option<Translate>,
    /// Transition played when a property of this element changes.
    pub transition: Option<TransitionConfig>,
    /// Enter/leave animation for the children of a `Tag::Transition` element.
    pub drawer: Option<DrawerTransition>,

    // Interaction
    pub clickable: bool,
    pub draggable: bool,

    // Custom data storage (data-* attributes)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Box,
            class: None,
            content: Content::None,
            direction: Direction::Column,
            style: Style::default(),
            transform: None,
            transition: None,
            drawer: None,
            clickable: false,
            draggable: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            tag: Tag::Text,
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            tag: Tag::Row,
            direction: Direction::Row,
            ..Default::default()
        }
    }

    pub fn list() -> Self {
        Self {
            id: generate_id("list"),
            tag: Tag::List,
            ..Default::default()
        }
    }

    pub fn list_item() -> Self {
        Self {
            id: generate_id("item"),
            tag: Tag::ListItem,
            ..Default::default()
        }
    }

    /// A region animating its children in and out with `drawer`.
    pub fn transition_group(drawer: DrawerTransition) -> Self {
        Self {
            id: generate_id("transition"),
            tag: Tag::Transition,
            drawer: Some(drawer),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn transform(mut self, transform: Translate) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn transition(mut self, transition: TransitionConfig) -> Self {
        self.transition = Some(transition);
        self
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Child elements, empty for text and empty elements.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Text content, if this is a text element.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }
}
