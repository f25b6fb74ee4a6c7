/// Events routed to a tree view, targeted at element ids.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeEvent {
    /// Mouse click on an element.
    Click { target: String },
    /// A draggable element moved.
    DragMove(DragEvent),
    /// A drag gesture finished.
    DragEnd(DragEvent),
}

/// A pointer drag step on a draggable element.
#[derive(Debug, Clone, PartialEq)]
pub struct DragEvent {
    /// Id of the dragged element.
    pub target: String,
    /// Pointer position.
    pub x: f64,
    pub y: f64,
    /// Movement since the previous event of the same gesture.
    pub dx: f64,
    pub dy: f64,
    pub button: MouseButton,
}

impl DragEvent {
    pub fn new(target: impl Into<String>, dx: f64, dy: f64) -> Self {
        Self {
            target: target.into(),
            x: 0.0,
            y: 0.0,
            dx,
            dy,
            button: MouseButton::Left,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl TreeEvent {
    pub fn target(&self) -> &str {
        match self {
            TreeEvent::Click { target } => target,
            TreeEvent::DragMove(event) | TreeEvent::DragEnd(event) => &event.target,
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
