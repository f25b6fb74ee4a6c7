use crossterm::style::Color;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
    /// Left padding in cells.
    pub indent: u16,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn indent(mut self, indent: u16) -> Self {
        self.indent = indent;
        self
    }
}

/// Style regions of a tree view. The same value is handed to every level
/// of the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeStyle {
    /// Top-level list holding the root nodes.
    pub tree: Style,
    /// List item of every node.
    pub base: Style,
    /// List holding a node's children.
    pub subtree: Style,
    /// Placeholder row shown while a node is loading.
    pub loading: Style,
    /// Header row.
    pub header: Style,
    /// Header row of an active node.
    pub active: Style,
}

impl Default for TreeStyle {
    fn default() -> Self {
        Self {
            tree: Style::new(),
            base: Style::new(),
            subtree: Style::new().indent(2),
            loading: Style::new().foreground(Color::DarkGrey).italic(),
            header: Style::new(),
            active: Style::new().background(Color::DarkBlue).bold(),
        }
    }
}

impl TreeStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tree(mut self, style: Style) -> Self {
        self.tree = style;
        self
    }

    pub fn base(mut self, style: Style) -> Self {
        self.base = style;
        self
    }

    pub fn subtree(mut self, style: Style) -> Self {
        self.subtree = style;
        self
    }

    pub fn loading(mut self, style: Style) -> Self {
        self.loading = style;
        self
    }

    pub fn header(mut self, style: Style) -> Self {
        self.header = style;
        self
    }

    pub fn active(mut self, style: Style) -> Self {
        self.active = style;
        self
    }
}
