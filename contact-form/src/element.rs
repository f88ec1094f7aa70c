use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// What a node is, for queries and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Column,
    Row,
    Heading,
    Text,
    /// Single-line text input. `text` holds the value, `label` the caption.
    Input,
    Button,
}

/// Semantic colour of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Normal,
    Muted,
    Error,
    Success,
}

#[derive(Debug, Clone)]
pub struct Element {
    pub id: String,
    pub role: Role,
    pub text: String,
    pub label: Option<String>,
    /// Stable hook for tests (`error`, `messageDisplay`, ...).
    pub test_id: Option<String>,
    pub tone: Tone,
    pub bold: bool,
    pub focusable: bool,
    /// Set by the view from the current focus, not by callers.
    pub focused: bool,
    pub children: Vec<Element>,
}

impl Element {
    fn new(prefix: &str, role: Role) -> Self {
        Self {
            id: generate_id(prefix),
            role,
            text: String::new(),
            label: None,
            test_id: None,
            tone: Tone::Normal,
            bold: false,
            focusable: false,
            focused: false,
            children: Vec::new(),
        }
    }

    pub fn col() -> Self {
        Self::new("col", Role::Column)
    }

    pub fn row() -> Self {
        Self::new("row", Role::Row)
    }

    pub fn heading(content: impl Into<String>) -> Self {
        Self {
            text: content.into(),
            bold: true,
            ..Self::new("heading", Role::Heading)
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text: content.into(),
            ..Self::new("text", Role::Text)
        }
    }

    pub fn input(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: value.into(),
            label: Some(label.into()),
            focusable: true,
            ..Self::new("input", Role::Input)
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self {
            text: label.into(),
            focusable: true,
            ..Self::new("button", Role::Button)
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// All text under this node, concatenated depth-first.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// This node and every descendant, depth-first in document order.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_descendants(self, &mut out);
        out
    }
}

fn collect_text(element: &Element, out: &mut String) {
    if element.role != Role::Input {
        out.push_str(&element.text);
    }
    for child in &element.children {
        collect_text(child, out);
    }
}

fn collect_descendants<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
    out.push(element);
    for child in &element.children {
        collect_descendants(child, out);
    }
}

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.children
        .iter()
        .find_map(|child| find_element(child, id))
}

/// IDs of focusable elements in document order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    root.descendants()
        .into_iter()
        .filter(|e| e.focusable)
        .map(|e| e.id.clone())
        .collect()
}
