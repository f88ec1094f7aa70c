//! Lays an element tree out as styled text lines.
//!
//! Columns stack their children vertically with a blank line between field
//! groups; rows join their children on one line separated by a space.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::element::{Element, Role, Tone};

/// Columns reserved for the label in front of an input box.
const LABEL_WIDTH: usize = 13;
/// Minimum inner width of an input box.
const INPUT_WIDTH: usize = 32;

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
    pub bold: bool,
    /// Drawn with swapped colours (focused input or button).
    pub reverse: bool,
}

impl Span {
    fn plain(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
            bold: false,
            reverse: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// Display width in terminal columns.
    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| s.text.width()).sum()
    }

    /// The line's text without styling.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Cut the line so it fits in `max` columns.
    fn truncate(&mut self, max: usize) {
        let mut used = 0;
        let mut keep = 0;
        for span in &mut self.spans {
            if used >= max {
                break;
            }
            let mut cut = String::new();
            for ch in span.text.chars() {
                let w = ch.width().unwrap_or(0);
                if used + w > max {
                    break;
                }
                used += w;
                cut.push(ch);
            }
            span.text = cut;
            keep += 1;
        }
        self.spans.truncate(keep);
    }
}

/// Render `root` into lines no wider than `width` columns.
pub fn render_lines(root: &Element, width: u16) -> Vec<Line> {
    let mut lines = Vec::new();
    render_node(root, &mut lines);
    for line in &mut lines {
        line.truncate(width as usize);
    }
    lines
}

fn render_node(element: &Element, lines: &mut Vec<Line>) {
    match element.role {
        Role::Column => {
            for (i, child) in element.children.iter().enumerate() {
                if i > 0 && child.role == Role::Column {
                    lines.push(Line::default());
                }
                render_node(child, lines);
            }
        }
        Role::Row => {
            let mut line = Line::default();
            for (i, child) in element.children.iter().enumerate() {
                if i > 0 {
                    line.push(Span::plain(" ", Tone::Normal));
                }
                line.push(text_span(child));
            }
            lines.push(line);
        }
        Role::Heading => {
            lines.push(Line {
                spans: vec![text_span(element)],
            });
            lines.push(Line::default());
        }
        Role::Text => lines.push(Line {
            spans: vec![text_span(element)],
        }),
        Role::Input => lines.push(input_line(element)),
        Role::Button => {
            lines.push(Line::default());
            lines.push(Line {
                spans: vec![Span {
                    text: format!("[ {} ]", element.text),
                    tone: Tone::Normal,
                    bold: true,
                    reverse: element.focused,
                }],
            });
        }
    }
}

fn text_span(element: &Element) -> Span {
    Span {
        text: element.text.clone(),
        tone: element.tone,
        bold: element.bold,
        reverse: false,
    }
}

fn input_line(element: &Element) -> Line {
    let label = element.label.as_deref().unwrap_or_default();
    let pad = LABEL_WIDTH.saturating_sub(label.width());
    let fill = INPUT_WIDTH.saturating_sub(element.text.width());

    let mut line = Line::default();
    line.push(Span::plain(format!("{label}{}", " ".repeat(pad)), Tone::Muted));
    line.push(Span {
        text: format!(" {}{} ", element.text, "_".repeat(fill)),
        tone: element.tone,
        bold: false,
        reverse: element.focused,
    });
    line
}
