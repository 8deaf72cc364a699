//! Layout Blocks - Engine-Agnostic Renderables
//!
//! The section renderers produce these; the render stage turns them into
//! `genpdf` elements. Keeping the block model serializable lets the content
//! digest cover exactly what would be laid out.

use serde::{Deserialize, Serialize};

/// One renderable unit, consumed in order by the layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutBlock {
    Text(TextBlock),
    /// Heading row: flexible left column, narrower right column for
    /// dates and locations.
    TwoColumn { left: TextBlock, right: TextBlock },
    /// Vertical gap in points.
    Spacer(f32),
    /// Full-width hairline under a section heading.
    Rule,
}

/// Style role of a text block. The render stage maps each class to a
/// concrete font family, size, and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextClass {
    /// Candidate name, 16pt bold.
    Name,
    /// Uppercase section heading, 12pt accent bold.
    SectionHeader,
    /// Entry title line, 11pt accent.
    EntryHeader,
    /// 10pt body copy.
    Body,
    /// Centered contact lines under the name.
    Contact,
    /// 10pt gray metadata (dates, locations, institutions).
    Detail,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub class: TextClass,
    pub align: HAlign,
    pub spans: Vec<Span>,
}

/// A run of text with a single weight. Bold spans render in the bold
/// variant of the class's font family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    #[serde(default)]
    pub bold: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

impl TextBlock {
    pub fn plain(class: TextClass, text: impl Into<String>) -> Self {
        Self::from_spans(class, vec![Span::plain(text)])
    }

    pub fn bold(class: TextClass, text: impl Into<String>) -> Self {
        Self::from_spans(class, vec![Span::bold(text)])
    }

    pub fn from_spans(class: TextClass, spans: Vec<Span>) -> Self {
        Self {
            class,
            align: HAlign::Left,
            spans,
        }
    }

    pub fn centered(mut self) -> Self {
        self.align = HAlign::Center;
        self
    }

    pub fn right_aligned(mut self) -> Self {
        self.align = HAlign::Right;
        self
    }

    /// Concatenated span text, without style information.
    pub fn content(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl LayoutBlock {
    /// Visible text of the block, if it carries any. Spacers and rules
    /// yield nothing.
    pub fn content(&self) -> Option<String> {
        match self {
            LayoutBlock::Text(block) => Some(block.content()),
            LayoutBlock::TwoColumn { left, right } => {
                Some(format!("{} {}", left.content(), right.content()))
            }
            LayoutBlock::Spacer(_) | LayoutBlock::Rule => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_flattens_spans() {
        let block = TextBlock::from_spans(
            TextClass::Body,
            vec![Span::bold("Rust: "), Span::plain("serde, clap")],
        );
        assert_eq!(block.content(), "Rust: serde, clap");
    }

    #[test]
    fn spacers_and_rules_carry_no_text() {
        assert_eq!(LayoutBlock::Spacer(4.0).content(), None);
        assert_eq!(LayoutBlock::Rule.content(), None);
    }
}
