//! Rendering - Single Entry Point
//!
//! `Generator` owns the loaded typefaces and drives the layout engine:
//! assemble blocks, convert them to `genpdf` elements, paginate, write.
//! A failure at any stage aborts the run.

use std::path::Path;

use genpdf::elements::{Break, Paragraph, TableLayout};
use genpdf::fonts::{Font, FontFamily};
use genpdf::render::Area;
use genpdf::style::{Color, LineStyle, Style};
use genpdf::{
    Alignment, Context, Document, Element, Margins, Mm, PaperSize, Position, RenderResult,
    SimplePageDecorator, Size,
};

use crate::blocks::{HAlign, LayoutBlock, TextBlock, TextClass};
use crate::error::GeneratorError;
use crate::record::ResumeRecord;
use crate::sections;
use crate::typeface::TypefaceSet;

/// Page geometry in millimeters: Letter paper, 1in side margins, 0.1in
/// top, 0.5in bottom.
const MARGIN_TOP: f64 = 2.54;
const MARGIN_SIDE: f64 = 25.4;
const MARGIN_BOTTOM: f64 = 12.7;

const BODY_SIZE: u8 = 10;
/// Body leading in points; spacers are specified in points and converted
/// to line-relative breaks.
const BODY_LEADING: f64 = 12.0;

const DETAIL_GRAY: Color = Color::Rgb(128, 128, 128);

pub struct Generator {
    typefaces: TypefaceSet,
}

impl Generator {
    pub fn new(typefaces: TypefaceSet) -> Self {
        Self { typefaces }
    }

    /// Pure assembly: the record's block sequence in document order.
    pub fn assemble(&self, record: &ResumeRecord) -> Vec<LayoutBlock> {
        sections::assemble(record)
    }

    /// Build the laid-out document without writing it.
    pub fn document(&self, record: &ResumeRecord) -> Result<Document, GeneratorError> {
        let blocks = self.assemble(record);

        let mut doc = Document::new(self.typefaces.body.clone());
        let accent = doc.add_font_family(self.typefaces.accent.clone());

        if let Some(basics) = &record.basics {
            if !basics.name.is_empty() {
                doc.set_title(basics.name.clone());
            }
        }
        doc.set_paper_size(PaperSize::Letter);
        doc.set_font_size(BODY_SIZE);

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(Margins::trbl(
            MARGIN_TOP,
            MARGIN_SIDE,
            MARGIN_BOTTOM,
            MARGIN_SIDE,
        ));
        doc.set_page_decorator(decorator);

        for block in blocks {
            push_block(&mut doc, accent, block)?;
        }
        Ok(doc)
    }

    /// Assemble, paginate, and write one PDF file.
    pub fn render_to_file(&self, record: &ResumeRecord, path: &Path) -> Result<(), GeneratorError> {
        self.document(record)?
            .render_to_file(path)
            .map_err(GeneratorError::Render)
    }
}

fn push_block(
    doc: &mut Document,
    accent: FontFamily<Font>,
    block: LayoutBlock,
) -> Result<(), GeneratorError> {
    match block {
        LayoutBlock::Text(text) => doc.push(paragraph(&text, accent)),
        LayoutBlock::TwoColumn { left, right } => {
            // Flexible title column, narrower metadata column. No cell
            // decorator, so the table draws no frames.
            let mut table = TableLayout::new(vec![2, 1]);
            table
                .row()
                .element(paragraph(&left, accent))
                .element(paragraph(&right, accent))
                .push()
                .map_err(GeneratorError::Render)?;
            doc.push(table);
        }
        LayoutBlock::Spacer(points) => {
            doc.push(Break::new(f64::from(points) / BODY_LEADING));
        }
        LayoutBlock::Rule => doc.push(HorizontalRule::default()),
    }
    Ok(())
}

fn paragraph(block: &TextBlock, accent: FontFamily<Font>) -> Paragraph {
    let base = base_style(block.class, accent);
    let mut paragraph = Paragraph::default();
    for span in &block.spans {
        let style = if span.bold { base.bold() } else { base };
        paragraph.push_styled(span.text.clone(), style);
    }
    paragraph.aligned(alignment(block.align))
}

fn base_style(class: TextClass, accent: FontFamily<Font>) -> Style {
    match class {
        TextClass::Name => Style::new().with_font_size(16).bold(),
        TextClass::SectionHeader => Style::new()
            .with_font_family(accent)
            .with_font_size(12)
            .bold(),
        TextClass::EntryHeader => Style::new().with_font_family(accent).with_font_size(11),
        TextClass::Body | TextClass::Contact => Style::new().with_font_size(BODY_SIZE),
        TextClass::Detail => Style::new().with_font_size(BODY_SIZE).with_color(DETAIL_GRAY),
    }
}

fn alignment(align: HAlign) -> Alignment {
    match align {
        HAlign::Left => Alignment::Left,
        HAlign::Center => Alignment::Center,
        HAlign::Right => Alignment::Right,
    }
}

/// Full-width hairline, the `genpdf` counterpart of a horizontal rule
/// flowable.
#[derive(Debug, Clone, Copy)]
struct HorizontalRule {
    thickness: Mm,
}

impl Default for HorizontalRule {
    fn default() -> Self {
        // ~0.5pt
        Self {
            thickness: Mm::from(0.18),
        }
    }
}

impl Element for HorizontalRule {
    fn render(
        &mut self,
        _context: &Context,
        area: Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, genpdf::error::Error> {
        let width = area.size().width;
        area.draw_line(
            vec![Position::new(0.0, 0.0), Position::new(width, 0.0)],
            LineStyle::new().with_thickness(self.thickness),
        );
        Ok(RenderResult {
            size: Size::new(width, 0.4),
            has_more: false,
        })
    }
}
