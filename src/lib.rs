//! ResumePress Core - Data-Driven Resume Compiler
//!
//! Reads a JSON Resume record, maps each populated section to an ordered
//! run of layout blocks, and hands the blocks to `genpdf` for pagination
//! into a single PDF file.
//!
//! Fonts are not bundled. Place the four variants of the configured family
//! (`<Family>-Regular.ttf`, `<Family>-Bold.ttf`, `<Family>-Medium.ttf`,
//! `<Family>-SemiBold.ttf`) in the fonts directory before rendering.

pub mod blocks;
pub mod digest;
pub mod error;
pub mod record;
pub mod render;
pub mod sections;
pub mod typeface;

pub use blocks::{HAlign, LayoutBlock, Span, TextBlock, TextClass};
pub use digest::{assembly_digest, canonical_json};
pub use error::GeneratorError;
pub use record::ResumeRecord;
pub use render::Generator;
pub use typeface::TypefaceSet;

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default typeface family, matching the font file name prefix.
pub const DEFAULT_FAMILY: &str = "MarkaziText";
