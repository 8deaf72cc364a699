//! Typeface Loading - Four Variants, No Fallback
//!
//! Fonts are read once at startup from a local directory following the
//! `<Family>-<Variant>.ttf` naming convention. A missing variant is fatal:
//! the engine never substitutes Regular for an absent weight.

use std::fs;
use std::path::{Path, PathBuf};

use genpdf::fonts::{FontData, FontFamily};

use crate::error::GeneratorError;

/// Required variant suffixes, in load order.
pub const VARIANTS: [&str; 4] = ["Regular", "Bold", "Medium", "SemiBold"];

/// The four loaded variants, grouped into the two `genpdf` families the
/// renderer styles against: body text (Regular/Bold) and headings
/// (Medium/SemiBold).
#[derive(Clone, Debug)]
pub struct TypefaceSet {
    pub family_name: String,
    pub body: FontFamily<FontData>,
    pub accent: FontFamily<FontData>,
}

impl TypefaceSet {
    /// Load all four variants from `dir`. Existence is probed up front so
    /// the error names the first absent file rather than a decode failure.
    pub fn load(dir: &Path, family: &str) -> Result<Self, GeneratorError> {
        if let Some(variant) = Self::missing_variants(dir, family).first() {
            return Err(GeneratorError::MissingFont(variant_path(
                dir, family, variant,
            )));
        }

        let read = |variant: &str| -> Result<FontData, GeneratorError> {
            let path = variant_path(dir, family, variant);
            let bytes = fs::read(&path)?;
            FontData::new(bytes, None).map_err(|source| GeneratorError::FontData { path, source })
        };

        let regular = read("Regular")?;
        let bold = read("Bold")?;
        let medium = read("Medium")?;
        let semibold = read("SemiBold")?;

        // No italic files in the set; the italic slots alias the upright
        // cuts so every style resolves to a loaded face.
        Ok(Self {
            family_name: family.to_string(),
            body: FontFamily {
                regular: regular.clone(),
                bold: bold.clone(),
                italic: regular,
                bold_italic: bold,
            },
            accent: FontFamily {
                regular: medium.clone(),
                bold: semibold.clone(),
                italic: medium,
                bold_italic: semibold,
            },
        })
    }

    /// Variant suffixes whose files are absent, without parsing anything.
    pub fn missing_variants(dir: &Path, family: &str) -> Vec<&'static str> {
        VARIANTS
            .iter()
            .copied()
            .filter(|variant| !variant_path(dir, family, variant).is_file())
            .collect()
    }
}

fn variant_path(dir: &Path, family: &str, variant: &str) -> PathBuf {
    dir.join(format!("{family}-{variant}.ttf"))
}
