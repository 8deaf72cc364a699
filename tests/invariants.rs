//! Contract Invariant Tests
//!
//! Cross-module guarantees: absent sections emit nothing, entry order is
//! preserved, assembly is deterministic, and missing font variants fail
//! loudly instead of substituting.

use std::fs::File;
use std::path::PathBuf;

use resumepress_core::{
    assembly_digest, GeneratorError, Generator, LayoutBlock, ResumeRecord, TypefaceSet,
    DEFAULT_FAMILY,
};

fn minimal_record() -> ResumeRecord {
    serde_json::from_str(
        r#"{
            "basics": {
                "name": "Grace Hopper",
                "label": "Rear Admiral, Computer Scientist",
                "email": "grace@example.navy.mil"
            }
        }"#,
    )
    .unwrap()
}

fn full_record() -> ResumeRecord {
    serde_json::from_str(
        r#"{
            "basics": {"name": "Grace Hopper"},
            "work": [
                {"company": "Eckert-Mauchly", "position": "Senior Mathematician",
                 "startDate": "1949-06", "endDate": "1950-03",
                 "highlights": ["Wrote the A-0 system"]},
                {"company": "Remington Rand", "position": "Director",
                 "startDate": "1950-03"},
                {"company": "US Navy", "position": "Rear Admiral",
                 "startDate": "1967-01"}
            ],
            "education": [
                {"institution": "Yale University", "studyType": "PhD",
                 "area": "Mathematics", "startDate": "1930", "endDate": "1934"}
            ],
            "skills": [
                {"name": "Compilers", "keywords": ["COBOL", "FLOW-MATIC"]}
            ]
        }"#,
    )
    .unwrap()
}

fn rendered_texts(blocks: &[LayoutBlock]) -> Vec<String> {
    blocks.iter().filter_map(LayoutBlock::content).collect()
}

#[test]
fn invariant_absent_section_emits_nothing() {
    let blocks = resumepress_core::sections::assemble(&minimal_record());
    let texts = rendered_texts(&blocks);

    // Only the basics header may appear; no section heading, rule, or
    // spacer for any absent section.
    assert!(texts.iter().any(|t| t == "Grace Hopper"));
    for heading in [
        "EXPERIENCE",
        "EDUCATION",
        "SKILLS",
        "PROJECTS",
        "AWARDS",
        "PUBLICATIONS",
        "VOLUNTEER",
        "REFERENCES",
        "INTERESTS",
        "LANGUAGES",
    ] {
        assert!(
            !texts.iter().any(|t| t == heading),
            "unexpected {heading} heading for absent section"
        );
    }
    assert!(!blocks.iter().any(|b| matches!(b, LayoutBlock::Rule)));
}

#[test]
fn invariant_empty_record_has_no_blocks() {
    let blocks = resumepress_core::sections::assemble(&ResumeRecord::default());
    assert!(blocks.is_empty());
}

#[test]
fn invariant_entry_order_preserved() {
    let blocks = resumepress_core::sections::assemble(&full_record());
    let texts = rendered_texts(&blocks);
    let position = |needle: &str| {
        texts
            .iter()
            .position(|t| t.contains(needle))
            .unwrap_or_else(|| panic!("missing {needle}"))
    };
    assert!(position("Eckert-Mauchly") < position("Remington Rand"));
    assert!(position("Remington Rand") < position("US Navy"));
}

#[test]
fn invariant_section_order_fixed() {
    let texts = rendered_texts(&resumepress_core::sections::assemble(&full_record()));
    let position = |needle: &str| texts.iter().position(|t| t == needle).unwrap();
    // basics first, then work before education before skills.
    assert_eq!(texts[0], "Grace Hopper");
    assert!(position("EXPERIENCE") < position("EDUCATION"));
    assert!(position("EDUCATION") < position("SKILLS"));
}

#[test]
fn invariant_assembly_digest_stable() {
    let record = full_record();
    let first = assembly_digest(&resumepress_core::sections::assemble(&record)).unwrap();
    let second = assembly_digest(&resumepress_core::sections::assemble(&record)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn invariant_malformed_section_is_parse_error() {
    let result = serde_json::from_str::<ResumeRecord>(r#"{"work": "not a sequence"}"#);
    assert!(result.is_err());
}

#[test]
fn invariant_missing_variant_is_resource_error() {
    let dir = tempfile::tempdir().unwrap();
    // Three of the four variants present; Bold removed.
    for variant in ["Regular", "Medium", "SemiBold"] {
        File::create(dir.path().join(format!("{DEFAULT_FAMILY}-{variant}.ttf"))).unwrap();
    }

    let err = TypefaceSet::load(dir.path(), DEFAULT_FAMILY).unwrap_err();
    match err {
        GeneratorError::MissingFont(path) => {
            assert!(path.ends_with(format!("{DEFAULT_FAMILY}-Bold.ttf")));
        }
        other => panic!("expected MissingFont, got {other:?}"),
    }
}

/// Directory with all four variant files installed, if any. The font
/// binaries are not committed, so the render smoke test is skipped when
/// they are absent.
fn installed_fonts() -> Option<PathBuf> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fonts");
    TypefaceSet::missing_variants(&dir, DEFAULT_FAMILY)
        .is_empty()
        .then_some(dir)
}

#[test]
fn invariant_minimal_record_renders_nonempty_pdf() {
    let Some(fonts) = installed_fonts() else {
        eprintln!("fonts/ not installed; skipping render smoke test");
        return;
    };

    let typefaces = TypefaceSet::load(&fonts, DEFAULT_FAMILY).unwrap();
    let generator = Generator::new(typefaces);

    let out = tempfile::tempdir().unwrap();
    let path = out.path().join("resume.pdf");
    generator
        .render_to_file(&minimal_record(), &path)
        .unwrap();

    let metadata = std::fs::metadata(&path).unwrap();
    assert!(metadata.len() > 0);
}
