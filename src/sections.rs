//! Section Mapping - Name to Renderer, Enumerated
//!
//! One pure function per resume section, registered in `SECTION_ORDER`.
//! Adding a section is a local, additive change: write the renderer and
//! add a row to the table. Entry order within a section is input order.

use chrono::NaiveDate;

use crate::blocks::{LayoutBlock, Span, TextBlock, TextClass};
use crate::record::ResumeRecord;

pub type SectionFn = fn(&ResumeRecord) -> Vec<LayoutBlock>;

/// Fixed document order. Sections absent from the record contribute
/// nothing — not even a heading or spacer.
pub const SECTION_ORDER: &[(&str, SectionFn)] = &[
    ("basics", header_blocks),
    ("work", work_blocks),
    ("education", education_blocks),
    ("skills", skills_blocks),
    ("projects", projects_blocks),
    ("awards", awards_blocks),
    ("publications", publications_blocks),
    ("volunteer", volunteer_blocks),
    ("references", references_blocks),
    ("interests", interests_blocks),
    ("languages", languages_blocks),
];

/// Map a record to its full block sequence in document order.
pub fn assemble(record: &ResumeRecord) -> Vec<LayoutBlock> {
    SECTION_ORDER
        .iter()
        .flat_map(|(_, render)| render(record))
        .collect()
}

const ENTRY_GAP: f32 = 4.0;
const SECTION_GAP: f32 = 5.0;

/// Uppercase heading followed by spacer, hairline, spacer.
fn section_heading(title: &str) -> Vec<LayoutBlock> {
    vec![
        LayoutBlock::Text(TextBlock::bold(TextClass::SectionHeader, title)),
        LayoutBlock::Spacer(3.0),
        LayoutBlock::Rule,
        LayoutBlock::Spacer(3.0),
    ]
}

fn header_blocks(record: &ResumeRecord) -> Vec<LayoutBlock> {
    let Some(basics) = &record.basics else {
        return Vec::new();
    };
    let mut out = Vec::new();

    if !basics.name.is_empty() {
        out.push(LayoutBlock::Text(
            TextBlock::bold(TextClass::Name, &basics.name).centered(),
        ));
    }
    if !basics.label.is_empty() {
        out.push(LayoutBlock::Text(
            TextBlock::bold(TextClass::Body, &basics.label).centered(),
        ));
    }

    let mut contact = Vec::new();
    if !basics.email.is_empty() {
        contact.push(basics.email.clone());
    }
    if !basics.phone.is_empty() {
        contact.push(basics.phone.clone());
    }
    if !basics.location.city.is_empty() && !basics.location.region.is_empty() {
        contact.push(format!(
            "{}, {}",
            basics.location.city, basics.location.region
        ));
    }
    if !basics.url.is_empty() {
        contact.push(basics.url.clone());
    }
    if !contact.is_empty() {
        out.push(LayoutBlock::Text(
            TextBlock::plain(TextClass::Contact, contact.join(" | ")).centered(),
        ));
    }

    let mut profile_spans = Vec::new();
    for profile in &basics.profiles {
        if profile.network.is_empty() || profile.username.is_empty() {
            continue;
        }
        if !profile_spans.is_empty() {
            profile_spans.push(Span::plain(" | "));
        }
        profile_spans.push(Span::bold(&profile.network));
        profile_spans.push(Span::plain(format!(": {}", profile.username)));
    }
    if !profile_spans.is_empty() {
        out.push(LayoutBlock::Text(
            TextBlock::from_spans(TextClass::Contact, profile_spans).centered(),
        ));
    }

    if !basics.summary.is_empty() {
        out.push(LayoutBlock::Text(TextBlock::plain(
            TextClass::Body,
            &basics.summary,
        )));
    }
    out
}

fn work_blocks(record: &ResumeRecord) -> Vec<LayoutBlock> {
    if record.work.is_empty() {
        return Vec::new();
    }
    let mut out = section_heading("EXPERIENCE");
    for job in &record.work {
        let title = join_nonempty(&[job.employer(), &job.position], " - ");
        let meta = join_nonempty(
            &[&job.location, &date_range(&job.start_date, &job.end_date)],
            " | ",
        );
        out.push(LayoutBlock::TwoColumn {
            left: TextBlock::bold(TextClass::EntryHeader, title),
            right: TextBlock::plain(TextClass::Detail, meta).right_aligned(),
        });
        push_bullets(&mut out, &job.highlights);
        out.push(LayoutBlock::Spacer(ENTRY_GAP));
    }
    out.push(LayoutBlock::Spacer(SECTION_GAP));
    out
}

fn education_blocks(record: &ResumeRecord) -> Vec<LayoutBlock> {
    if record.education.is_empty() {
        return Vec::new();
    }
    let mut out = section_heading("EDUCATION");
    for edu in &record.education {
        let degree = join_nonempty(&[&edu.study_type, &edu.area], ", ");
        let mut meta = Vec::new();
        let dates = date_range(&edu.start_date, &edu.end_date);
        if !dates.is_empty() {
            meta.push(dates);
        }
        if !edu.score.is_empty() {
            meta.push(format!("Score: {}", edu.score));
        }
        out.push(LayoutBlock::TwoColumn {
            left: TextBlock::bold(TextClass::Body, degree),
            right: TextBlock::plain(TextClass::Detail, meta.join(" | ")).right_aligned(),
        });
        if !edu.institution.is_empty() {
            out.push(LayoutBlock::Text(TextBlock::plain(
                TextClass::Detail,
                &edu.institution,
            )));
        }
        if !edu.courses.is_empty() {
            out.push(LayoutBlock::Text(TextBlock::plain(
                TextClass::Body,
                format!("Courses: {}", edu.courses.join(", ")),
            )));
        }
        out.push(LayoutBlock::Spacer(ENTRY_GAP));
    }
    out.push(LayoutBlock::Spacer(SECTION_GAP));
    out
}

fn skills_blocks(record: &ResumeRecord) -> Vec<LayoutBlock> {
    if record.skills.is_empty() {
        return Vec::new();
    }
    let mut out = section_heading("SKILLS");
    for skill in &record.skills {
        if skill.name.is_empty() || skill.keywords.is_empty() {
            continue;
        }
        out.push(LayoutBlock::Text(TextBlock::from_spans(
            TextClass::Body,
            vec![
                Span::bold(format!("{}:", skill.name)),
                Span::plain(format!(" {}", skill.keywords.join(", "))),
            ],
        )));
    }
    out.push(LayoutBlock::Spacer(SECTION_GAP));
    out
}

fn projects_blocks(record: &ResumeRecord) -> Vec<LayoutBlock> {
    if record.projects.is_empty() {
        return Vec::new();
    }
    let mut out = section_heading("PROJECTS");
    for project in &record.projects {
        if !project.name.is_empty() {
            out.push(LayoutBlock::Text(TextBlock::bold(
                TextClass::EntryHeader,
                &project.name,
            )));
        }
        if !project.description.is_empty() {
            out.push(LayoutBlock::Text(TextBlock::plain(
                TextClass::Body,
                &project.description,
            )));
        }
        push_bullets(&mut out, &project.highlights);
        out.push(LayoutBlock::Spacer(ENTRY_GAP));
    }
    out.push(LayoutBlock::Spacer(SECTION_GAP));
    out
}

fn awards_blocks(record: &ResumeRecord) -> Vec<LayoutBlock> {
    if record.awards.is_empty() {
        return Vec::new();
    }
    let mut out = section_heading("AWARDS");
    for award in &record.awards {
        let mut title_spans = Vec::new();
        if !award.title.is_empty() {
            title_spans.push(Span::bold(&award.title));
        }
        if !award.awarder.is_empty() {
            title_spans.push(Span::plain(format!(" - {}", award.awarder)));
        }
        out.push(LayoutBlock::TwoColumn {
            left: TextBlock::from_spans(TextClass::EntryHeader, title_spans),
            right: TextBlock::plain(TextClass::Detail, format_date(&award.date)).right_aligned(),
        });
        if !award.summary.is_empty() {
            out.push(LayoutBlock::Text(TextBlock::plain(
                TextClass::Body,
                &award.summary,
            )));
        }
        out.push(LayoutBlock::Spacer(ENTRY_GAP));
    }
    out.push(LayoutBlock::Spacer(SECTION_GAP));
    out
}

fn publications_blocks(record: &ResumeRecord) -> Vec<LayoutBlock> {
    if record.publications.is_empty() {
        return Vec::new();
    }
    let mut out = section_heading("PUBLICATIONS");
    for publication in &record.publications {
        if !publication.name.is_empty() {
            out.push(LayoutBlock::Text(TextBlock::bold(
                TextClass::EntryHeader,
                &publication.name,
            )));
        }
        if !publication.publisher.is_empty() || !publication.release_date.is_empty() {
            out.push(LayoutBlock::TwoColumn {
                left: TextBlock::plain(TextClass::Body, &publication.publisher),
                right: TextBlock::plain(
                    TextClass::Detail,
                    format_date(&publication.release_date),
                )
                .right_aligned(),
            });
        }
        if !publication.url.is_empty() {
            out.push(LayoutBlock::Text(TextBlock::plain(
                TextClass::Body,
                &publication.url,
            )));
        }
        if !publication.summary.is_empty() {
            out.push(LayoutBlock::Text(TextBlock::plain(
                TextClass::Body,
                &publication.summary,
            )));
        }
        out.push(LayoutBlock::Spacer(ENTRY_GAP));
    }
    out.push(LayoutBlock::Spacer(SECTION_GAP));
    out
}

fn volunteer_blocks(record: &ResumeRecord) -> Vec<LayoutBlock> {
    if record.volunteer.is_empty() {
        return Vec::new();
    }
    let mut out = section_heading("VOLUNTEER");
    for entry in &record.volunteer {
        let title = join_nonempty(&[&entry.organization, &entry.position], " - ");
        out.push(LayoutBlock::TwoColumn {
            left: TextBlock::bold(TextClass::EntryHeader, title),
            right: TextBlock::plain(
                TextClass::Detail,
                date_range(&entry.start_date, &entry.end_date),
            )
            .right_aligned(),
        });
        if !entry.url.is_empty() {
            out.push(LayoutBlock::Text(TextBlock::plain(
                TextClass::Body,
                &entry.url,
            )));
        }
        if !entry.summary.is_empty() {
            out.push(LayoutBlock::Text(TextBlock::plain(
                TextClass::Body,
                &entry.summary,
            )));
        }
        push_bullets(&mut out, &entry.highlights);
        out.push(LayoutBlock::Spacer(ENTRY_GAP));
    }
    out.push(LayoutBlock::Spacer(SECTION_GAP));
    out
}

fn references_blocks(record: &ResumeRecord) -> Vec<LayoutBlock> {
    if record.references.is_empty() {
        return Vec::new();
    }
    let mut out = section_heading("REFERENCES");
    for reference in &record.references {
        if !reference.name.is_empty() {
            out.push(LayoutBlock::Text(TextBlock::bold(
                TextClass::EntryHeader,
                &reference.name,
            )));
        }
        if !reference.reference.is_empty() {
            out.push(LayoutBlock::Text(TextBlock::plain(
                TextClass::Body,
                &reference.reference,
            )));
        }
        out.push(LayoutBlock::Spacer(ENTRY_GAP));
    }
    out.push(LayoutBlock::Spacer(SECTION_GAP));
    out
}

fn interests_blocks(record: &ResumeRecord) -> Vec<LayoutBlock> {
    if record.interests.is_empty() {
        return Vec::new();
    }
    let mut out = section_heading("INTERESTS");
    for interest in &record.interests {
        if interest.name.is_empty() || interest.keywords.is_empty() {
            continue;
        }
        out.push(LayoutBlock::Text(TextBlock::from_spans(
            TextClass::Body,
            vec![
                Span::bold(&interest.name),
                Span::plain(format!(": {}", interest.keywords.join(", "))),
            ],
        )));
    }
    out.push(LayoutBlock::Spacer(SECTION_GAP));
    out
}

fn languages_blocks(record: &ResumeRecord) -> Vec<LayoutBlock> {
    if record.languages.is_empty() {
        return Vec::new();
    }
    let mut out = section_heading("LANGUAGES");
    for language in &record.languages {
        if language.language.is_empty() || language.fluency.is_empty() {
            continue;
        }
        out.push(LayoutBlock::Text(TextBlock::from_spans(
            TextClass::Body,
            vec![
                Span::bold(&language.language),
                Span::plain(format!(": {}", language.fluency)),
            ],
        )));
    }
    out.push(LayoutBlock::Spacer(SECTION_GAP));
    out
}

fn push_bullets(out: &mut Vec<LayoutBlock>, highlights: &[String]) {
    for highlight in highlights {
        out.push(LayoutBlock::Text(TextBlock::plain(
            TextClass::Body,
            format!("\u{2022} {highlight}"),
        )));
    }
}

fn join_nonempty(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(separator)
}

/// "2020-03-01" and "2020-03" become "Mar 2020"; anything else passes
/// through verbatim.
fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.format("%b %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d") {
        return date.format("%b %Y").to_string();
    }
    trimmed.to_string()
}

fn date_range(start: &str, end: &str) -> String {
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (true, false) => format_date(end),
        (false, true) => format!("{} - Present", format_date(start)),
        (false, false) => format!("{} - {}", format_date(start), format_date(end)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Basics, SkillEntry, WorkEntry};

    fn texts(blocks: &[LayoutBlock]) -> Vec<String> {
        blocks.iter().filter_map(LayoutBlock::content).collect()
    }

    #[test]
    fn empty_record_assembles_to_nothing() {
        assert!(assemble(&ResumeRecord::default()).is_empty());
    }

    #[test]
    fn absent_section_contributes_no_blocks() {
        let record = ResumeRecord {
            skills: vec![SkillEntry {
                name: "Systems".into(),
                keywords: vec!["Rust".into(), "C".into()],
            }],
            ..Default::default()
        };
        let rendered = texts(&assemble(&record));
        assert!(rendered.iter().any(|t| t == "SKILLS"));
        assert!(!rendered.iter().any(|t| t.contains("EXPERIENCE")));
        assert!(!rendered.iter().any(|t| t.contains("EDUCATION")));
    }

    #[test]
    fn work_entries_keep_input_order() {
        let record = ResumeRecord {
            work: vec![
                WorkEntry {
                    company: "Alpha".into(),
                    ..Default::default()
                },
                WorkEntry {
                    company: "Beta".into(),
                    ..Default::default()
                },
                WorkEntry {
                    company: "Gamma".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let rendered = texts(&work_blocks(&record));
        let position = |needle: &str| {
            rendered
                .iter()
                .position(|t| t.contains(needle))
                .unwrap_or_else(|| panic!("missing {needle}"))
        };
        assert!(position("Alpha") < position("Beta"));
        assert!(position("Beta") < position("Gamma"));
    }

    #[test]
    fn skills_line_joins_keywords() {
        let record = ResumeRecord {
            skills: vec![SkillEntry {
                name: "Backend".into(),
                keywords: vec!["Rust".into(), "PostgreSQL".into()],
            }],
            ..Default::default()
        };
        let rendered = texts(&skills_blocks(&record));
        assert!(rendered.iter().any(|t| t == "Backend: Rust, PostgreSQL"));
    }

    #[test]
    fn header_joins_contact_parts_with_pipes() {
        let record = ResumeRecord {
            basics: Some(Basics {
                name: "Ada Lovelace".into(),
                email: "ada@example.org".into(),
                phone: "+44 20 7946 0958".into(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let rendered = texts(&header_blocks(&record));
        assert_eq!(rendered[0], "Ada Lovelace");
        assert!(rendered
            .iter()
            .any(|t| t == "ada@example.org | +44 20 7946 0958"));
    }

    #[test]
    fn sections_start_with_heading_then_rule() {
        let record = ResumeRecord {
            skills: vec![SkillEntry {
                name: "Systems".into(),
                keywords: vec!["Rust".into()],
            }],
            ..Default::default()
        };
        let blocks = skills_blocks(&record);
        assert!(matches!(&blocks[0], LayoutBlock::Text(t) if t.content() == "SKILLS"));
        assert!(matches!(blocks[1], LayoutBlock::Spacer(_)));
        assert!(matches!(blocks[2], LayoutBlock::Rule));
    }

    #[test]
    fn iso_dates_format_as_month_year() {
        assert_eq!(format_date("2020-03-01"), "Mar 2020");
        assert_eq!(format_date("2020-03"), "Mar 2020");
        assert_eq!(format_date("2020"), "2020");
        assert_eq!(format_date("Spring 2020"), "Spring 2020");
    }

    #[test]
    fn open_ended_ranges_say_present() {
        assert_eq!(date_range("2021-06", ""), "Jun 2021 - Present");
        assert_eq!(date_range("2019-01", "2021-06"), "Jan 2019 - Jun 2021");
        assert_eq!(date_range("", ""), "");
    }
}
