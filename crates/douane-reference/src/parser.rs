use crate::strategy::{Strategy, first_non_empty};
use douane_core::types::{Chapter, Section, Subheading};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

fn section_marker_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^SECTION[ \t]+([IVXLC]+)[ \t]*\r?$").expect("section marker pattern")
    })
}

fn chapter_marker_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^(\d{1,2})[ \t]+").expect("chapter marker pattern"))
}

fn chapter_line_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Looser drift fallback: the marker may sit mid-line ("Chapitre 84 ...")
    // and the body is whatever follows on the same line.
    RE.get_or_init(|| Regex::new(r"(\d{1,2})\s+(\p{L}[^\n]*)").expect("chapter line pattern"))
}

fn subheading_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Two code granularities: `dd.dd.dd` and `dddd.dd.dd.dd`. The trailing
    // unit column is optional and absent in older editions.
    RE.get_or_init(|| {
        Regex::new(
            r"(?m)^\s*(\d{4}\.\d{2}\.\d{2}\.\d{2}|\d{2}\.\d{2}\.\d{2})\s+(.+?)\s+(\d+(?:[.,]\d+)?\s?%)(?:[ \t]+(\p{L}+))?[ \t]*\r?$",
        )
        .expect("subheading pattern")
    })
}

/// Marker occurrences as (captured id, match start, match end).
fn marker_positions(pattern: &Regex, content: &str) -> Vec<(String, usize, usize)> {
    pattern
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let id = caps.get(1)?.as_str().to_string();
            Some((id, whole.start(), whole.end()))
        })
        .collect()
}

/// Extract sections from `SECTION <ROMAN>` markers.
///
/// The title block runs from the marker to the next marker or end of text.
/// An empty scan is the caller's cue to fall back to the static taxonomy.
pub fn parse_sections(content: &str) -> Vec<Section> {
    let markers = marker_positions(section_marker_pattern(), content);
    let mut sections = Vec::new();
    for (index, (id, _, block_start)) in markers.iter().enumerate() {
        let block_end = markers
            .get(index + 1)
            .map_or(content.len(), |next| next.1);
        let title = content[*block_start..block_end].trim();
        if !title.is_empty() {
            sections.push(Section {
                id: id.clone(),
                title: title.to_string(),
            });
        }
    }
    sections
}

/// Extract chapters, preferring multi-paragraph blocks and degrading to a
/// looser single-line scan when the block pattern finds nothing.
pub fn parse_chapters(content: &str) -> Vec<Chapter> {
    first_non_empty(
        content,
        &[
            Strategy {
                name: "chapter_blocks",
                run: parse_chapter_blocks,
            },
            Strategy {
                name: "chapter_lines",
                run: parse_chapter_lines,
            },
        ],
    )
}

fn parse_chapter_blocks(content: &str) -> Vec<Chapter> {
    let markers = marker_positions(chapter_marker_pattern(), content);
    let mut chapters = Vec::new();
    let mut seen = HashSet::new();
    for (index, (id, _, body_start)) in markers.iter().enumerate() {
        let body_end = markers
            .get(index + 1)
            .map_or(content.len(), |next| next.1);
        let body = content[*body_start..body_end].trim();
        if body.is_empty() || !seen.insert(id.clone()) {
            continue;
        }
        chapters.push(Chapter {
            id: id.clone(),
            body: body.to_string(),
        });
    }
    chapters
}

fn parse_chapter_lines(content: &str) -> Vec<Chapter> {
    let mut chapters = Vec::new();
    let mut seen = HashSet::new();
    for caps in chapter_line_pattern().captures_iter(content) {
        let (Some(id), Some(body)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        if !seen.insert(id.as_str().to_string()) {
            continue;
        }
        chapters.push(Chapter {
            id: id.as_str().to_string(),
            body: body.as_str().trim().to_string(),
        });
    }
    chapters
}

/// Extract duty-rated subheading lines.
///
/// Lines that do not match the `code description rate%` shape are skipped,
/// never fatal; the first occurrence of a code wins.
pub fn parse_subheadings(content: &str) -> Vec<Subheading> {
    let mut subheadings = Vec::new();
    let mut seen = HashSet::new();
    for caps in subheading_pattern().captures_iter(content) {
        let (Some(code), Some(description), Some(rate)) = (caps.get(1), caps.get(2), caps.get(3))
        else {
            continue;
        };
        let description = description.as_str().trim();
        if description.is_empty() || !seen.insert(code.as_str().to_string()) {
            continue;
        }
        subheadings.push(Subheading {
            code: code.as_str().to_string(),
            description: description.to_string(),
            rate: rate.as_str().replace(' ', ""),
            unit: caps.get(4).map(|m| m.as_str().to_string()),
        });
    }
    subheadings
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
SECTION XVI
MACHINES ET APPAREILS, MATERIEL ELECTRIQUE

84 Réacteurs nucléaires, chaudières, machines, appareils et engins mécaniques
Machines automatiques de traitement de l'information et leurs unités.

84.71.30 Machines automatiques de traitement de l'information portatives 5%
84.71.41 Autres machines automatiques comportant une unité centrale 5 %
SECTION XVII
MATERIEL DE TRANSPORT

87 Voitures automobiles, tracteurs, cycles et autres véhicules terrestres

8703.23.00.00 Voitures de tourisme à moteur à piston alternatif 10% u
87.12.00 Bicyclettes et autres cycles sans moteur 10%
";

    #[test]
    fn parses_sections_with_roman_ids() {
        let sections = parse_sections(SAMPLE);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].id, "XVI");
        assert!(sections[0].title.starts_with("MACHINES"));
        assert_eq!(sections[1].id, "XVII");
        assert!(sections[1].title.starts_with("MATERIEL DE TRANSPORT"));
    }

    #[test]
    fn parses_chapter_blocks_with_multi_line_bodies() {
        let chapters = parse_chapters(SAMPLE);
        let ch84 = chapters.iter().find(|c| c.id == "84").unwrap();
        assert!(ch84.body.contains("Réacteurs nucléaires"));
        assert!(ch84.body.contains("Machines automatiques"));
        assert!(chapters.iter().any(|c| c.id == "87"));
    }

    #[test]
    fn parses_both_subheading_granularities() {
        let subheadings = parse_subheadings(SAMPLE);
        let codes: Vec<&str> = subheadings.iter().map(|s| s.code.as_str()).collect();
        assert!(codes.contains(&"84.71.30"));
        assert!(codes.contains(&"8703.23.00.00"));
        let deep = subheadings
            .iter()
            .find(|s| s.code == "8703.23.00.00")
            .unwrap();
        assert_eq!(deep.rate, "10%");
        assert_eq!(deep.unit.as_deref(), Some("u"));
    }

    #[test]
    fn rate_whitespace_is_normalized() {
        let subheadings = parse_subheadings(SAMPLE);
        let loose = subheadings.iter().find(|s| s.code == "84.71.41").unwrap();
        assert_eq!(loose.rate, "5%");
    }

    #[test]
    fn malformed_lines_are_skipped_not_fatal() {
        let garbled = "84.71.30 Machines 5%\n99.99 incomplete line without rate\n\u{fffd}\u{fffd}\n";
        let subheadings = parse_subheadings(garbled);
        assert_eq!(subheadings.len(), 1);
        assert_eq!(subheadings[0].code, "84.71.30");
    }

    #[test]
    fn duplicate_codes_keep_first_occurrence() {
        let doc = "84.71.30 Première description 5%\n84.71.30 Deuxième description 7%\n";
        let subheadings = parse_subheadings(doc);
        assert_eq!(subheadings.len(), 1);
        assert!(subheadings[0].description.starts_with("Première"));
    }

    #[test]
    fn chapter_line_fallback_recovers_mid_line_markers() {
        // Format drift: markers prefixed with "Chapitre" never start a line
        // with digits, so the block pattern finds nothing and the chain
        // falls through to the looser line scan.
        let drifted = "Chapitre 84 Machines et appareils\nChapitre 85 Matériel électrique\n";
        assert!(parse_chapter_blocks(drifted).is_empty());
        let chapters = parse_chapters(drifted);
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].id, "84");
        assert!(chapters[0].body.starts_with("Machines"));
        assert_eq!(chapters[1].id, "85");
    }
}
