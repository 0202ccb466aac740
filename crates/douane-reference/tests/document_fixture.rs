use douane_reference::load;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../testdata/fixtures/tec-extract.txt")
}

#[test]
fn fixture_document_parses_all_three_levels() {
    let outcome = load(&fixture_path());
    assert!(outcome.fault.is_none());

    let reference = outcome.reference;
    assert!(reference.sections.len() >= 6);
    assert!(reference.chapters.len() >= 7);
    assert!(reference.subheadings.len() >= 12);

    // Both code granularities coexist in one edition.
    assert!(reference.subheadings.contains_key("84.71.30"));
    assert!(reference.subheadings.contains_key("8517.13.00.00"));

    let sporting = &reference.subheadings["95.06.62"];
    assert!(sporting.description.contains("Ballons"));
    assert_eq!(sporting.rate, "15%");
    assert_eq!(sporting.unit.as_deref(), Some("u"));

    let vehicles = &reference.chapters["87"];
    assert!(vehicles.body.contains("Voitures automobiles"));
}

#[test]
fn fixture_sections_use_parsed_titles_not_fallback() {
    let outcome = load(&fixture_path());
    let sections = outcome.reference.sections;
    // Only the sections present in the extract, not the 21-entry fallback.
    assert!(sections.len() < 21);
    assert!(sections["XVII"].title.starts_with("MATERIEL DE TRANSPORT"));
}
