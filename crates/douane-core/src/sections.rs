use crate::types::Section;

/// Resolve the owning section for a chapter identifier.
///
/// Accepts both zero-padded ("07") and bare ("7") chapter ids. Covers all
/// 99 chapters of the harmonized scheme; anything else is `None`.
pub fn section_for_chapter(chapter_id: &str) -> Option<&'static str> {
    let n: u8 = chapter_id.trim().parse().ok()?;
    let section = match n {
        1..=5 => "I",
        6..=14 => "II",
        15 => "III",
        16..=24 => "IV",
        25..=27 => "V",
        28..=38 => "VI",
        39..=40 => "VII",
        41..=43 => "VIII",
        44..=46 => "IX",
        47..=49 => "X",
        50..=63 => "XI",
        64..=67 => "XII",
        68..=70 => "XIII",
        71 => "XIV",
        72..=83 => "XV",
        84..=85 => "XVI",
        86..=89 => "XVII",
        90..=92 => "XVIII",
        93 => "XIX",
        94..=96 => "XX",
        97 => "XXI",
        98..=99 => "XXII",
        _ => return None,
    };
    Some(section)
}

/// Static section taxonomy used when the reference document yields no
/// sections of its own.
pub fn fallback_sections() -> Vec<Section> {
    const TITLES: [(&str, &str); 21] = [
        ("I", "ANIMAUX VIVANTS ET PRODUITS DU REGNE ANIMAL"),
        ("II", "PRODUITS DU REGNE VEGETAL"),
        (
            "III",
            "GRAISSES ET HUILES ANIMALES, VEGETALES OU D'ORIGINE MICROBIENNE",
        ),
        (
            "IV",
            "PRODUITS DES INDUSTRIES ALIMENTAIRES; BOISSONS, LIQUIDES ALCOOLIQUES",
        ),
        ("V", "PRODUITS MINERAUX"),
        (
            "VI",
            "PRODUITS DES INDUSTRIES CHIMIQUES OU DES INDUSTRIES CONNEXES",
        ),
        (
            "VII",
            "MATIERES PLASTIQUES ET OUVRAGES EN CES MATIERES; CAOUTCHOUC",
        ),
        (
            "VIII",
            "PEAUX, CUIRS, PELLETERIES ET OUVRAGES EN CES MATIERES",
        ),
        ("IX", "BOIS, CHARBON DE BOIS ET OUVRAGES EN BOIS; LIEGE"),
        (
            "X",
            "PATES DE BOIS OU D'AUTRES MATIERES FIBREUSES CELLULOSIQUES; PAPIER",
        ),
        ("XI", "MATIERES TEXTILES ET OUVRAGES EN CES MATIERES"),
        ("XII", "CHAUSSURES, COIFFURES, PARAPLUIES, PARASOLS, CANNES"),
        ("XIII", "OUVRAGES EN PIERRES, PLATRE, CIMENT, AMIANTE, MICA"),
        (
            "XIV",
            "PERLES FINES OU DE CULTURE, PIERRES GEMMES OU SIMILAIRES",
        ),
        ("XV", "METAUX COMMUNS ET OUVRAGES EN CES METAUX"),
        ("XVI", "MACHINES ET APPAREILS, MATERIEL ELECTRIQUE"),
        ("XVII", "MATERIEL DE TRANSPORT"),
        (
            "XVIII",
            "INSTRUMENTS ET APPAREILS D'OPTIQUE, DE PHOTOGRAPHIE",
        ),
        ("XIX", "ARMES, MUNITIONS ET LEURS PARTIES ET ACCESSOIRES"),
        ("XX", "MARCHANDISES ET PRODUITS DIVERS"),
        ("XXI", "OBJETS D'ART, DE COLLECTION OU D'ANTIQUITE"),
    ];

    TITLES
        .iter()
        .map(|(id, title)| Section {
            id: (*id).to_string(),
            title: (*title).to_string(),
        })
        .collect()
}
