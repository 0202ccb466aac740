//! Static vocabularies consulted by the feature extractor, the ambiguity
//! gate, and the legal-rule adjustments. Matching is case-insensitive but
//! diacritic-sensitive: `métal` and `metal` are different terms.

/// Material terms recognized in queries and candidate descriptions.
pub const MATERIAL_TERMS: &[&str] = &[
    "coton",
    "laine",
    "soie",
    "lin",
    "cuir",
    "plastique",
    "métal",
    "bois",
    "verre",
    "céramique",
    "acier",
    "aluminium",
    "cuivre",
    "lithium",
    "silicon",
    "caoutchouc",
    "papier",
    "carton",
    "tissu",
    "polyester",
    "nylon",
];

/// Function/usage categories recognized in queries.
pub const FUNCTION_TERMS: &[&str] = &[
    "traitement",
    "télécommunication",
    "transport",
    "médical",
    "alimentaire",
    "textile",
    "mécanique",
    "électrique",
    "hygiène",
    "beauté",
    "véhicule",
    "marche",
    "lecture",
    "mobilier",
    "horlogerie",
    "sport",
    "jeu",
];

/// Part/component markers driving the RGI 2 adjustment (incomplete goods
/// classified as complete).
pub const INCOMPLETE_TERMS: &[&str] = &["partie", "composant", "pièce", "élément"];

/// Packaging markers driving the RGI 5 adjustment (packaging follows the
/// goods).
pub const PACKAGING_TERMS: &[&str] = &["emballage", "boîte", "carton", "sachet", "sac"];

/// Maximally vague nouns: their mere presence makes a query unclassifiable.
pub const VERY_GENERIC_TERMS: &[&str] = &[
    "chose", "objet", "article", "produit", "item", "machin", "truc", "bidule",
];

/// Dimension units recognized by the `<number><unit>` pattern:
/// length, mass, volume, digital storage, frequency.
pub const DIMENSION_UNITS: &[&str] = &[
    "cm", "mm", "m", "kg", "g", "l", "ml", "go", "gb", "to", "tb", "mo", "mb", "ghz", "mhz",
    "pouces", "w",
];

/// Technical-specification tokens: connectivity standards, chipset vendor
/// names, resolution tiers.
pub const TECH_SPEC_TERMS: &[&str] = &[
    "intel",
    "amd",
    "nvidia",
    "qualcomm",
    "mediatek",
    "wifi",
    "bluetooth",
    "5g",
    "4g",
    "lte",
    "ssd",
    "hdd",
    "ram",
    "usb",
    "hdmi",
    "hd",
    "4k",
    "8k",
];

/// A polysemous noun needing disambiguating context when the query is short.
#[derive(Debug, Clone, Copy)]
pub struct AmbiguousTerm {
    pub term: &'static str,
    pub message: &'static str,
    pub clarifications: &'static [&'static str],
    /// Type/material/usage hints whose presence resolves the ambiguity.
    pub context_words: &'static [&'static str],
}

/// Curated polysemous nouns with their term-specific clarification prompts.
pub const AMBIGUOUS_TERMS: &[AmbiguousTerm] = &[
    AmbiguousTerm {
        term: "ballon",
        message: "Le mot \"ballon\" est ambigu. Précisez :",
        clarifications: &[
            "Type : football, basketball, ballon de baudruche, ballon gonflable",
            "Matériau : cuir, caoutchouc, plastique",
            "Usage : sport, décoration, jouet",
        ],
        context_words: &[
            "football",
            "basketball",
            "baudruche",
            "gonflable",
            "cuir",
            "caoutchouc",
            "plastique",
            "sport",
            "décoration",
            "jouet",
        ],
    },
    AmbiguousTerm {
        term: "sac",
        message: "Le mot \"sac\" est ambigu. Précisez :",
        clarifications: &[
            "Type : sac à main, sac à dos, sac de sport, sac de voyage",
            "Matériau : cuir, tissu, plastique",
            "Usage : transport, rangement, décoration",
        ],
        context_words: &[
            "main",
            "dos",
            "sport",
            "voyage",
            "cuir",
            "tissu",
            "plastique",
            "transport",
            "rangement",
            "décoration",
        ],
    },
    AmbiguousTerm {
        term: "bouteille",
        message: "Le mot \"bouteille\" est ambigu. Précisez :",
        clarifications: &[
            "Type : bouteille d'eau, bouteille de vin, bouteille de parfum",
            "Matériau : verre, plastique, métal",
            "Usage : boisson, parfum, décoration",
        ],
        context_words: &[
            "eau",
            "vin",
            "parfum",
            "verre",
            "plastique",
            "métal",
            "boisson",
            "décoration",
        ],
    },
    AmbiguousTerm {
        term: "boîte",
        message: "Le mot \"boîte\" est ambigu. Précisez :",
        clarifications: &[
            "Type : boîte de conserve, boîte de rangement, boîte cadeau",
            "Matériau : métal, carton, plastique",
            "Usage : emballage, rangement, décoration",
        ],
        context_words: &[
            "conserve",
            "rangement",
            "cadeau",
            "métal",
            "carton",
            "plastique",
            "emballage",
            "décoration",
        ],
    },
    AmbiguousTerm {
        term: "voiture",
        message: "Le mot \"voiture\" est ambigu. Précisez :",
        clarifications: &[
            "Type : voiture de tourisme, voiture de sport, voiture électrique",
            "Marque : Toyota, BMW, Tesla, etc.",
            "Usage : transport personnel, course, taxi",
        ],
        context_words: &[
            "tourisme",
            "sport",
            "électrique",
            "toyota",
            "bmw",
            "tesla",
            "automobile",
            "transport",
            "course",
            "taxi",
        ],
    },
    AmbiguousTerm {
        term: "téléphone",
        message: "Le mot \"téléphone\" est ambigu. Précisez :",
        clarifications: &[
            "Type : téléphone portable, téléphone fixe, téléphone sans fil",
            "Marque : Apple, Samsung, Nokia, etc.",
            "Usage : communication mobile, bureau, maison",
        ],
        context_words: &[
            "portable", "fixe", "apple", "samsung", "nokia", "mobile", "bureau", "maison",
        ],
    },
];

/// Look up the first ambiguous term contained in the lowercased query.
pub fn find_ambiguous_term(query_lower: &str) -> Option<&'static AmbiguousTerm> {
    AMBIGUOUS_TERMS
        .iter()
        .find(|entry| query_lower.contains(entry.term))
}

/// Look up the first very-generic term contained in the lowercased query.
pub fn find_very_generic_term(query_lower: &str) -> Option<&'static str> {
    VERY_GENERIC_TERMS
        .iter()
        .copied()
        .find(|term| query_lower.contains(term))
}
