//! Recognized-vocabulary lexicon backing the advisory language-quality
//! report: which query tokens belong to the trade vocabulary, and nearest
//! suggestions for the ones that do not.

use douane_core::constants;
use douane_core::tokens::tokenize;
use douane_core::types::{QualityReport, UnknownWord};
use std::collections::{HashMap, HashSet};

/// Core recognized vocabulary: product heads, transport, technology,
/// clothing, materials, functions, colors, common qualifiers, brands.
const RECOGNIZED_WORDS: &[&str] = &[
    // Véhicules et transport
    "véhicule",
    "automobile",
    "voiture",
    "auto",
    "berline",
    "break",
    "suv",
    "citadine",
    "vélo",
    "bicyclette",
    "cycle",
    "vtt",
    "bmx",
    "tandem",
    "moto",
    "motocycle",
    "scooter",
    "mobylette",
    "cyclomoteur",
    "camion",
    "fourgon",
    "bus",
    "autobus",
    "autocar",
    "train",
    "locomotive",
    "wagon",
    "métro",
    "tramway",
    "avion",
    "aéronef",
    "hélicoptère",
    "drone",
    "bateau",
    "navire",
    "canot",
    "yacht",
    // Technologie et informatique
    "ordinateur",
    "pc",
    "processeur",
    "portable",
    "laptop",
    "notebook",
    "macbook",
    "téléphone",
    "mobile",
    "smartphone",
    "gsm",
    "cellulaire",
    "tablette",
    "ipad",
    "écran",
    "moniteur",
    "téléviseur",
    "clavier",
    "souris",
    "imprimante",
    "scanner",
    // Vêtements et accessoires
    "vêtement",
    "habit",
    "tenue",
    "costume",
    "tshirt",
    "maillot",
    "gilet",
    "polo",
    "chemise",
    "pantalon",
    "jean",
    "robe",
    "jupe",
    "short",
    "manteau",
    "veste",
    "blouson",
    "chaussure",
    "soulier",
    "basket",
    "sneaker",
    "botte",
    "sandale",
    "mocassin",
    "espadrille",
    "sac",
    "pochette",
    "valise",
    "mallette",
    "cartable",
    "sacoche",
    "besace",
    "montre",
    "chronomètre",
    "horloge",
    "bracelet",
    "smartwatch",
    // Matériaux
    "métal",
    "fer",
    "acier",
    "aluminium",
    "cuivre",
    "bronze",
    "laiton",
    "titane",
    "or",
    "argent",
    "plastique",
    "pvc",
    "nylon",
    "polyester",
    "bois",
    "chêne",
    "pin",
    "hêtre",
    "bambou",
    "verre",
    "cristal",
    "tissu",
    "coton",
    "laine",
    "soie",
    "lin",
    "velours",
    "denim",
    "cuir",
    "peau",
    "daim",
    "caoutchouc",
    "latex",
    "silicone",
    "papier",
    "carton",
    "céramique",
    "porcelaine",
    "faïence",
    // Fonctions
    "transport",
    "transporter",
    "traitement",
    "traiter",
    "calculer",
    "télécommunication",
    "communiquer",
    "protection",
    "protéger",
    "stockage",
    "stocker",
    "alimentation",
    "alimentaire",
    "nourrir",
    "médical",
    "soigner",
    "hygiène",
    "nettoyer",
    "beauté",
    "décoration",
    "décorer",
    "confort",
    "sport",
    "jouet",
    "lecture",
    "mobilier",
    "horlogerie",
    // Formes, tailles, couleurs, états
    "rond",
    "carré",
    "rectangulaire",
    "ovale",
    "grand",
    "petit",
    "moyen",
    "long",
    "court",
    "large",
    "étroit",
    "lourd",
    "léger",
    "rouge",
    "bleu",
    "vert",
    "jaune",
    "orange",
    "violet",
    "rose",
    "marron",
    "noir",
    "blanc",
    "gris",
    "neuf",
    "nouveau",
    "ancien",
    "vieux",
    // Marques courantes
    "peugeot",
    "renault",
    "citroën",
    "toyota",
    "honda",
    "ford",
    "bmw",
    "mercedes",
    "audi",
    "volkswagen",
    "nissan",
    "hyundai",
    "kia",
    "giant",
    "trek",
    "specialized",
    "yamaha",
    "kawasaki",
    "suzuki",
    "ducati",
    "dell",
    "hp",
    "lenovo",
    "apple",
    "asus",
    "acer",
    "samsung",
    "huawei",
    "xiaomi",
    "nokia",
    "sony",
    "lg",
    "google",
    "nike",
    "adidas",
    "puma",
    "reebok",
    "lacoste",
    "rolex",
    "omega",
    "cartier",
    "swatch",
    "casio",
    "seiko",
    "ikea",
    "nespresso",
    "lavazza",
    "pfizer",
    "sanofi",
    "bayer",
    // Divers
    "ballon",
    "balle",
    "football",
    "basketball",
    "livre",
    "roman",
    "manuel",
    "dictionnaire",
    "meuble",
    "chaise",
    "table",
    "armoire",
    "canapé",
    "fauteuil",
    "lit",
    "bureau",
    "café",
    "arabica",
    "expresso",
    "médicament",
    "comprimé",
    "sirop",
    "gélule",
    "taille",
    "marque",
    "couleur",
    "modèle",
];

/// Synonym groups: head word to its common variants. Lookup is symmetric.
const SYNONYM_GROUPS: &[(&str, &[&str])] = &[
    ("véhicule", &["auto", "voiture", "automobile", "berline", "break", "suv", "citadine"]),
    ("vélo", &["bicyclette", "cycle", "vtt", "bmx", "tandem"]),
    ("moto", &["motocycle", "scooter", "mobylette", "cyclomoteur"]),
    ("ordinateur", &["pc", "processeur", "desktop"]),
    ("portable", &["laptop", "notebook", "macbook", "ultrabook"]),
    ("téléphone", &["mobile", "smartphone", "gsm", "cellulaire"]),
    ("vêtement", &["habit", "tenue", "costume"]),
    (
        "chaussure",
        &["soulier", "basket", "sneaker", "botte", "sandale", "mocassin", "espadrille"],
    ),
    ("sac", &["pochette", "valise", "mallette", "cartable", "sacoche", "besace"]),
    ("montre", &["chronomètre", "horloge", "smartwatch"]),
    ("métal", &["fer", "acier", "aluminium", "cuivre", "bronze", "laiton", "titane"]),
    ("plastique", &["pvc", "nylon", "polyester"]),
    ("bois", &["chêne", "pin", "hêtre", "bambou"]),
    ("tissu", &["coton", "laine", "soie", "lin", "velours", "denim"]),
    ("transport", &["transporter", "déplacer", "rouler"]),
    ("protection", &["protéger", "sécuriser"]),
    ("stockage", &["stocker", "conserver", "garder"]),
    ("médical", &["soigner", "guérir", "thérapeutique"]),
];

/// Immutable recognized-word lexicon with synonym lookup and similar-word
/// suggestions. Built once at startup.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashSet<String>,
    synonyms: HashMap<String, Vec<String>>,
}

impl Lexicon {
    pub fn builtin() -> Self {
        Self::new(
            RECOGNIZED_WORDS.iter().map(|w| (*w).to_string()),
            SYNONYM_GROUPS.iter().map(|(head, variants)| {
                (
                    (*head).to_string(),
                    variants.iter().map(|v| (*v).to_string()).collect(),
                )
            }),
        )
    }

    pub fn new(
        words: impl IntoIterator<Item = String>,
        synonyms: impl IntoIterator<Item = (String, Vec<String>)>,
    ) -> Self {
        Self {
            words: words.into_iter().collect(),
            synonyms: synonyms.into_iter().collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Synonyms of `word`: direct group members, plus the head and siblings
    /// when `word` itself sits inside a group.
    pub fn synonyms_of(&self, word: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        if let Some(variants) = self.synonyms.get(word) {
            found.extend(variants.iter().cloned());
        }
        for (head, variants) in &self.synonyms {
            if variants.iter().any(|v| v == word) {
                found.push(head.clone());
                found.extend(variants.iter().filter(|v| *v != word).cloned());
            }
        }
        found.sort();
        found.dedup();
        found
    }

    /// Recognized words within normalized-Levenshtein distance of `word`.
    pub fn similar_words(&self, word: &str, threshold: f64) -> Vec<String> {
        let mut scored: Vec<(f64, &String)> = self
            .words
            .iter()
            .filter(|candidate| candidate.as_str() != word)
            .filter_map(|candidate| {
                let similarity = strsim::normalized_levenshtein(word, candidate);
                (similarity >= threshold).then_some((similarity, candidate))
            })
            .collect();
        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });
        scored.into_iter().map(|(_, w)| w.clone()).collect()
    }

    /// Advisory quality report: recognized ratio, unknown tokens, and up to
    /// three suggestions per unknown token. Never consulted by the scorer.
    pub fn analyze(&self, text: &str) -> QualityReport {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return QualityReport {
                recognized_ratio: 1.0,
                recognized: Vec::new(),
                unknown: Vec::new(),
            };
        }

        let mut recognized = Vec::new();
        let mut unknown = Vec::new();
        for token in &tokens {
            if self.contains(token) {
                recognized.push(token.clone());
            } else {
                let mut suggestions =
                    self.similar_words(token, constants::SIMILAR_WORD_THRESHOLD);
                suggestions.truncate(3);
                unknown.push(UnknownWord {
                    word: token.clone(),
                    suggestions,
                });
            }
        }

        QualityReport {
            recognized_ratio: recognized.len() as f64 / tokens.len() as f64,
            recognized,
            unknown,
        }
    }
}
