//! Curated product descriptors: common trade goods mapped to their tariff
//! code, duty rate, owning section, and the material/function/brand/synonym
//! context used by the scorer.

use douane_core::types::ProductDescriptor;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn descriptor(
    keyword: &str,
    code: &str,
    description: &str,
    rate: &str,
    section: &str,
    materials: &[&str],
    functions: &[&str],
    brands: &[&str],
    synonyms: &[&str],
) -> ProductDescriptor {
    ProductDescriptor {
        keyword: keyword.to_string(),
        code: code.to_string(),
        description: description.to_string(),
        rate: rate.to_string(),
        section: section.to_string(),
        materials: strings(materials),
        functions: strings(functions),
        brands: strings(brands),
        synonyms: strings(synonyms),
    }
}

/// The built-in curated table. Constructed once at startup; read-only
/// afterwards (enrichment rebuilds a new table, see [`crate::SharedKnowledge`]).
pub fn builtin() -> Vec<ProductDescriptor> {
    vec![
        descriptor(
            "ordinateur",
            "84.71",
            "Machines automatiques de traitement de l'information et leurs unités",
            "5%",
            "XVI",
            &["métal", "plastique", "silicon"],
            &["traitement", "calcul", "stockage"],
            &[
                "dell", "hp", "lenovo", "apple", "asus", "acer", "toshiba", "samsung", "msi",
                "razer",
            ],
            &["pc", "computer", "calculateur", "processeur", "cpu", "tour", "desktop"],
        ),
        descriptor(
            "laptop",
            "84.71",
            "Machines automatiques de traitement de l'information portables",
            "5%",
            "XVI",
            &["métal", "plastique", "lithium"],
            &["traitement", "portable", "batterie"],
            &[
                "dell", "hp", "lenovo", "apple", "asus", "acer", "toshiba", "samsung", "msi",
                "razer",
            ],
            &[
                "portable",
                "notebook",
                "macbook",
                "chromebook",
                "ultrabook",
                "ordinateur portable",
            ],
        ),
        descriptor(
            "smartphone",
            "85.17",
            "Appareils de télécommunication pour réseaux cellulaires",
            "5%",
            "XVI",
            &["verre", "métal", "plastique"],
            &["télécommunication", "tactile", "caméra"],
            &[
                "samsung", "apple", "huawei", "xiaomi", "oneplus", "nokia", "sony", "lg",
                "motorola", "google",
            ],
            &["téléphone", "mobile", "iphone", "galaxy", "pixel", "gsm"],
        ),
        descriptor(
            "voiture",
            "87.03",
            "Voitures de tourisme et autres véhicules automobiles",
            "10%",
            "XVII",
            &["métal", "plastique", "caoutchouc"],
            &["transport", "moteur", "roues"],
            &[
                "toyota",
                "honda",
                "ford",
                "bmw",
                "mercedes",
                "audi",
                "volkswagen",
                "peugeot",
                "renault",
                "citroën",
                "nissan",
                "hyundai",
                "kia",
            ],
            &[
                "automobile",
                "auto",
                "bagnole",
                "caisse",
                "véhicule",
                "berline",
                "break",
                "suv",
                "4x4",
                "citadine",
            ],
        ),
        descriptor(
            "vélo",
            "87.12",
            "Cycles (y compris les bicyclettes) et autres cycles, même avec moteur auxiliaire",
            "10%",
            "XVII",
            &["métal", "aluminium", "acier", "caoutchouc"],
            &["transport", "véhicule", "roues"],
            &[
                "peugeot",
                "giant",
                "trek",
                "specialized",
                "cannondale",
                "scott",
                "merida",
                "cube",
                "kona",
                "bianchi",
            ],
            &["bicyclette", "cycle", "bike", "vtt", "bmx", "tandem"],
        ),
        descriptor(
            "bicyclette",
            "87.12",
            "Cycles (y compris les bicyclettes) et autres cycles, même avec moteur auxiliaire",
            "10%",
            "XVII",
            &["métal", "aluminium", "acier", "caoutchouc"],
            &["transport", "véhicule", "roues"],
            &[
                "peugeot",
                "giant",
                "trek",
                "specialized",
                "cannondale",
                "scott",
                "merida",
                "cube",
                "kona",
                "bianchi",
            ],
            &["vélo", "cycle", "bike", "vtt", "bmx", "tandem"],
        ),
        descriptor(
            "moto",
            "87.11",
            "Motocycles et cycles équipés d'un moteur auxiliaire",
            "10%",
            "XVII",
            &["métal", "plastique", "caoutchouc"],
            &["transport", "moteur"],
            &[
                "honda", "yamaha", "kawasaki", "suzuki", "bmw", "ducati", "triumph", "ktm",
            ],
            &["motocycle", "scooter", "mobylette", "cyclomoteur", "motorcycle"],
        ),
        descriptor(
            "médicament",
            "30.04",
            "Médicaments présentés sous forme de doses ou conditionnés pour la vente au détail",
            "5%",
            "VI",
            &["chimique", "organique"],
            &["médical", "thérapeutique"],
            &[
                "pfizer", "novartis", "roche", "sanofi", "gsk", "merck", "bayer",
            ],
            &["pilule", "comprimé", "sirop", "gélule", "antibiotique"],
        ),
        descriptor(
            "café",
            "09.01",
            "Café, même torréfié ou décaféiné",
            "10%",
            "II",
            &["organique", "végétal"],
            &["alimentaire", "boisson"],
            &["nespresso", "lavazza", "illy", "starbucks"],
            &["arabica", "robusta", "expresso", "espresso", "cappuccino", "moka"],
        ),
        descriptor(
            "t-shirt",
            "61.09",
            "T-shirts, gilets de corps et maillots de corps, en bonneterie",
            "20%",
            "XI",
            &["coton", "polyester", "laine"],
            &["vêtement", "protection", "textile"],
            &["nike", "adidas", "puma", "reebok", "lacoste", "levis"],
            &["tee-shirt", "maillot", "polo", "chemise", "haut"],
        ),
        descriptor(
            "chaussures",
            "64.03",
            "Chaussures à semelles extérieures et dessus en cuir naturel",
            "20%",
            "XII",
            &["cuir", "caoutchouc", "plastique"],
            &["protection", "marche"],
            &[
                "nike", "adidas", "puma", "reebok", "converse", "vans", "timberland",
            ],
            &[
                "chaussure",
                "soulier",
                "basket",
                "sneaker",
                "tennis",
                "botte",
                "sandale",
                "mocassin",
                "espadrille",
            ],
        ),
        descriptor(
            "sac",
            "42.02",
            "Articles de maroquinerie en cuir naturel ou en composition cuir",
            "15%",
            "VIII",
            &["cuir", "tissu", "plastique"],
            &["transport", "stockage", "accessoire"],
            &["louis vuitton", "hermes", "chanel", "gucci", "prada", "dior"],
            &[
                "bag", "handbag", "pochette", "valise", "mallette", "cartable", "sacoche",
                "besace",
            ],
        ),
        descriptor(
            "montre",
            "91.02",
            "Montres-bracelets, montres de poche et montres similaires",
            "5%",
            "XVIII",
            &["métal", "verre", "plastique"],
            &["horlogerie", "accessoire"],
            &[
                "rolex", "omega", "cartier", "swatch", "casio", "seiko", "citizen",
            ],
            &["chronomètre", "horloge", "smartwatch"],
        ),
        descriptor(
            "livre",
            "49.01",
            "Livres, brochures et imprimés similaires, même sur feuillets isolés",
            "5%",
            "X",
            &["papier", "carton", "encre"],
            &["lecture", "éducation", "information"],
            &["gallimard", "hachette", "flammarion"],
            &[
                "roman",
                "essai",
                "manuel",
                "dictionnaire",
                "encyclopédie",
                "magazine",
                "brochure",
            ],
        ),
        descriptor(
            "meuble",
            "94.03",
            "Mobilier en bois, en rotin, en osier ou en matières similaires",
            "15%",
            "XX",
            &["bois", "métal", "tissu", "cuir"],
            &["mobilier", "décoration", "confort"],
            &["ikea", "habitat", "conforama"],
            &[
                "mobilier", "chaise", "table", "armoire", "commode", "canapé", "fauteuil",
                "lit", "bureau", "étagère",
            ],
        ),
        descriptor(
            "ballon",
            "95.06",
            "Articles et matériel pour le sport; ballons et balles de jeu",
            "15%",
            "XX",
            &["cuir", "caoutchouc", "plastique"],
            &["sport", "jeu"],
            &[
                "adidas", "nike", "puma", "mikasa", "molten", "wilson", "spalding",
            ],
            &["balle", "ballon de football", "ballon de basket"],
        ),
    ]
}
