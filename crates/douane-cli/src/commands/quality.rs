use douane_knowledge::Lexicon;

pub fn run(text: &str) {
    let report = Lexicon::builtin().analyze(text);

    println!(
        "Vocabulaire reconnu : {:.0} %",
        report.recognized_ratio * 100.0
    );
    if !report.recognized.is_empty() {
        println!("Mots reconnus : {}", report.recognized.join(", "));
    }
    if report.unknown.is_empty() {
        println!("Aucun mot inconnu.");
        return;
    }
    for unknown in &report.unknown {
        if unknown.suggestions.is_empty() {
            println!("Mot inconnu : {}", unknown.word);
        } else {
            println!(
                "Mot inconnu : {} (vouliez-vous dire : {} ?)",
                unknown.word,
                unknown.suggestions.join(", ")
            );
        }
    }
}
