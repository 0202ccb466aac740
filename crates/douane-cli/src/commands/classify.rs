use anyhow::Result;
use douane_engine::Engine;
use douane_knowledge::{KnowledgeBase, Lexicon};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

pub fn run(
    query: &str,
    data_file: Option<&str>,
    limit: usize,
    json: bool,
    config_file: Option<&Path>,
) -> Result<()> {
    let (config, data_path) = super::load_config_and_data_file(data_file, config_file)?;
    let outcome = douane_reference::load(&data_path);

    let engine = Engine::new(outcome.reference, Arc::new(KnowledgeBase::builtin()))
        .with_config(config)
        .with_quality(Box::new(Lexicon::builtin()));
    let result = engine.classify(query);
    debug!(confidence = result.confidence, "classification complete");

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if let Some(verdict) = &result.verdict {
        println!("Description ambiguë ({})", verdict.kind);
        println!("{}", verdict.message);
        for (i, clarification) in verdict.clarifications.iter().enumerate() {
            println!("  {}. {}", i + 1, clarification);
        }
        return Ok(());
    }

    match &result.best_match {
        Some(best) => {
            println!("Code retenu : {} ({})", best.code, best.origin);
            println!("Description : {}", best.description);
            println!("Taux        : {}", best.rate);
            if let Some(section) = &best.section {
                println!("Section     : {section}");
            }
            println!("Confiance   : {:.1} %", result.confidence * 100.0);
            println!();
            println!("{}", result.explanation);

            if !result.alternatives.is_empty() {
                println!("Alternatives :");
                println!("{:<16} {:<12} {:<10} SCORE", "CODE", "ORIGINE", "TAUX");
                println!("{}", "-".repeat(48));
                for alternative in result.alternatives.iter().take(limit) {
                    println!(
                        "{:<16} {:<12} {:<10} {:.3}",
                        alternative.code,
                        alternative.origin.as_str(),
                        alternative.rate,
                        alternative.score
                    );
                }
            }
        }
        None => println!("{}", result.explanation),
    }

    if !result.suggestions.is_empty() {
        println!();
        println!("Suggestions :");
        for suggestion in &result.suggestions {
            println!("  - {suggestion}");
        }
    }

    if let Some(quality) = &result.quality
        && !quality.unknown.is_empty()
    {
        println!();
        println!(
            "Vocabulaire reconnu : {:.0} %",
            quality.recognized_ratio * 100.0
        );
        for unknown in &quality.unknown {
            if unknown.suggestions.is_empty() {
                println!("  Mot inconnu : {}", unknown.word);
            } else {
                println!(
                    "  Mot inconnu : {} (vouliez-vous dire : {} ?)",
                    unknown.word,
                    unknown.suggestions.join(", ")
                );
            }
        }
    }

    Ok(())
}
