use anyhow::Result;
use std::path::Path;

pub fn run(data_file: Option<&str>, config_file: Option<&Path>) -> Result<()> {
    let (_config, data_path) = super::load_config_and_data_file(data_file, config_file)?;
    let outcome = douane_reference::load(&data_path);

    println!("Document   : {}", data_path.display());
    match &outcome.fault {
        Some(fault) => {
            println!("Chargement : échec ({fault})");
            println!("Le moteur classifiera avec des correspondances de référence vides.");
        }
        None => println!("Chargement : ok"),
    }

    let reference = &outcome.reference;
    println!();
    println!("Sections       : {}", reference.sections.len());
    println!("Chapitres      : {}", reference.chapters.len());
    println!("Sous-positions : {}", reference.subheadings.len());

    if !reference.subheadings.is_empty() {
        println!();
        println!("Premières sous-positions :");
        for (code, subheading) in reference.subheadings.iter().take(5) {
            println!("  {:<16} {:<8} {}", code, subheading.rate, subheading.description);
        }
    }

    Ok(())
}
