//! Demonstration entry point.
//!
//! # Responsibility
//! - Run the reference author/book/contract scenario against `folio_core`.
//! - Print derived lists, sums and a JSON snapshot to stdout.

use folio_core::{init_logging, Catalog, LogConfig};
use serde_json::{Map, Value};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("folio: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = LogConfig::from_env()?;
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(config.level, log_dir)?;
    }
    log::info!(
        "event=demo_start module=cli status=ok version={}",
        folio_core::core_version()
    );

    let mut catalog = Catalog::new();

    let john = catalog.create_author("John Doe")?;
    let jane = catalog.create_author("Jane Smith")?;

    let python = catalog.create_book("Python Mastery")?;
    let data_science = catalog.create_book("Data Science Essentials")?;

    catalog.sign_contract(john.id(), python.id(), "2025-08-14", 15)?;
    catalog.sign_contract(john.id(), data_science.id(), "2025-08-14", 20)?;
    catalog.sign_contract(jane.id(), data_science.id(), "2025-08-15", 25)?;

    let titles: Vec<&str> = catalog
        .author_books(john.id())?
        .into_iter()
        .map(|book| book.title())
        .collect();
    println!("{} books: {titles:?}", john.name());
    println!(
        "{} total royalties: {}",
        john.name(),
        catalog.total_royalties(john.id())?
    );

    let mut same_day = Vec::new();
    for contract in catalog.contracts_by_date("2025-08-14") {
        let author = catalog.author(contract.author()).map(|a| a.name());
        let book = catalog.book(contract.book()).map(|b| b.title());
        same_day.push((author.unwrap_or("?"), book.unwrap_or("?")));
    }
    println!("contracts on 2025-08-14: {same_day:?}");

    let mut snapshot = Map::new();
    snapshot.insert("authors".into(), serde_json::to_value(catalog.authors())?);
    snapshot.insert("books".into(), serde_json::to_value(catalog.books())?);
    snapshot.insert("contracts".into(), serde_json::to_value(catalog.contracts())?);
    println!("{}", serde_json::to_string_pretty(&Value::Object(snapshot))?);

    Ok(())
}
