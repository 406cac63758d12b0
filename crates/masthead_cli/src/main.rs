//! CLI demo entry point.
//!
//! # Responsibility
//! - Run a fixed sample catalog through every derived query and print it.
//! - Start file logging only when `MASTHEAD_LOG_DIR` is set.

use masthead_core::{
    default_log_level, init_logging, CatalogResult, CatalogService, InMemoryCatalogRepository,
};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "MASTHEAD_LOG_DIR";
const LOG_LEVEL_ENV: &str = "MASTHEAD_LOG_LEVEL";

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        let level =
            std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("masthead_core version={}", masthead_core::core_version());
    match run_demo() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=demo_run module=cli status=error");
            eprintln!("demo failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_demo() -> CatalogResult<()> {
    let mut catalog = CatalogService::new(InMemoryCatalogRepository::new());

    let john = catalog.create_author("John Doe")?;
    let jane = catalog.create_author("Jane Smith")?;
    let tech = catalog.create_magazine("Tech Today", "Technology")?;
    let health = catalog.create_magazine("Health Weekly", "Health")?;

    catalog.add_article(john, tech, "The Future of AI")?;
    catalog.add_article(john, tech, "Advancements in Robotics")?;
    catalog.add_article(jane, tech, "The Rise of Quantum Computing")?;
    catalog.add_article(john, health, "New Trends in Healthcare")?;

    let author_name = catalog.author(john).map(|a| a.name()).unwrap_or_default();
    let magazine_name = catalog.magazine(tech).map(|m| m.name()).unwrap_or_default();

    let titles: Vec<_> = catalog
        .author_articles(john)?
        .into_iter()
        .map(|article| article.title())
        .collect();
    println!("Articles by {author_name}: {titles:?}");

    let magazines: Vec<_> = catalog
        .author_magazines(john)?
        .into_iter()
        .map(|magazine| magazine.name())
        .collect();
    println!("Magazines by {author_name}: {magazines:?}");

    let topics = catalog.topic_areas(john)?.unwrap_or_default();
    println!("Topic areas by {author_name}: {topics:?}");

    let contributors: Vec<_> = catalog
        .contributors(tech)?
        .into_iter()
        .map(|author| author.name())
        .collect();
    println!("Contributors to {magazine_name}: {contributors:?}");

    let frequent: Vec<_> = catalog
        .contributing_authors(tech)?
        .into_iter()
        .map(|author| author.name())
        .collect();
    println!("Authors with more than 2 publications in {magazine_name}: {frequent:?}");

    match catalog.top_publisher() {
        Some(magazine) => println!("Magazine with most articles: {}", magazine.name()),
        None => println!("Magazine with most articles: none"),
    }
    Ok(())
}
