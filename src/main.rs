//! # Review Registry Demo
//!
//! Starts a [`RegistrySystem`], registers two members, publishes a book and a
//! film, reviews them, then prints a search result and the whole registry.

use review_registry::config::RegistryConfig;
use review_registry::lifecycle::{setup_tracing, RegistrySystem};
use review_registry::model::{BookCreate, Credentials, FilmCreate, MemberCreate, ReviewCreate};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = RegistryConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting review registry demo");

    let system = RegistrySystem::new(config);
    let client = &system.client;

    let span = tracing::info_span!("registration");
    async {
        for (handle, secret, profile) in [
            ("ada", "lovelace", "likes analytical engines"),
            ("grace", "hopper1", "collects bugs"),
        ] {
            client
                .register_member(MemberCreate::new(handle, secret, profile))
                .await?;
        }
        // Same handle in another case: refused.
        if let Err(e) = client
            .register_member(MemberCreate::new("ADA", "whatever", ""))
            .await
        {
            warn!(error = %e, "Duplicate registration refused");
        }
        Ok::<_, review_registry::registry::RegistryError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let ada = Credentials::new("ada", "lovelace");
    let grace = Credentials::new("grace", "hopper1");

    let span = tracing::info_span!("catalog");
    async {
        client
            .add_book(BookCreate::new(
                ada.clone(),
                "Dune",
                "Science-fiction",
                "Frank Herbert",
                412,
            ))
            .await?;
        client
            .add_film(FilmCreate::new(
                grace.clone(),
                "Dune",
                "Science-fiction",
                "Denis Villeneuve",
                "Jon Spaihts",
                155,
            ))
            .await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("reviews");
    async {
        client
            .review_book(ReviewCreate::new(ada.clone(), "dune", 5.0, "Un classique."))
            .await?;
        let average = client
            .review_book(ReviewCreate::new(grace.clone(), "Dune", 4.0, "Long mais riche."))
            .await?;
        info!(average, "Book reviewed twice");

        // A second review by the same member replaces the first.
        client
            .review_film(ReviewCreate::new(grace.clone(), "Dune", 3.0, "Trop sombre."))
            .await?;
        let average = client
            .review_film(ReviewCreate::new(grace, "Dune", 3.5, "Finalement oui."))
            .await?;
        info!(average, "Film review revised");
        Ok::<_, review_registry::registry::RegistryError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let matches = client.search("  DUNE ").await.map_err(|e| e.to_string())?;
    info!(count = matches.len(), "Search finished");
    for description in &matches {
        println!("{description}");
    }

    let registry = system.shutdown().await?;
    println!("{registry}");

    info!("Demo completed successfully");
    Ok(())
}
