//! End-to-end runs of the registry behind its actor.

use review_registry::config::RegistryConfig;
use review_registry::lifecycle::RegistrySystem;
use review_registry::model::{BookCreate, Credentials, FilmCreate, MemberCreate, ReviewCreate};
use review_registry::registry::{RegistryError, RegistrySummary};
use std::num::NonZeroUsize;
use tokio::task::JoinSet;

fn system() -> RegistrySystem {
    RegistrySystem::new(RegistryConfig {
        channel_capacity: NonZeroUsize::new(4).unwrap(),
    })
}

#[tokio::test]
async fn test_full_session() {
    let system = system();
    let client = system.client.clone();

    let ada = client
        .register_member(MemberCreate::new("ada", "secret1", "reads"))
        .await
        .unwrap();
    assert_eq!(ada.handle(), "ada");
    client
        .register_member(MemberCreate::new("bob", "secret2", "watches"))
        .await
        .unwrap();

    let authenticated = client
        .authenticate(Credentials::new("ada", "secret1"))
        .await
        .unwrap();
    assert_eq!(authenticated, ada);

    let ada = Credentials::new("ada", "secret1");
    let bob = Credentials::new("bob", "secret2");
    client
        .add_book(BookCreate::new(ada.clone(), "Dune", "SF", "Herbert", 412))
        .await
        .unwrap();
    client
        .add_film(FilmCreate::new(bob.clone(), "Dune", "SF", "Villeneuve", "Spaihts", 155))
        .await
        .unwrap();

    assert_eq!(
        client
            .review_book(ReviewCreate::new(ada.clone(), "Dune", 4.0, "great"))
            .await,
        Ok(4.0)
    );
    assert_eq!(
        client
            .review_book(ReviewCreate::new(bob.clone(), "dune", 3.0, "fine"))
            .await,
        Ok(3.5)
    );
    assert_eq!(
        client
            .review_film(ReviewCreate::new(bob, " DUNE ", 5.0, "epic"))
            .await,
        Ok(5.0)
    );

    let matches = client.search("dune").await.unwrap();
    assert_eq!(matches.len(), 2);
    assert!(matches[0].contains("Note moyenne : 3.5/5 "));
    assert!(matches[1].contains("Avis de bob : \nNote : 5.0/5 \nCommentaire : epic"));

    assert_eq!(
        client.summary().await.unwrap(),
        RegistrySummary {
            members: 2,
            books: 1,
            films: 1,
        }
    );

    drop(client);
    let registry = system.shutdown().await.unwrap();
    assert_eq!(registry.member_count(), 2);
    assert_eq!(registry.book_count(), 1);
}

#[tokio::test]
async fn test_errors_cross_the_actor_boundary() {
    let system = system();
    let client = &system.client;

    assert!(matches!(
        client.search("   ").await,
        Err(RegistryError::InvalidInput(_))
    ));
    assert_eq!(
        client
            .authenticate(Credentials::new("ghost", "secret"))
            .await
            .unwrap_err(),
        RegistryError::AuthenticationFailed
    );
    assert!(matches!(
        client
            .review_book(ReviewCreate::new(Credentials::new("ghost", "secret"), "x", 1.0, ""))
            .await,
        Err(RegistryError::AuthenticationFailed)
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_registrations_admit_one_handle() {
    let system = system();
    let mut tasks = JoinSet::new();

    for i in 0..20 {
        let client = system.client.clone();
        let handle = if i % 2 == 0 { "Ada" } else { " aDA " };
        tasks.spawn(async move {
            client
                .register_member(MemberCreate::new(handle, "secret", format!("#{i}")))
                .await
        });
    }

    let mut registered = 0;
    let mut duplicates = 0;
    while let Some(result) = tasks.join_next().await {
        match result.unwrap() {
            Ok(_) => registered += 1,
            Err(RegistryError::DuplicateMember(_)) => duplicates += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    assert_eq!(registered, 1);
    assert_eq!(duplicates, 19);

    let registry = system.shutdown().await.unwrap();
    assert_eq!(registry.member_count(), 1);
}

#[tokio::test]
async fn test_concurrent_reviews_are_all_counted() {
    let system = system();
    let client = system.client.clone();

    for i in 0..10 {
        client
            .register_member(MemberCreate::new(format!("m{i}"), "secret", ""))
            .await
            .unwrap();
    }
    client
        .add_film(FilmCreate::new(
            Credentials::new("m0", "secret"),
            "Alien",
            "Horror",
            "Scott",
            "O'Bannon",
            117,
        ))
        .await
        .unwrap();

    let mut tasks = JoinSet::new();
    for i in 0..10 {
        let client = client.clone();
        tasks.spawn(async move {
            let credentials = Credentials::new(format!("m{i}"), "secret");
            let rating = if i % 2 == 0 { 2.0 } else { 4.0 };
            client
                .review_film(ReviewCreate::new(credentials, "Alien", rating, ""))
                .await
        });
    }
    while let Some(result) = tasks.join_next().await {
        result.unwrap().unwrap();
    }
    drop(client);

    let registry = system.shutdown().await.unwrap();
    let alien = registry.films().next().unwrap();
    assert_eq!(alien.reviews().len(), 10);
    assert_eq!(alien.average_rating(), Some(3.0));
}

#[tokio::test]
async fn test_snapshot_reflects_applied_requests() {
    use actor_framework::ActorClient;

    let system = system();
    system
        .client
        .register_member(MemberCreate::new("ada", "secret", "x"))
        .await
        .unwrap();

    let snapshot = system.client.snapshot().await.unwrap();
    assert_eq!(snapshot.member_count(), 1);
    assert_eq!(snapshot.to_string(), system.shutdown().await.unwrap().to_string());
}

#[tokio::test]
async fn test_smallest_mailbox_from_serialized_config() {
    assert!(serde_json::from_str::<RegistryConfig>(r#"{"channel_capacity": 0}"#).is_err());

    let config: RegistryConfig = serde_json::from_str(r#"{"channel_capacity": 1}"#).unwrap();
    let system = RegistrySystem::new(config);

    let mut tasks = JoinSet::new();
    for i in 0..5 {
        let client = system.client.clone();
        tasks.spawn(async move {
            client
                .register_member(MemberCreate::new(format!("m{i}"), "secret", ""))
                .await
        });
    }
    while let Some(result) = tasks.join_next().await {
        result.unwrap().unwrap();
    }

    let registry = system.shutdown().await.unwrap();
    assert_eq!(registry.member_count(), 5);
}
