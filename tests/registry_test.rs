//! Behaviour of the synchronous registry, exercised through its public API.

use review_registry::model::{
    BookCreate, Credentials, FilmCreate, ItemQuery, ItemVariant, MemberCreate, ReviewCreate,
};
use review_registry::registry::{Registry, RegistryError, RegistrySummary};

fn creds(handle: &str, secret: &str) -> Credentials {
    Credentials::new(handle, secret)
}

fn book(c: Credentials, title: &str) -> BookCreate {
    BookCreate::new(c, title, "SF", "Frank Herbert", 412)
}

fn film(c: Credentials, title: &str) -> FilmCreate {
    FilmCreate::new(c, title, "SF", "Denis Villeneuve", "Jon Spaihts", 155)
}

fn review(c: Credentials, title: &str, rating: f32, comment: &str) -> ReviewCreate {
    ReviewCreate::new(c, title, rating, comment)
}

/// Registry with members "ada" and "bob" and the book "Dune".
fn setup() -> Registry {
    let mut registry = Registry::new();
    registry
        .register(MemberCreate::new("ada", "secret1", "reads a lot"))
        .unwrap();
    registry
        .register(MemberCreate::new("bob", "secret2", "watches a lot"))
        .unwrap();
    registry.add_book(book(creds("ada", "secret1"), "Dune")).unwrap();
    registry
}

// =============================================================================
// Members
// =============================================================================

#[test]
fn test_duplicate_handle_after_trim_and_case_fold() {
    let mut registry = Registry::new();
    registry
        .register(MemberCreate::new("Alice", "secret", "first"))
        .unwrap();
    assert_eq!(
        registry.register(MemberCreate::new("  aLICE ", "other-secret", "second")),
        Err(RegistryError::DuplicateMember("aLICE".to_string()))
    );

    // Same outcome the other way round.
    let mut registry = Registry::new();
    registry
        .register(MemberCreate::new("  aLICE ", "other-secret", "second"))
        .unwrap();
    assert!(matches!(
        registry.register(MemberCreate::new("Alice", "secret", "first")),
        Err(RegistryError::DuplicateMember(_))
    ));
    assert_eq!(registry.member_count(), 1);
}

#[test]
fn test_secret_length_counts_inner_spaces() {
    let mut registry = Registry::new();
    assert!(registry
        .register(MemberCreate::new("ada", "  ab cd ", "profile"))
        .is_ok());
    assert!(registry
        .register(MemberCreate::new("bob", "abcd", "profile"))
        .is_ok());
    assert!(matches!(
        registry.register(MemberCreate::new("eve", "  abc  ", "profile")),
        Err(RegistryError::InvalidInput(_))
    ));
    assert_eq!(registry.member_count(), 2);
}

#[test]
fn test_blank_handle_is_invalid() {
    let mut registry = Registry::new();
    assert!(matches!(
        registry.register(MemberCreate::new("   ", "secret", "profile")),
        Err(RegistryError::InvalidInput(_))
    ));
}

#[test]
fn test_wrong_secret_fails_even_if_another_member_has_it() {
    let registry = setup();
    assert_eq!(
        registry.authenticate("ada", "secret2").unwrap_err(),
        RegistryError::AuthenticationFailed
    );
    assert_eq!(registry.authenticate("ada", "secret1").unwrap().handle(), "ada");
    assert_eq!(
        registry.authenticate("nobody", "secret1").unwrap_err(),
        RegistryError::AuthenticationFailed
    );
}

#[test]
fn test_trimmed_handle_authenticates_for_items_but_not_reviews() {
    let mut registry = Registry::new();
    let member = registry
        .register(MemberCreate::new("  bob ", "secret", "profile"))
        .unwrap();
    assert_eq!(member.handle(), "bob");

    registry.add_book(book(creds(" bob ", "secret"), "Dune")).unwrap();
    assert_eq!(
        registry.review_book(review(creds(" bob ", "secret"), "Dune", 3.0, "ok")),
        Err(RegistryError::AuthenticationFailed)
    );
    assert_eq!(
        registry.review_book(review(creds("bob", "secret"), "Dune", 3.0, "ok")),
        Ok(3.0)
    );
}

// =============================================================================
// Items
// =============================================================================

#[test]
fn test_titles_collide_within_a_variant_only() {
    let mut registry = setup();
    let ada = creds("ada", "secret1");

    registry.add_film(film(ada.clone(), "X")).unwrap();
    registry.add_book(book(ada.clone(), "x")).unwrap();
    assert_eq!(
        registry.add_film(film(ada.clone(), " x ")),
        Err(RegistryError::DuplicateFilm(" x ".to_string()))
    );
    assert!(matches!(
        registry.add_book(book(ada, "DUNE")),
        Err(RegistryError::DuplicateBook(_))
    ));
    assert_eq!(
        registry.summary(),
        RegistrySummary {
            members: 2,
            books: 2,
            films: 1,
        }
    );
}

#[test]
fn test_negative_counts_are_invalid() {
    let mut registry = setup();
    let bad_book = BookCreate::new(creds("ada", "secret1"), "Neuromancer", "SF", "Gibson", -1);
    assert!(matches!(
        registry.add_book(bad_book),
        Err(RegistryError::InvalidInput(_))
    ));
    let bad_film = FilmCreate::new(creds("ada", "secret1"), "Alien", "SF", "Scott", "O'Bannon", -5);
    assert!(matches!(
        registry.add_film(bad_film),
        Err(RegistryError::InvalidInput(_))
    ));

    let free = BookCreate::new(creds("ada", "secret1"), "Blank", "Notes", "Nobody", 0);
    assert_eq!(registry.add_book(free), Ok(()));
}

#[test]
fn test_check_order_invalid_then_auth_then_duplicate() {
    let mut registry = setup();

    // Unknown member and blank title: the input error wins.
    assert!(matches!(
        registry.add_book(book(creds("nobody", "secret9"), "  ")),
        Err(RegistryError::InvalidInput(_))
    ));
    // Unknown member and duplicate title: the authentication error wins.
    assert_eq!(
        registry.add_book(book(creds("nobody", "secret9"), "Dune")),
        Err(RegistryError::AuthenticationFailed)
    );
    // Bad rating on an unknown title: the input error wins.
    assert!(matches!(
        registry.review_film(review(creds("ada", "secret1"), "Nope", 7.0, "")),
        Err(RegistryError::InvalidInput(_))
    ));
    // Wrong secret on an unknown title: the authentication error wins.
    assert_eq!(
        registry.review_film(review(creds("ada", "wrong"), "Nope", 3.0, "")),
        Err(RegistryError::AuthenticationFailed)
    );
}

// =============================================================================
// Reviews
// =============================================================================

#[test]
fn test_review_upsert_and_average() {
    let mut registry = setup();
    let ada = creds("ada", "secret1");
    let bob = creds("bob", "secret2");

    assert_eq!(
        registry.review_book(review(ada.clone(), "Dune", 4.0, "great")),
        Ok(4.0)
    );
    assert_eq!(
        registry.review_book(review(ada.clone(), "Dune", 2.0, "changed mind")),
        Ok(2.0)
    );

    let dune = registry.find_item(ItemVariant::Book, "Dune").unwrap();
    assert_eq!(dune.reviews().len(), 1);
    assert_eq!(dune.reviews()[0].comment(), "changed mind");

    assert_eq!(registry.review_book(review(bob, "dune ", 5.0, "")), Ok(3.5));
    let dune = registry.find_item(ItemVariant::Book, "Dune").unwrap();
    assert_eq!(dune.reviews().len(), 2);
    assert_eq!(dune.average_rating(), Some(3.5));
}

#[test]
fn test_rating_bounds_are_inclusive() {
    let mut registry = setup();
    let ada = creds("ada", "secret1");
    registry.add_film(film(ada.clone(), "Alien")).unwrap();

    for bad in [5.1, -0.1, f32::NAN] {
        assert!(matches!(
            registry.review_film(review(ada.clone(), "Alien", bad, "")),
            Err(RegistryError::InvalidInput(_))
        ));
    }
    assert_eq!(registry.review_film(review(ada.clone(), "Alien", 0.0, "")), Ok(0.0));
    assert_eq!(registry.review_film(review(ada, "Alien", 5.0, "")), Ok(5.0));
}

#[test]
fn test_review_targets_the_requested_variant() {
    let mut registry = setup();
    assert_eq!(
        registry.review_film(review(creds("ada", "secret1"), "Dune", 4.0, "")),
        Err(RegistryError::ItemNotFound {
            kind: ItemVariant::Film,
            title: "Dune".to_string(),
        })
    );
}

#[test]
fn test_failed_operations_leave_state_unchanged() {
    let mut registry = setup();
    registry
        .review_book(review(creds("ada", "secret1"), "Dune", 4.0, "great"))
        .unwrap();
    let before = registry.to_string();

    let _ = registry.register(MemberCreate::new("ADA", "secret", "again"));
    let _ = registry.add_book(book(creds("ada", "wrong"), "Other"));
    let _ = registry.add_film(film(creds("ada", "secret1"), ""));
    let _ = registry.review_book(review(creds("ada", "secret1"), "Dune", 9.0, "nope"));
    let _ = registry.review_book(review(creds("bob", "wrong"), "Dune", 1.0, "nope"));

    assert_eq!(registry.to_string(), before);
    assert_eq!(registry.member_count(), 2);
    assert_eq!(registry.book_count(), 1);
    assert_eq!(registry.film_count(), 0);
}

#[test]
fn test_absent_review_fields_are_invalid() {
    let mut registry = setup();
    let before = registry.to_string();

    let no_comment = ReviewCreate {
        comment: None,
        ..review(creds("ada", "secret1"), "Dune", 4.0, "")
    };
    let no_title = ReviewCreate {
        title: None,
        ..review(creds("ada", "secret1"), "Dune", 4.0, "great")
    };
    let no_secret = ReviewCreate {
        credentials: Credentials {
            secret: None,
            ..creds("ada", "secret1")
        },
        ..review(creds("ada", "secret1"), "Dune", 4.0, "great")
    };
    for params in [no_comment, no_title, no_secret] {
        assert!(matches!(
            registry.review_book(params),
            Err(RegistryError::InvalidInput(_))
        ));
    }
    assert_eq!(registry.to_string(), before);
}

#[test]
fn test_absent_book_fields_are_invalid_before_authentication() {
    let mut registry = setup();
    let unknown = creds("nobody", "secret9");

    let no_author = BookCreate {
        author: None,
        ..book(unknown.clone(), "Neuromancer")
    };
    let no_genre = BookCreate {
        genre: None,
        ..book(unknown, "Neuromancer")
    };
    for params in [no_author, no_genre] {
        assert!(matches!(
            registry.add_book(params),
            Err(RegistryError::InvalidInput(_))
        ));
    }
    assert_eq!(registry.book_count(), 1);
}

// =============================================================================
// Search and rendering
// =============================================================================

#[test]
fn test_search_ignores_case_and_surrounding_blanks() {
    let mut registry = setup();
    let ada = creds("ada", "secret1");
    registry.add_book(book(ada.clone(), "Solaris ")).unwrap();
    registry.add_film(film(ada, "SOLARIS")).unwrap();

    let results: Vec<String> = registry
        .search(&ItemQuery::titled("solaris"))
        .unwrap()
        .collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].contains("Titre : Solaris \n"));
    assert!(results[0].contains("Auteur : Frank Herbert"));
    assert!(results[1].contains("Réalisateur : Denis Villeneuve"));
}

#[test]
fn test_search_is_restartable() {
    let registry = setup();
    let search = registry.search(&ItemQuery::titled("dune")).unwrap();
    let first: Vec<String> = search.clone().collect();
    let second: Vec<String> = search.collect();
    assert_eq!(first.len(), 1);
    assert_eq!(first, second);
}

#[test]
fn test_registry_rendering() {
    let mut registry = setup();
    registry
        .review_book(review(creds("bob", "secret2"), "Dune", 3.5, "dense"))
        .unwrap();

    let expected = "Le SocialNetwork est composé des éléments suivants:\n\
        \nMEMBRES (2) : \n\
        ada : reads a lot\n\
        bob : watches a lot\n\
        \nLIVRES (1) : \n\
        \nTitre : Dune\nGenre : SF\nAuteur : Frank Herbert\nNombre de pages : 412\n\
        Note moyenne : 3.5/5 \nAvis : \n\
        Avis de bob : \nNote : 3.5/5 \nCommentaire : dense\n\
        \nFILMS (0) : \n";
    assert_eq!(registry.to_string(), expected);
}
