//! # Review Registry
//!
//! An in-memory registry where members publish books and films and review them,
//! one review per member per item, with a running average rating per item.
//!
//! ## Module Tour
//!
//! ### 1. The Data ([`model`])
//! Members, items and reviews, plus the request payloads that create them.
//! Payload fields are optional: a missing value is an input error, not a panic.
//!
//! ### 2. The Rules ([`registry`])
//! [`Registry`](registry::Registry) owns every member and item and enforces
//! validation, authentication, uniqueness and the one-review-per-member rule.
//! It is plain synchronous code.
//!
//! ### 3. The Output ([`render`])
//! `Display` implementations for members, reviews, items and the whole registry.
//!
//! ### 4. The Actor ([`registry_actor`], [`clients`], [`lifecycle`])
//! A Tokio task owns the registry and applies requests one at a time, so any
//! number of callers can share it. [`RegistryClient`](clients::RegistryClient)
//! gives them a typed async API; [`RegistrySystem`](lifecycle::RegistrySystem)
//! starts and stops the whole thing.
//!
//! ### 5. Settings ([`config`])
//! [`RegistryConfig`](config::RegistryConfig), from defaults or the environment.
//!
//! ## Quick Start
//!
//! ```rust
//! use review_registry::model::{BookCreate, Credentials, MemberCreate, ReviewCreate};
//! use review_registry::registry::Registry;
//!
//! let mut registry = Registry::new();
//! registry.register(MemberCreate::new("ada", "secret", "likes maths"))?;
//!
//! let ada = Credentials::new("ada", "secret");
//! registry.add_book(BookCreate::new(ada.clone(), "Dune", "SF", "Frank Herbert", 412))?;
//! let average = registry.review_book(ReviewCreate::new(ada, "dune", 4.5, "classic"))?;
//! assert_eq!(average, 4.5);
//! # Ok::<(), review_registry::registry::RegistryError>(())
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod registry;
pub mod registry_actor;
pub mod render;
