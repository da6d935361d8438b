//! # Observability & Tracing
//!
//! Structured logging for the registry and its actor.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function installs a `tracing-subscriber` fmt subscriber.
//! Client calls open a span per request, so events emitted while the actor works
//! on it show up under the caller's span.
//!
//! ## Configuration
//!
//! The level comes from `RUST_LOG` (`EnvFilter::from_default_env`). Output is the
//! compact format without the crate/module prefix (`with_target(false)`).
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup, shutdown and the number of requests handled
//! - **Registry mutations**: accepted at `info`, rejected at `warn` with the reason
//! - **Requests**: every action the actor receives, at `debug`
//!
//! Secrets never reach the logs: the request types redact them in their `Debug`
//! output and the registry never records them as fields.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Accepted and rejected operations
//! RUST_LOG=info cargo run
//!
//! # Also every request with its payload
//! RUST_LOG=debug cargo run
//!
//! # Only the actor plumbing
//! RUST_LOG=actor_framework=debug cargo run
//! ```
//!
//! ## Session Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Starting registry system capacity=32
//! INFO Actor started entity_type="Registry"
//! INFO registration:register_member:perform: Member registered id=member_1 handle="ada" size=1
//! INFO catalog:add_book:perform: Item added variant=book title="Dune"
//! WARN catalog:add_book:perform: Item rejected variant=book title="dune" error=Book already exists: dune
//! ```
//!
//! **With `RUST_LOG=debug`** the payload is visible too, minus the secret:
//!
//! ```text
//! DEBUG registration:register_member: Sending request params=MemberCreate { handle: Some("ada"), secret: Some("<redacted>"), profile: Some("likes maths") }
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Events carry their own fields; module paths are noise
        .compact() // Spans inline, e.g. "registration:register_member"
        .init();
}
