//! Test vector loading infrastructure for the Fernet token format.
//!
//! Provides serde-deserializable structs for the vector JSON under
//! `.test-vectors/` and a `load()` function that deserializes the embedded
//! file via `include_str!`. The deterministic vectors include the canonical
//! token from the published format specification, so implementations
//! validated against them interoperate with the reference Python
//! implementation.
//!
//! # Usage
//!
//! ```rust
//! let vectors = fernet_test_vectors::token::load();
//! for v in &vectors.deterministic_token_vectors {
//!     // ... encrypt v.plaintext with v.secret / v.iv / v.timestamp and
//!     // compare against v.token
//! }
//! ```

pub mod token;

pub use token::TokenVectors;
