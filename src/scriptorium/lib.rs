//! # Scriptorium Architecture
//!
//! Scriptorium is the storage core of a small personal blog: it keeps articles (markdown
//! content plus a little metadata) durably on disk, serves every read from an in-memory
//! index, and keeps the index and the files consistent while many threads use it at once.
//!
//! HTTP routing, templates, form validation and markdown rendering are the business of
//! whatever embeds this library. The bundled binary is a command-line client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)  /  any web layer                   │
//! │  - Parses input, formats output, owns stdout/stderr         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Create / edit / list / view policy, no I/O assumptions   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - ArticleStore (production), InMemoryStore (testing)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Using the Store Directly
//!
//! ```no_run
//! use scriptorium::model::Article;
//! use scriptorium::store::fs::ArticleStore;
//!
//! # fn main() -> scriptorium::error::Result<()> {
//! let (store, report) = ArticleStore::open("/srv/blog")?;
//! if let Some(err) = report.first_error() {
//!     eprintln!("some articles could not be loaded: {}", err);
//! }
//!
//! store.save(&Article::new("Hello", "# Hi"))?;
//! for article in store.list()?.iter().take(10) {
//!     println!("{} {}", article.meta.creation_date, article.meta.title);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Article`, `ArticleMeta`) and the date format
//! - [`index`]: The in-memory index and listing order
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
