//! # CRUD da Justica Adapter Layer
//!
//! Outbound adapters (Hexagonal Architecture).
//!
//! ## Structure
//!
//! - `repository/json_file` - JSON lines file, rewrite-and-replace mutations
//! - `repository/in_memory` - growable slot array, shift-on-delete

pub mod repository;

pub use repository::in_memory::MemoryHeroStore;
pub use repository::json_file::JsonFileHeroStore;
pub use repository::{open_store, OpenStoreError};
