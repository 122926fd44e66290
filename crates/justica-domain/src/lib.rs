//! # CRUD da Justica Domain Layer
//!
//! Hero records, the paging policy and the storage port.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Hero, HeroId, HeroDraft, Page                 ││
//! │  │  repository/- HeroStore trait (not implementations)         ││
//! │  │  service/   - PagingPolicy                                  ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here opens a file. Switching from a JSON file to memory (or
//! to a database) never changes this crate.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    hero::{Hero, HeroDraft, HeroId},
    page::Page,
};

pub use repository::hero_store::{HeroStore, StoreError};

pub use service::paging::{PagingPolicy, FIRST_PAGE, MAX_ROWS_PER_PAGE, MIN_ROWS_PER_PAGE};
