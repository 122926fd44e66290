//! Store Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define HOW the domain wants to persist heroes,
//! but NOT how it's actually done. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait HeroStore       │  JsonFileHeroStore
//!   fn register()       │  MemoryHeroStore
//!   fn get_page()       │  (relational, external)
//! ```

pub mod hero_store;
