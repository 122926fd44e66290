//! # CRUD da Justica Use Case Layer
//!
//! Application-specific rules.
//! This layer orchestrates the flow of data between callers and stores.

pub mod hero_form;
pub mod hero_repository;

pub use justica_domain;

pub use hero_form::{FormError, HeroForm, DEBUT_FORMAT};
pub use hero_repository::HeroRepository;
