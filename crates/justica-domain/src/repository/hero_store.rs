//! Hero Store - Abstract persistence for Heroes
//!
//! Every backend (JSON lines file, growable memory array, ...) realizes
//! this one contract. Paging has already been validated by the time a
//! store sees a [`Page`]; stores only execute the physical read/write.

use thiserror::Error;

use crate::model::hero::{Hero, HeroDraft, HeroId};
use crate::model::page::Page;

/// Errors that can occur during store operations.
///
/// A missing record is never an error: it is `Ok(None)`, `Ok(false)`
/// or an empty page.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store cannot be built on the given location
    #[error("Invalid data file path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// A line of stored data does not decode to a hero
    #[error("Corrupt record on line {line}: {message}")]
    Corrupt { line: usize, message: String },

    /// A hero could not be encoded for storage
    #[error("Failed to encode hero {id}: {message}")]
    Encode { id: HeroId, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Hero Store Trait
///
/// This is a PORT in hexagonal architecture.
/// Reads take `&self`, mutations take `&mut self`: a store instance has
/// a single writer.
pub trait HeroStore {
    /// Register a hero. The id is already assigned by the caller.
    fn register(&mut self, hero: Hero) -> Result<bool, StoreError>;

    /// Read one page of heroes, in the backend's order
    fn get_page(&self, page: Page) -> Result<Vec<Hero>, StoreError>;

    /// Find a hero by ID
    fn get(&self, id: &HeroId) -> Result<Option<Hero>, StoreError>;

    /// Replace the fields of a hero, keeping its id
    fn update(&mut self, id: &HeroId, draft: HeroDraft) -> Result<bool, StoreError>;

    /// Remove a hero
    fn delete(&mut self, id: &HeroId) -> Result<bool, StoreError>;

    /// Count of live records
    fn size(&self) -> usize;

    /// Check if a hero exists
    fn contains(&self, id: &HeroId) -> Result<bool, StoreError> {
        Ok(self.get(id)?.is_some())
    }
}

impl<S: HeroStore + ?Sized> HeroStore for Box<S> {
    fn register(&mut self, hero: Hero) -> Result<bool, StoreError> {
        (**self).register(hero)
    }

    fn get_page(&self, page: Page) -> Result<Vec<Hero>, StoreError> {
        (**self).get_page(page)
    }

    fn get(&self, id: &HeroId) -> Result<Option<Hero>, StoreError> {
        (**self).get(id)
    }

    fn update(&mut self, id: &HeroId, draft: HeroDraft) -> Result<bool, StoreError> {
        (**self).update(id, draft)
    }

    fn delete(&mut self, id: &HeroId) -> Result<bool, StoreError> {
        (**self).delete(id)
    }

    fn size(&self) -> usize {
        (**self).size()
    }

    fn contains(&self, id: &HeroId) -> Result<bool, StoreError> {
        (**self).contains(id)
    }
}
