//! HeroRepository - The object callers hold
//!
//! ```text
//! caller ──► HeroRepository ──► PagingPolicy (clamp against store size)
//!                         └───► HeroStore    (physical read/write)
//! ```
//!
//! Binds one store to one paging policy. Swapping the store never
//! changes callers.

use core::ops::RangeInclusive;

use justica_domain::model::hero::{Hero, HeroDraft, HeroId};
use justica_domain::repository::hero_store::{HeroStore, StoreError};
use justica_domain::service::paging::PagingPolicy;
use tracing::{debug, warn};

/// Repository facade over any [`HeroStore`]
#[derive(Debug)]
pub struct HeroRepository<S> {
    store: S,
    paging: PagingPolicy,
}

impl<S: HeroStore> HeroRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            paging: PagingPolicy::new(),
        }
    }

    /// Register a new hero.
    ///
    /// Returns `Ok(false)` without writing if the id is already taken.
    pub fn register(&mut self, hero: Hero) -> Result<bool, StoreError> {
        if self.store.contains(hero.id())? {
            warn!(id = %hero.id(), "Rejected hero with an id that is already registered");
            return Ok(false);
        }
        self.store.register(hero)
    }

    /// Heroes on the requested page, after clamping page and rows
    pub fn get_page(&mut self, page: i64, rows: i64) -> Result<Vec<Hero>, StoreError> {
        let page = self.paging.validate(page, rows, self.store.size());
        debug!(
            page = page.number(),
            rows = page.rows(),
            last_page = self.paging.last_page(),
            "Reading hero page"
        );
        self.store.get_page(page)
    }

    /// Find a hero by ID
    pub fn get(&self, id: &HeroId) -> Result<Option<Hero>, StoreError> {
        self.store.get(id)
    }

    /// Replace the fields of a hero; the id never changes
    pub fn update(&mut self, id: &HeroId, draft: HeroDraft) -> Result<bool, StoreError> {
        let updated = self.store.update(id, draft)?;
        if !updated {
            warn!(id = %id, "Update skipped: hero is not registered");
        }
        Ok(updated)
    }

    /// Remove a hero
    pub fn delete(&mut self, id: &HeroId) -> Result<bool, StoreError> {
        let deleted = self.store.delete(id)?;
        if !deleted {
            warn!(id = %id, "Delete skipped: hero is not registered");
        }
        Ok(deleted)
    }

    // ========== Navigation ==========

    /// Re-read the current page with the current rows per page
    pub fn current(&mut self) -> Result<Vec<Hero>, StoreError> {
        self.get_page(self.current_page() as i64, self.rows_per_page() as i64)
    }

    /// Move one page forward, stopping at the last page
    pub fn next_page(&mut self) -> Result<Vec<Hero>, StoreError> {
        self.get_page(self.current_page() as i64 + 1, self.rows_per_page() as i64)
    }

    /// Move one page back, stopping at the first page
    pub fn previous_page(&mut self) -> Result<Vec<Hero>, StoreError> {
        self.get_page(self.current_page() as i64 - 1, self.rows_per_page() as i64)
    }

    // ========== Read-back ==========

    pub fn size(&self) -> usize {
        self.store.size()
    }

    pub fn current_page(&self) -> usize {
        self.paging.current_page()
    }

    pub fn rows_per_page(&self) -> usize {
        self.paging.rows_per_page()
    }

    pub fn last_page(&self) -> usize {
        self.paging.last_page()
    }

    pub fn page_range(&self) -> RangeInclusive<usize> {
        self.paging.page_range()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
