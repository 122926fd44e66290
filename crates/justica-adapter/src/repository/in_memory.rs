//! In-Memory Hero Store
//!
//! A growable array of hero slots, held for the process lifetime only.
//!
//! ```text
//! slots: [ A ][ B ][ C ][   ][   ]
//!          └── occupied ──┘  ▲
//!                            fill pointer (first empty slot)
//! ```
//!
//! The occupied region is always one contiguous run starting at index 0.
//! Delete shifts the tail left instead of leaving a hole, so the size is
//! the index of the first empty slot.

use justica_domain::model::hero::{Hero, HeroDraft, HeroId};
use justica_domain::model::page::Page;
use justica_domain::repository::hero_store::{HeroStore, StoreError};
use tracing::{debug, info};

/// In-memory Hero Store
#[derive(Debug, Clone, Default)]
pub struct MemoryHeroStore {
    slots: Vec<Option<Hero>>,
}

impl MemoryHeroStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `capacity` empty slots up front
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Number of slots, occupied or not
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Index of the first empty slot
    fn fill_pointer(&self) -> usize {
        self.slots
            .iter()
            .position(Option::is_none)
            .unwrap_or(self.slots.len())
    }

    fn occupied(&self) -> impl Iterator<Item = &Hero> {
        self.slots.iter().map_while(Option::as_ref)
    }

    fn position_of(&self, id: &HeroId) -> Option<usize> {
        self.occupied().position(|hero| hero.id() == id)
    }

    fn grow(&mut self) {
        // Capacity 0 doubles from 1, never to 0
        let new_capacity = self.slots.len().max(1) * 2;
        debug!(
            from = self.slots.len(),
            to = new_capacity,
            "Growing memory hero store"
        );
        self.slots.resize(new_capacity, None);
    }
}

impl HeroStore for MemoryHeroStore {
    fn register(&mut self, hero: Hero) -> Result<bool, StoreError> {
        let index = self.fill_pointer();
        if index == self.slots.len() {
            self.grow();
        }

        info!(id = %hero.id(), slot = index, "Registered hero in memory");
        self.slots[index] = Some(hero);
        Ok(true)
    }

    fn get_page(&self, page: Page) -> Result<Vec<Hero>, StoreError> {
        let occupied = self.fill_pointer();
        let skip = page.offset();
        if skip >= occupied {
            return Ok(Vec::new());
        }

        let take = page.end().min(occupied);
        Ok(self.slots[skip..take].iter().flatten().cloned().collect())
    }

    fn get(&self, id: &HeroId) -> Result<Option<Hero>, StoreError> {
        Ok(self.occupied().find(|hero| hero.id() == id).cloned())
    }

    fn update(&mut self, id: &HeroId, draft: HeroDraft) -> Result<bool, StoreError> {
        let Some(index) = self.position_of(id) else {
            return Ok(false);
        };

        self.slots[index] = Some(draft.into_hero(*id));
        info!(id = %id, slot = index, "Updated hero in memory");
        Ok(true)
    }

    fn delete(&mut self, id: &HeroId) -> Result<bool, StoreError> {
        let Some(index) = self.position_of(id) else {
            return Ok(false);
        };

        let occupied = self.fill_pointer();
        // Close the hole: rotate the removed slot to the end of the
        // occupied run, then clear it.
        self.slots[index..occupied].rotate_left(1);
        self.slots[occupied - 1] = None;

        info!(id = %id, slot = index, "Deleted hero from memory");
        Ok(true)
    }

    fn size(&self) -> usize {
        self.fill_pointer()
    }
}
