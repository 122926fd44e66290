//! Hero - The record every backend stores
//!
//! Hero is an Entity (has identity).
//! The id is assigned by the caller before registration and never
//! changes afterwards. Updates replace the whole record by value,
//! always carrying the original id forward.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a Hero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeroId(Uuid);

impl HeroId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh random id
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for HeroId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl core::str::FromStr for HeroId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

impl core::fmt::Display for HeroId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Hero - A registered hero
///
/// Serialized with camelCase field names; `debut` is an ISO calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    /// Unique identifier (Entity identity)
    id: HeroId,
    /// Name of the secret identity
    alias: String,
    /// Date the hero was first seen
    debut: NaiveDate,
    /// First name of the person behind the alias
    first_name: String,
    /// Last name of the person behind the alias
    last_name: String,
}

impl Hero {
    /// Create a new Hero
    pub fn new(
        id: HeroId,
        alias: impl Into<String>,
        debut: NaiveDate,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            alias: alias.into(),
            debut,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> &HeroId {
        &self.id
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn debut(&self) -> NaiveDate {
        self.debut
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// The descriptive fields of this hero, detached from its identity
    pub fn draft(&self) -> HeroDraft {
        HeroDraft {
            alias: self.alias.clone(),
            debut: self.debut,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// The four descriptive fields of a hero, without an identity.
///
/// Used as the replacement value of an update: the store combines it
/// with the id of the record being replaced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeroDraft {
    pub alias: String,
    pub debut: NaiveDate,
    pub first_name: String,
    pub last_name: String,
}

impl HeroDraft {
    pub fn new(
        alias: impl Into<String>,
        debut: NaiveDate,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            alias: alias.into(),
            debut,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Bind these field values to an identity
    pub fn into_hero(self, id: HeroId) -> Hero {
        Hero {
            id,
            alias: self.alias,
            debut: self.debut,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}
