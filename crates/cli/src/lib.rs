//! # CRUD da Justica CLI
//!
//! One-shot hero commands plus an interactive paging mode.

pub mod commands;
pub mod interactive;
pub mod store;
pub mod view;

use justica_domain::HeroStore;
use justica_usecase::HeroRepository;

/// Repository over whichever backend was selected at startup
pub type Repository = HeroRepository<Box<dyn HeroStore>>;
