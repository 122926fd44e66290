//! Domain Models - The vocabulary of CRUD da Justica

pub mod hero;
pub mod page;
