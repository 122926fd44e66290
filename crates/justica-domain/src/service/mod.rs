//! Domain Services - Logic shared by every backend

pub mod paging;
