//! CLI Commands

pub mod delete;
pub mod get;
pub mod init;
pub mod list;
pub mod register;
pub mod update;

pub use delete::DeleteCommand;
pub use get::GetCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use register::{HeroFieldArgs, RegisterCommand};
pub use update::UpdateCommand;
