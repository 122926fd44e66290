//! justica delete command

use clap::Args;
use std::io::Write;

use justica_domain::HeroId;

use crate::Repository;

#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Id of the hero to delete
    pub id: HeroId,
}

impl DeleteCommand {
    pub fn run(&self, repository: &mut Repository, out: &mut impl Write) -> anyhow::Result<()> {
        if !repository.delete(&self.id)? {
            anyhow::bail!("No hero registered with id {}", self.id);
        }

        writeln!(out, "✓ Deleted {}", self.id)?;
        Ok(())
    }
}
