//! justica update command

use clap::Args;
use std::io::Write;

use justica_domain::HeroId;

use super::register::HeroFieldArgs;
use crate::Repository;

/// Replace every field of a hero; its id is kept
#[derive(Debug, Args)]
pub struct UpdateCommand {
    /// Id of the hero to update
    pub id: HeroId,

    #[command(flatten)]
    pub fields: HeroFieldArgs,
}

impl UpdateCommand {
    pub fn run(&self, repository: &mut Repository, out: &mut impl Write) -> anyhow::Result<()> {
        let draft = self.fields.to_form().into_draft()?;

        if !repository.update(&self.id, draft)? {
            anyhow::bail!("No hero registered with id {}", self.id);
        }

        writeln!(out, "✓ Updated {}", self.id)?;
        Ok(())
    }
}
