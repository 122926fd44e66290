//! justica get command

use clap::Args;
use std::io::Write;

use justica_domain::HeroId;

use crate::{view, Repository};

#[derive(Debug, Args)]
pub struct GetCommand {
    /// Id of the hero to show
    pub id: HeroId,
}

impl GetCommand {
    pub fn run(&self, repository: &mut Repository, out: &mut impl Write) -> anyhow::Result<()> {
        match repository.get(&self.id)? {
            Some(hero) => {
                writeln!(out, "{}", view::hero_detail(&hero))?;
                Ok(())
            }
            None => anyhow::bail!("No hero registered with id {}", self.id),
        }
    }
}
