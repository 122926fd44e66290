//! justica register command

use clap::Args;
use std::io::Write;

use justica_domain::HeroId;
use justica_usecase::HeroForm;

use crate::Repository;

/// The four descriptive hero fields, as flags
#[derive(Debug, Clone, Args)]
pub struct HeroFieldArgs {
    /// Secret identity
    #[arg(short, long)]
    pub alias: String,

    /// First appearance (YYYY-MM-DD)
    #[arg(short, long)]
    pub debut: String,

    /// First name behind the alias
    #[arg(short, long)]
    pub first_name: String,

    /// Last name behind the alias
    #[arg(short, long)]
    pub last_name: String,
}

impl HeroFieldArgs {
    pub fn to_form(&self) -> HeroForm {
        HeroForm::new(&self.alias, &self.debut, &self.first_name, &self.last_name)
    }
}

#[derive(Debug, Args)]
pub struct RegisterCommand {
    #[command(flatten)]
    pub fields: HeroFieldArgs,

    /// Use this id instead of generating one
    #[arg(long)]
    pub id: Option<HeroId>,
}

impl RegisterCommand {
    pub fn run(&self, repository: &mut Repository, out: &mut impl Write) -> anyhow::Result<()> {
        let draft = self.fields.to_form().into_draft()?;
        let id = self.id.unwrap_or_else(HeroId::new_v4);

        if !repository.register(draft.into_hero(id))? {
            anyhow::bail!("A hero with id {} is already registered", id);
        }

        writeln!(out, "✓ Registered {} ({})", self.fields.alias.trim(), id)?;
        Ok(())
    }
}
