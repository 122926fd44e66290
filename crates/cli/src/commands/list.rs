//! justica list command

use clap::Args;
use std::io::Write;

use justica_domain::{FIRST_PAGE, MIN_ROWS_PER_PAGE};

use crate::{view, Repository};

#[derive(Debug, Args)]
pub struct ListCommand {
    /// Page to show; out-of-range pages are clamped
    #[arg(short, long, default_value_t = FIRST_PAGE as i64, allow_negative_numbers = true)]
    pub page: i64,

    /// Heroes per page (clamped to 10..=100)
    #[arg(short, long, default_value_t = MIN_ROWS_PER_PAGE as i64, allow_negative_numbers = true)]
    pub rows: i64,

    /// Print the page as JSON lines instead of a table
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self, repository: &mut Repository, out: &mut impl Write) -> anyhow::Result<()> {
        let heroes = repository.get_page(self.page, self.rows)?;

        if self.json {
            for hero in &heroes {
                writeln!(out, "{}", serde_json::to_string(hero)?)?;
            }
        } else {
            writeln!(out, "{}", view::page(&heroes, repository))?;
        }
        Ok(())
    }
}
