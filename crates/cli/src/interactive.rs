//! Interactive REPL mode

use std::io::{self, Write};

use console::style;
use dialoguer::Input;
use justica_domain::{Hero, HeroDraft, HeroId};
use justica_usecase::{HeroForm, DEBUT_FORMAT};
use tracing::{info, warn};

use crate::{view, Repository};

/// Interactive CLI for paging through and editing heroes
pub struct InteractiveCli {
    repository: Repository,
}

impl InteractiveCli {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> anyhow::Result<()> {
        info!(heroes = self.repository.size(), "Starting interactive mode");
        println!("{}", style("CRUD da Justica").bold());
        println!("Type /help for commands, /quit to exit");
        println!();

        self.show(|repo| repo.current())?;

        loop {
            print!(
                "[page {}/{}] > ",
                self.repository.current_page(),
                self.repository.last_page()
            );
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let input = input.trim();

            if input.is_empty() {
                continue;
            }

            match self.handle_command(input) {
                Ok(true) => break,
                Ok(false) => continue,
                Err(e) => {
                    warn!(command = input, error = %e, "Interactive command failed");
                    println!("Error: {}", e);
                }
            }
        }

        Ok(())
    }

    fn handle_command(&mut self, input: &str) -> anyhow::Result<bool> {
        let (cmd, rest) = match input.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input, ""),
        };

        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Goodbye!");
                return Ok(true);
            }
            "/help" | "/h" => {
                println!("Commands:");
                println!("  /list            - Show the current page");
                println!("  /next, /prev     - Move one page forward or back");
                println!("  /page <n>        - Jump to a page");
                println!("  /rows <n>        - Heroes per page (10-100)");
                println!("  /get <id>        - Show one hero");
                println!("  /add [a|d|f|l]   - Register a hero (prompts when no fields given)");
                println!("  /edit <id>       - Replace a hero's fields");
                println!("  /delete <id>     - Delete a hero");
                println!("  /status          - Show repository status");
                println!("  /quit            - Exit");
            }
            "/list" | "/ls" => self.show(|repo| repo.current())?,
            "/next" | "/n" => self.show(|repo| repo.next_page())?,
            "/prev" | "/p" => self.show(|repo| repo.previous_page())?,
            "/page" => {
                let page: i64 = rest.parse()?;
                let rows = self.repository.rows_per_page() as i64;
                self.show(|repo| repo.get_page(page, rows))?;
            }
            "/rows" => {
                let rows: i64 = rest.parse()?;
                let page = self.repository.current_page() as i64;
                self.show(|repo| repo.get_page(page, rows))?;
            }
            "/get" => {
                let id: HeroId = rest.parse()?;
                match self.repository.get(&id)? {
                    Some(hero) => println!("{}", view::hero_detail(&hero)),
                    None => println!("No hero registered with id {}", id),
                }
            }
            "/add" => {
                let form = if rest.is_empty() {
                    prompt_form(None)?
                } else {
                    parse_inline_form(rest)?
                };
                let hero = form.into_draft()?.into_hero(HeroId::new_v4());
                println!("{}", self.register(hero)?);
            }
            "/edit" => {
                let id: HeroId = rest.parse()?;
                match self.repository.get(&id)? {
                    Some(hero) => {
                        let draft = prompt_form(Some(&hero))?.into_draft()?;
                        println!("{}", self.update(&id, draft)?);
                    }
                    None => println!("No hero registered with id {}", id),
                }
            }
            "/delete" | "/rm" => {
                let id: HeroId = rest.parse()?;
                if self.repository.delete(&id)? {
                    println!("✓ Deleted {}", id);
                } else {
                    println!("No hero registered with id {}", id);
                }
            }
            "/status" => {
                println!("Status:");
                println!("  Heroes: {}", self.repository.size());
                println!("  {}", view::footer(&self.repository));
            }
            _ => {
                println!("Unknown command: {}", cmd);
            }
        }

        Ok(false)
    }

    fn register(&mut self, hero: Hero) -> anyhow::Result<String> {
        let id = *hero.id();
        if self.repository.register(hero)? {
            Ok(format!("✓ Registered {}", id))
        } else {
            Ok(format!("A hero with id {} is already registered", id))
        }
    }

    fn update(&mut self, id: &HeroId, draft: HeroDraft) -> anyhow::Result<String> {
        if self.repository.update(id, draft)? {
            Ok(format!("✓ Updated {}", id))
        } else {
            Ok(format!("No hero registered with id {}", id))
        }
    }

    fn show(
        &mut self,
        read: impl FnOnce(&mut Repository) -> Result<Vec<Hero>, justica_domain::StoreError>,
    ) -> anyhow::Result<()> {
        let heroes = read(&mut self.repository)?;
        println!("{}", view::page(&heroes, &self.repository));
        Ok(())
    }
}

/// `alias | debut | first name | last name`
fn parse_inline_form(text: &str) -> anyhow::Result<HeroForm> {
    let fields: Vec<&str> = text.split('|').map(str::trim).collect();
    match fields.as_slice() {
        [alias, debut, first_name, last_name] => {
            Ok(HeroForm::new(*alias, *debut, *first_name, *last_name))
        }
        _ => anyhow::bail!(
            "Expected 4 fields separated by '|': alias | debut | first name | last name"
        ),
    }
}

/// Ask for each field, offering the current values when editing
fn prompt_form(current: Option<&Hero>) -> anyhow::Result<HeroForm> {
    let ask = |prompt: &str, default: Option<String>| -> anyhow::Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default);
        }
        Ok(input.interact_text()?)
    };

    Ok(HeroForm {
        alias: ask("Alias", current.map(|h| h.alias().to_string()))?,
        debut: ask(
            "Debut (YYYY-MM-DD)",
            current.map(|h| h.debut().format(DEBUT_FORMAT).to_string()),
        )?,
        first_name: ask("First name", current.map(|h| h.first_name().to_string()))?,
        last_name: ask("Last name", current.map(|h| h.last_name().to_string()))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use justica_adapter::MemoryHeroStore;
    use justica_usecase::HeroRepository;

    fn cli_with(count: usize) -> InteractiveCli {
        let mut cli = InteractiveCli::new(HeroRepository::new(Box::new(MemoryHeroStore::new())));
        for n in 0..count {
            cli.handle_command(&format!("/add Hero {n} | 1940-01-01 | First | Last"))
                .unwrap();
        }
        cli
    }

    // ============== Basic Command Tests ==============

    #[test]
    fn test_handle_quit_commands() {
        let mut cli = cli_with(0);
        for cmd in ["/quit", "/exit", "/q"] {
            assert!(cli.handle_command(cmd).unwrap());
        }
    }

    #[test]
    fn test_handle_help_command() {
        let mut cli = cli_with(0);
        assert!(!cli.handle_command("/help").unwrap());
        assert!(!cli.handle_command("/h").unwrap());
    }

    #[test]
    fn test_handle_unknown_command() {
        let mut cli = cli_with(0);
        assert!(!cli.handle_command("/unknown").unwrap());
        assert!(!cli.handle_command("/").unwrap());
    }

    #[test]
    fn test_handle_status_command() {
        let mut cli = cli_with(3);
        assert!(!cli.handle_command("/status").unwrap());
    }

    // ============== Hero Command Tests ==============

    #[test]
    fn test_inline_add() {
        let cli = cli_with(2);
        assert_eq!(cli.repository().size(), 2);
    }

    #[test]
    fn test_inline_add_rejects_bad_input() {
        let mut cli = cli_with(0);

        assert!(cli.handle_command("/add Only | two").is_err());
        assert!(cli.handle_command("/add Flash | someday | Jay | Garrick").is_err());
        assert_eq!(cli.repository().size(), 0);
    }

    #[test]
    fn test_get_and_delete() {
        let mut cli = cli_with(0);
        cli.handle_command("/add Atom | 1940-10-01 | Al | Pratt").unwrap();
        let mut repo_page = cli.repository.get_page(1, 10).unwrap();
        let id = *repo_page.remove(0).id();

        assert!(!cli.handle_command(&format!("/get {id}")).unwrap());
        assert!(!cli.handle_command(&format!("/delete {id}")).unwrap());
        assert_eq!(cli.repository().size(), 0);

        // Deleting again is a miss, not an error
        assert!(!cli.handle_command(&format!("/delete {id}")).unwrap());
    }

    #[test]
    fn test_register_reports_duplicate_id() {
        let mut cli = cli_with(1);
        let existing = cli.repository.get_page(1, 10).unwrap().remove(0);
        let twin = existing.draft().into_hero(*existing.id());

        let message = cli.register(twin).unwrap();

        assert!(message.contains("already registered"));
        assert!(message.contains(&existing.id().to_string()));
        assert_eq!(cli.repository().size(), 1);
    }

    #[test]
    fn test_update_reports_outcome() {
        let mut cli = cli_with(1);
        let existing = cli.repository.get_page(1, 10).unwrap().remove(0);
        let mut draft = existing.draft();
        draft.alias = "Starman".to_string();

        let message = cli.update(existing.id(), draft.clone()).unwrap();
        assert!(message.starts_with("✓ Updated"));

        let unknown = HeroId::new_v4();
        let message = cli.update(&unknown, draft).unwrap();
        assert_eq!(message, format!("No hero registered with id {}", unknown));
    }

    #[test]
    fn test_bad_id_is_an_error() {
        let mut cli = cli_with(1);
        assert!(cli.handle_command("/get not-an-id").is_err());
        assert!(cli.handle_command("/delete").is_err());
    }

    // ============== Paging Tests ==============

    #[test]
    fn test_next_and_prev_clamp() {
        let mut cli = cli_with(25);

        cli.handle_command("/prev").unwrap();
        assert_eq!(cli.repository().current_page(), 1);

        cli.handle_command("/next").unwrap();
        cli.handle_command("/next").unwrap();
        cli.handle_command("/next").unwrap();
        assert_eq!(cli.repository().current_page(), 3);
    }

    #[test]
    fn test_page_and_rows() {
        let mut cli = cli_with(25);

        cli.handle_command("/page 2").unwrap();
        assert_eq!(cli.repository().current_page(), 2);

        cli.handle_command("/rows 100").unwrap();
        assert_eq!(cli.repository().rows_per_page(), 100);
        assert_eq!(cli.repository().current_page(), 1);

        assert!(cli.handle_command("/page two").is_err());
    }

    #[test]
    fn test_parse_inline_form() {
        let form = parse_inline_form(" Doctor Fate | 1940-07-01 | Kent | Nelson ").unwrap();
        assert_eq!(form, HeroForm::new("Doctor Fate", "1940-07-01", "Kent", "Nelson"));
    }
}
