//! Plain-text rendering of heroes and pages

use console::style;
use justica_domain::Hero;
use justica_usecase::DEBUT_FORMAT;

use crate::Repository;

/// Column header matching [`hero_row`]
pub fn header() -> String {
    format!(
        "{:<36}  {:<24}  {:<10}  {:<16}  {}",
        "ID", "ALIAS", "DEBUT", "FIRST NAME", "LAST NAME"
    )
}

/// One hero per line, aligned under [`header`]
pub fn hero_row(hero: &Hero) -> String {
    format!(
        "{:<36}  {:<24}  {:<10}  {:<16}  {}",
        hero.id().to_string(),
        hero.alias(),
        hero.debut().format(DEBUT_FORMAT).to_string(),
        hero.first_name(),
        hero.last_name()
    )
}

/// Multi-line detail view of one hero
pub fn hero_detail(hero: &Hero) -> String {
    format!(
        "{}\n  Id:         {}\n  Debut:      {}\n  First name: {}\n  Last name:  {}",
        style(hero.alias()).bold(),
        hero.id(),
        hero.debut().format(DEBUT_FORMAT),
        hero.first_name(),
        hero.last_name()
    )
}

/// A page of heroes followed by the paging footer
pub fn page(heroes: &[Hero], repository: &Repository) -> String {
    let mut lines = Vec::with_capacity(heroes.len() + 2);

    if heroes.is_empty() {
        lines.push("No heroes registered on this page.".to_string());
    } else {
        lines.push(style(header()).bold().to_string());
        lines.extend(heroes.iter().map(hero_row));
    }
    lines.push(footer(repository));

    lines.join("\n")
}

/// `Page 2 of 3 · 10 per page · 25 heroes · pages: 1 [2] 3`
pub fn footer(repository: &Repository) -> String {
    let pages: Vec<String> = repository
        .page_range()
        .map(|p| {
            if p == repository.current_page() {
                format!("[{}]", p)
            } else {
                p.to_string()
            }
        })
        .collect();

    format!(
        "Page {} of {} · {} per page · {} heroes · pages: {}",
        repository.current_page(),
        repository.last_page(),
        repository.rows_per_page(),
        repository.size(),
        pages.join(" ")
    )
}
