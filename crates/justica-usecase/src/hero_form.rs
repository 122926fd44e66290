//! HeroForm - Raw hero input, validated into a [`HeroDraft`]

use chrono::NaiveDate;
use justica_domain::model::hero::HeroDraft;
use thiserror::Error;

/// Expected text format of the debut date
pub const DEBUT_FORMAT: &str = "%Y-%m-%d";

/// Every problem found in a form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid hero: {}", .problems.join("; "))]
pub struct FormError {
    pub problems: Vec<String>,
}

/// Hero fields as typed by a user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroForm {
    pub alias: String,
    pub debut: String,
    pub first_name: String,
    pub last_name: String,
}

impl HeroForm {
    pub fn new(
        alias: impl Into<String>,
        debut: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            alias: alias.into(),
            debut: debut.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// List every problem; empty when the form is valid
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if parse_debut(&self.debut).is_none() {
            problems.push(format!(
                "Invalid debut date. Expected format YYYY-MM-DD, given '{}'",
                self.debut
            ));
        }
        if self.alias.trim().is_empty() {
            problems.push("Alias is required".to_string());
        }
        if self.first_name.trim().is_empty() {
            problems.push("First name is required".to_string());
        }
        if self.last_name.trim().is_empty() {
            problems.push("Last name is required".to_string());
        }

        problems
    }

    pub fn into_draft(self) -> Result<HeroDraft, FormError> {
        let problems = self.validate();
        match parse_debut(&self.debut) {
            Some(debut) if problems.is_empty() => Ok(HeroDraft::new(
                self.alias.trim(),
                debut,
                self.first_name.trim(),
                self.last_name.trim(),
            )),
            _ => Err(FormError { problems }),
        }
    }
}

fn parse_debut(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DEBUT_FORMAT).ok()
}
