use crate::config::RosterConfig;
use crate::model::{Person, PersonInput, Role};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod copy;
pub mod edit;
pub mod list;
pub mod remove;
pub mod select;
pub mod show;

#[derive(Debug, Clone)]
pub struct RosterPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_people: Vec<Person>,
    pub listed_people: Vec<Person>,
    /// Composed address list, when a copy produced one.
    pub emails: Option<String>,
    pub config: Option<RosterConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_people(mut self, people: Vec<Person>) -> Self {
        self.affected_people = people;
        self
    }

    pub fn with_listed_people(mut self, people: Vec<Person>) -> Self {
        self.listed_people = people;
        self
    }

    pub fn with_emails(mut self, emails: String) -> Self {
        self.emails = Some(emails);
        self
    }

    pub fn with_config(mut self, config: RosterConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

/// Field overrides for an edit. `None` keeps the current value; for the
/// optional addresses, `Some("")` clears them.
#[derive(Debug, Clone, Default)]
pub struct PersonChanges {
    pub name: Option<String>,
    pub role: Option<Role>,
    pub email: Option<String>,
    pub guardian_email: Option<String>,
    pub passport: Option<bool>,
}

impl PersonChanges {
    pub fn apply(self, mut input: PersonInput) -> PersonInput {
        if let Some(name) = self.name {
            input.name = name;
        }
        if let Some(role) = self.role {
            input.role = role;
        }
        if let Some(email) = self.email {
            input.email = Some(email);
        }
        if let Some(guardian) = self.guardian_email {
            input.guardian_email = Some(guardian);
        }
        if let Some(passport) = self.passport {
            input.passport = passport;
        }
        input
    }
}
