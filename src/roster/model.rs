use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Chaperone,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Chaperone => "chaperone",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "student" | "students" => Ok(Role::Student),
            "chaperone" | "chaperones" => Ok(Role::Chaperone),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Stored as-is; read it through [`Person::guardian`] so chaperones never
    /// surface a stale value.
    #[serde(
        rename = "guardianEmail",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub guardian_email: Option<String>,
    #[serde(default)]
    pub passport: bool,
}

impl Person {
    pub fn is_student(&self) -> bool {
        self.role == Role::Student
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// The guardian address, only ever present for students.
    pub fn guardian(&self) -> Option<&str> {
        if self.is_student() {
            self.guardian_email.as_deref()
        } else {
            None
        }
    }
}

/// Raw field values for an add or an edit, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonInput {
    pub name: String,
    pub role: Role,
    pub email: Option<String>,
    pub guardian_email: Option<String>,
    pub passport: bool,
}

impl PersonInput {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_guardian(mut self, email: impl Into<String>) -> Self {
        self.guardian_email = Some(email.into());
        self
    }

    pub fn with_passport(mut self, passport: bool) -> Self {
        self.passport = passport;
        self
    }

    /// Pre-fills an input from an existing record, the way the edit form does.
    pub fn from_person(person: &Person) -> Self {
        Self {
            name: person.name.clone(),
            role: person.role,
            email: person.email.clone(),
            guardian_email: person.guardian().map(str::to_string),
            passport: person.passport,
        }
    }

    /// Validates the name and normalizes optional fields into a [`Person`]
    /// carrying the given id.
    pub fn into_person(self, id: String) -> Result<Person> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(RosterError::Validation("Please enter a name.".to_string()));
        }

        let guardian_email = match self.role {
            Role::Student => normalize_optional(self.guardian_email),
            Role::Chaperone => None,
        };

        Ok(Person {
            id,
            name,
            role: self.role,
            email: normalize_optional(self.email),
            guardian_email,
            passport: self.passport,
        })
    }
}

/// Empty and whitespace-only strings collapse to `None`.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// The roster a fresh installation starts with.
pub fn default_seed() -> Vec<Person> {
    vec![
        Person {
            id: "s1".to_string(),
            name: "Jane Student".to_string(),
            role: Role::Student,
            email: Some("jane.s@school.org".to_string()),
            guardian_email: Some("parent.jane@example.com".to_string()),
            passport: false,
        },
        Person {
            id: "s2".to_string(),
            name: "John Student".to_string(),
            role: Role::Student,
            email: Some("john.s@school.org".to_string()),
            guardian_email: Some("parent.john@example.com".to_string()),
            passport: true,
        },
        Person {
            id: "c1".to_string(),
            name: "Mr. Smith".to_string(),
            role: Role::Chaperone,
            email: Some("smith@example.com".to_string()),
            guardian_email: None,
            passport: false,
        },
    ]
}
