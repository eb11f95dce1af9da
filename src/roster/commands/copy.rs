//! Composes address lists for copying.
//!
//! Composer failures are user mistakes, not program errors: they come back
//! as a warning message with no `emails`, and the caller simply has nothing
//! to put on the clipboard.

use crate::commands::{CmdMessage, CmdResult};
use crate::compose::{compose_all, compose_selected, compose_selected_with_guardians, Scope};
use crate::error::{Result, RosterError};
use crate::roster::RosterStore;
use crate::selection::Selection;
use crate::store::KeyValueStore;

pub fn all<S: KeyValueStore>(roster: &RosterStore<S>, scope: Scope) -> Result<CmdResult> {
    let emails = compose_all(roster.all(), scope);
    if emails.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "No email addresses to copy for {}.",
            scope
        ))));
    }
    Ok(CmdResult::default().with_emails(emails))
}

pub fn selected<S: KeyValueStore>(
    roster: &RosterStore<S>,
    selection: &Selection,
    with_guardians: bool,
) -> Result<CmdResult> {
    let composed = if with_guardians {
        compose_selected_with_guardians(roster.all(), selection)
    } else {
        compose_selected(roster.all(), selection)
    };

    match composed {
        Ok(emails) => Ok(CmdResult::default().with_emails(emails)),
        Err(e @ (RosterError::EmptySelection | RosterError::NoEmails)) => {
            Ok(CmdResult::default().with_message(CmdMessage::warning(e.to_string())))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Role;
    use crate::store::memory::fixtures::{person, StoreFixture};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn copies_scope() {
        let roster = RosterStore::load(InMemoryStore::new());
        let result = all(&roster, Scope::Chaperones).unwrap();
        assert_eq!(result.emails.as_deref(), Some("smith@example.com"));
    }

    #[test]
    fn empty_scope_gives_a_message_instead_of_text() {
        let fixture = StoreFixture::new().with_people(&[person("n", "N", Role::Student, None)]);
        let roster = RosterStore::load(fixture.store);
        let result = all(&roster, Scope::All).unwrap();
        assert!(result.emails.is_none());
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn selected_with_and_without_guardians() {
        let roster = RosterStore::load(InMemoryStore::new());
        let mut selection = Selection::new();
        selection.select_all(["s2"]);

        let plain = selected(&roster, &selection, false).unwrap();
        assert_eq!(plain.emails.as_deref(), Some("john.s@school.org"));

        let family = selected(&roster, &selection, true).unwrap();
        assert_eq!(
            family.emails.as_deref(),
            Some("john.s@school.org,parent.john@example.com")
        );
    }

    #[test]
    fn composer_failures_become_distinct_warnings() {
        let fixture = StoreFixture::new().with_people(&[person("n", "N", Role::Student, None)]);
        let roster = RosterStore::load(fixture.store);

        let empty = selected(&roster, &Selection::new(), true).unwrap();
        assert!(empty.emails.is_none());
        assert_eq!(empty.messages[0].content, "No people selected.");

        let mut selection = Selection::new();
        selection.toggle("n");
        let none = selected(&roster, &selection, false).unwrap();
        assert_eq!(
            none.messages[0].content,
            "No emails available for the selected people."
        );
        assert_eq!(none.messages[0].level, MessageLevel::Warning);
    }
}
