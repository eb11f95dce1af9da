use crate::commands::{CmdMessage, CmdResult, PersonChanges};
use crate::error::{Result, RosterError};
use crate::model::PersonInput;
use crate::roster::RosterStore;
use crate::store::KeyValueStore;

/// Pre-fills from the stored record, applies `changes`, and saves the result
/// through the normal update path.
pub fn run<S: KeyValueStore>(
    roster: &mut RosterStore<S>,
    id: &str,
    changes: PersonChanges,
) -> Result<CmdResult> {
    let current = roster
        .get(id)
        .ok_or_else(|| RosterError::NotFound(id.to_string()))?;
    let input = changes.apply(PersonInput::from_person(current));
    let person = roster.update(id, input)?;

    let message = CmdMessage::success(format!("Updated ({}): {}", person.id, person.name));
    Ok(CmdResult::default()
        .with_affected_people(vec![person])
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{default_seed, Role};
    use crate::store::memory::InMemoryStore;

    fn seeded() -> RosterStore<InMemoryStore> {
        RosterStore::load(InMemoryStore::new())
    }

    #[test]
    fn unspecified_fields_keep_their_values() {
        let mut roster = seeded();
        let changes = PersonChanges {
            passport: Some(true),
            ..PersonChanges::default()
        };
        let result = run(&mut roster, "s1", changes).unwrap();

        let mut expected = default_seed().remove(0);
        expected.passport = true;
        assert_eq!(result.affected_people[0], expected);
        assert_eq!(roster.get("s1"), Some(&expected));
    }

    #[test]
    fn empty_string_clears_optional_field() {
        let mut roster = seeded();
        let changes = PersonChanges {
            email: Some(String::new()),
            ..PersonChanges::default()
        };
        run(&mut roster, "s2", changes).unwrap();
        assert_eq!(roster.get("s2").unwrap().email, None);
    }

    #[test]
    fn role_change_drops_guardian() {
        let mut roster = seeded();
        let changes = PersonChanges {
            role: Some(Role::Chaperone),
            ..PersonChanges::default()
        };
        run(&mut roster, "s1", changes).unwrap();
        assert_eq!(roster.get("s1").unwrap().guardian_email, None);
    }

    #[test]
    fn unknown_id_fails() {
        let mut roster = seeded();
        let err = run(&mut roster, "nope", PersonChanges::default()).unwrap_err();
        assert!(matches!(err, RosterError::NotFound(_)));
    }

    #[test]
    fn blank_name_fails_without_changes() {
        let mut roster = seeded();
        let changes = PersonChanges {
            name: Some("  ".to_string()),
            ..PersonChanges::default()
        };
        assert!(run(&mut roster, "c1", changes).is_err());
        assert_eq!(roster.all(), default_seed().as_slice());
    }
}
