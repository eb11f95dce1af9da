use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PersonInput;
use crate::roster::RosterStore;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(roster: &mut RosterStore<S>, input: PersonInput) -> Result<CmdResult> {
    let person = roster.add(input)?;
    let message = CmdMessage::success(format!("Added {} ({}): {}", person.role, person.id, person.name));
    Ok(CmdResult::default()
        .with_affected_people(vec![person])
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::model::Role;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn reports_the_new_person() {
        let mut roster = RosterStore::load(InMemoryStore::new());
        let result = run(&mut roster, PersonInput::new("Ada", Role::Chaperone)).unwrap();
        assert_eq!(result.affected_people.len(), 1);
        assert!(result.messages[0].content.contains("Ada"));
        assert!(result.messages[0].content.contains("chaperone"));
    }

    #[test]
    fn empty_name_is_a_validation_error() {
        let mut roster = RosterStore::load(InMemoryStore::new());
        let err = run(&mut roster, PersonInput::default()).unwrap_err();
        assert!(matches!(err, RosterError::Validation(_)));
    }
}
