use crate::commands::CmdResult;
use crate::error::{Result, RosterError};
use crate::roster::RosterStore;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(roster: &RosterStore<S>, id: &str) -> Result<CmdResult> {
    let person = roster
        .get(id)
        .cloned()
        .ok_or_else(|| RosterError::NotFound(id.to_string()))?;
    Ok(CmdResult::default().with_listed_people(vec![person]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn shows_one_person() {
        let roster = RosterStore::load(InMemoryStore::new());
        let result = run(&roster, "c1").unwrap();
        assert_eq!(result.listed_people[0].name, "Mr. Smith");
        assert!(run(&roster, "zz").is_err());
    }
}
