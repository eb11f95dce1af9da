use crate::commands::CmdResult;
use crate::error::Result;
use crate::roster::RosterStore;
use crate::store::KeyValueStore;
use crate::view::{derive_view, ViewFilter};

pub fn run<S: KeyValueStore>(
    roster: &RosterStore<S>,
    filter: &ViewFilter,
    query: &str,
) -> Result<CmdResult> {
    let listed = derive_view(roster.all(), filter, query)
        .into_iter()
        .cloned()
        .collect();
    Ok(CmdResult::default().with_listed_people(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::view::{PassportFilter, RoleFilter};

    #[test]
    fn lists_visible_people_in_name_order() {
        let roster = RosterStore::load(InMemoryStore::new());
        let result = run(&roster, &ViewFilter::default(), "").unwrap();
        let ids: Vec<&str> = result.listed_people.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2", "c1"]);
    }

    #[test]
    fn applies_filters_and_search() {
        let roster = RosterStore::load(InMemoryStore::new());
        let filter = ViewFilter::new(RoleFilter::Students, PassportFilter::Yes);
        let result = run(&roster, &filter, "john").unwrap();
        assert_eq!(result.listed_people.len(), 1);

        let none = run(&roster, &filter, "smith").unwrap();
        assert!(none.listed_people.is_empty());
    }
}
