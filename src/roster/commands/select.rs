use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::roster::RosterStore;
use crate::selection::Selection;
use crate::store::KeyValueStore;
use crate::view::{derive_view, visible_ids, ViewFilter};

fn summary(selection: &Selection) -> CmdMessage {
    CmdMessage::info(format!("{} selected", selection.len()))
}

/// Toggles each id. Ids that are not in the roster are rejected before
/// anything changes, so the selection never names a missing person.
pub fn toggle<S: KeyValueStore, I: AsRef<str>>(
    roster: &RosterStore<S>,
    selection: &mut Selection,
    ids: &[I],
) -> Result<CmdResult> {
    let missing = ids
        .iter()
        .map(|id| id.as_ref())
        .find(|id: &&str| !roster.contains(id));
    if let Some(id) = missing {
        return Err(RosterError::NotFound(id.to_string()));
    }
    for id in ids {
        selection.toggle(id.as_ref());
    }
    Ok(CmdResult::default().with_message(summary(selection)))
}

/// Replaces the selection with a snapshot of the currently visible rows.
pub fn select_visible<S: KeyValueStore>(
    roster: &RosterStore<S>,
    selection: &mut Selection,
    filter: &ViewFilter,
    query: &str,
) -> Result<CmdResult> {
    let view = derive_view(roster.all(), filter, query);
    selection.select_all(visible_ids(&view));
    Ok(CmdResult::default().with_message(summary(selection)))
}

pub fn clear(selection: &mut Selection) -> Result<CmdResult> {
    selection.clear();
    Ok(CmdResult::default().with_message(summary(selection)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::view::{PassportFilter, RoleFilter};

    #[test]
    fn toggles_known_ids() {
        let roster = RosterStore::load(InMemoryStore::new());
        let mut selection = Selection::new();
        toggle(&roster, &mut selection, &["s1", "c1"]).unwrap();
        toggle(&roster, &mut selection, &["s1"]).unwrap();
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["c1"]);
    }

    #[test]
    fn rejects_unknown_ids_without_partial_changes() {
        let roster = RosterStore::load(InMemoryStore::new());
        let mut selection = Selection::new();
        let err = toggle(&roster, &mut selection, &["s1", "ghost"]).unwrap_err();
        assert!(matches!(err, RosterError::NotFound(_)));
        assert!(selection.is_empty());
    }

    #[test]
    fn select_visible_is_a_snapshot() {
        let roster = RosterStore::load(InMemoryStore::new());
        let mut selection = Selection::new();
        selection.toggle("c1");

        let filter = ViewFilter::new(RoleFilter::Students, PassportFilter::All);
        select_visible(&roster, &mut selection, &filter, "").unwrap();
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["s1", "s2"]);

        clear(&mut selection).unwrap();
        assert!(selection.is_empty());
    }
}
