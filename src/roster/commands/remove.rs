use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::RosterStore;
use crate::selection::Selection;
use crate::store::KeyValueStore;

/// Removes each id and prunes it from the selection. Unknown ids are
/// reported but change nothing.
pub fn run<S: KeyValueStore, I: AsRef<str>>(
    roster: &mut RosterStore<S>,
    selection: &mut Selection,
    ids: &[I],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let id = id.as_ref();
        match roster.remove(id) {
            Some(person) => {
                selection.prune(&person.id);
                result.add_message(CmdMessage::success(format!(
                    "Removed ({}): {}",
                    person.id, person.name
                )));
                result.affected_people.push(person);
            }
            None => result.add_message(CmdMessage::info(format!("No person with id {}", id))),
        }
    }

    Ok(result)
}
