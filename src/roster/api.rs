//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for roster operations, whatever the UI.
//!
//! A [`RosterApi`] is one session: it owns the [`RosterStore`] and the
//! [`Selection`]. Filter and search state belong to the caller and are passed
//! in per call. Keeping both owned stores here lets `remove_people` prune the
//! selection without the roster store ever knowing a selection exists.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O**: no stdout, stderr, prompts, or clipboard access
//!
//! ## Generic Over KeyValueStore
//!
//! - Production: `RosterApi<FileStore>`
//! - Testing: `RosterApi<InMemoryStore>`

use crate::commands;
use crate::compose::Scope;
use crate::error::Result;
use crate::model::{Person, PersonInput};
use crate::roster::RosterStore;
use crate::selection::Selection;
use crate::store::KeyValueStore;
use crate::view::ViewFilter;

pub struct RosterApi<S: KeyValueStore> {
    roster: RosterStore<S>,
    selection: Selection,
    paths: commands::RosterPaths,
}

impl<S: KeyValueStore> RosterApi<S> {
    /// Loads the saved roster from `store` (or the default seed) and starts
    /// with an empty selection.
    pub fn new(store: S, paths: commands::RosterPaths) -> Self {
        Self {
            roster: RosterStore::load(store),
            selection: Selection::new(),
            paths,
        }
    }

    pub fn people(&self) -> &[Person] {
        self.roster.all()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn add_person(&mut self, input: PersonInput) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.roster, input)
    }

    pub fn edit_person(
        &mut self,
        id: &str,
        changes: commands::PersonChanges,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.roster, id, changes)
    }

    pub fn remove_people<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.roster, &mut self.selection, ids)
    }

    pub fn show_person(&self, id: &str) -> Result<commands::CmdResult> {
        commands::show::run(&self.roster, id)
    }

    pub fn list_people(&self, filter: &ViewFilter, query: &str) -> Result<commands::CmdResult> {
        commands::list::run(&self.roster, filter, query)
    }

    pub fn toggle_selected<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        commands::select::toggle(&self.roster, &mut self.selection, ids)
    }

    pub fn select_visible(&mut self, filter: &ViewFilter, query: &str) -> Result<commands::CmdResult> {
        commands::select::select_visible(&self.roster, &mut self.selection, filter, query)
    }

    pub fn clear_selection(&mut self) -> Result<commands::CmdResult> {
        commands::select::clear(&mut self.selection)
    }

    pub fn copy_all(&self, scope: Scope) -> Result<commands::CmdResult> {
        commands::copy::all(&self.roster, scope)
    }

    pub fn copy_selected(&self, with_guardians: bool) -> Result<commands::CmdResult> {
        commands::copy::selected(&self.roster, &self.selection, with_guardians)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, PersonChanges, RosterPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn api() -> RosterApi<InMemoryStore> {
        RosterApi::new(
            InMemoryStore::new(),
            RosterPaths {
                data_dir: PathBuf::from("/nonexistent"),
            },
        )
    }

    #[test]
    fn remove_prunes_the_session_selection() {
        let mut api = api();
        api.toggle_selected(&["s1", "s2"]).unwrap();
        api.remove_people(&["s1"]).unwrap();
        assert_eq!(api.selection().iter().collect::<Vec<_>>(), vec!["s2"]);
    }

    #[test]
    fn selection_survives_filtering_it_out_of_view() {
        let mut api = api();
        api.toggle_selected(&["c1"]).unwrap();
        let filter = ViewFilter::new(crate::view::RoleFilter::Students, Default::default());
        let listed = api.list_people(&filter, "").unwrap();
        assert!(listed.listed_people.iter().all(|p| p.id != "c1"));

        let copied = api.copy_selected(false).unwrap();
        assert_eq!(copied.emails.as_deref(), Some("smith@example.com"));
    }

    #[test]
    fn full_flow_add_select_visible_copy() {
        let mut api = api();
        let added = api
            .add_person(
                PersonInput::new("Zed Student", Role::Student)
                    .with_email("zed@x")
                    .with_guardian("zed.parent@x")
                    .with_passport(true),
            )
            .unwrap();
        let id = added.affected_people[0].id.clone();

        let filter = ViewFilter::new(Default::default(), crate::view::PassportFilter::Yes);
        api.select_visible(&filter, "").unwrap();
        assert!(api.selection().contains(&id));
        assert!(api.selection().contains("s2"));

        let copied = api.copy_selected(true).unwrap();
        assert_eq!(
            copied.emails.as_deref(),
            Some("john.s@school.org,parent.john@example.com,zed@x,zed.parent@x")
        );
    }

    #[test]
    fn cleared_selection_copies_nothing() {
        let mut api = api();
        api.toggle_selected(&["s1", "c1"]).unwrap();
        api.clear_selection().unwrap();
        assert!(api.selection().is_empty());

        let copied = api.copy_selected(false).unwrap();
        assert_eq!(copied.emails, None);
        assert_eq!(copied.messages[0].level, MessageLevel::Warning);
        assert_eq!(copied.messages[0].content, "No people selected.");
    }

    #[test]
    fn copy_all_dispatches_scope() {
        let api = api();
        let result = api.copy_all(Scope::Students).unwrap();
        assert_eq!(
            result.emails.as_deref(),
            Some("jane.s@school.org,john.s@school.org")
        );
    }
}
