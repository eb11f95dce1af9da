//! # View Derivation
//!
//! [`derive_view`] turns the roster plus the current filter and search query
//! into the list of rows to display. It is a pure function of its inputs and
//! is recomputed in full on every call.
//!
//! The three narrowing steps (role, passport, text search) commute; only the
//! final ordering is fixed: ascending by name under Unicode collation (CLDR
//! root), ignoring case, with ties kept in roster order.

use crate::model::{Person, Role};
use feruca::Collator;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoleFilter {
    #[default]
    All,
    Students,
    Chaperone,
}

impl RoleFilter {
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Students => person.role == Role::Student,
            RoleFilter::Chaperone => person.role == Role::Chaperone,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PassportFilter {
    #[default]
    All,
    Yes,
    No,
}

impl PassportFilter {
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            PassportFilter::All => true,
            PassportFilter::Yes => person.passport,
            PassportFilter::No => !person.passport,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewFilter {
    pub role: RoleFilter,
    pub passport: PassportFilter,
}

impl ViewFilter {
    pub fn new(role: RoleFilter, passport: PassportFilter) -> Self {
        Self { role, passport }
    }
}

/// Case-folded haystack for text search. Guardian emails only take part for
/// students.
fn search_text(person: &Person) -> String {
    format!(
        "{} {} {}",
        person.name,
        person.email().unwrap_or(""),
        person.guardian().unwrap_or("")
    )
    .to_lowercase()
}

pub fn matches_query(person: &Person, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    q.is_empty() || search_text(person).contains(&q)
}

pub fn derive_view<'a>(roster: &'a [Person], filter: &ViewFilter, query: &str) -> Vec<&'a Person> {
    let q = query.trim().to_lowercase();

    let mut visible: Vec<&Person> = roster
        .iter()
        .filter(|p| filter.role.matches(p))
        .filter(|p| filter.passport.matches(p))
        .filter(|p| q.is_empty() || search_text(p).contains(&q))
        .collect();

    sort_by_name(&mut visible);
    visible
}

/// Orders people the way a reader expects names in a list: "Ángel" sits next
/// to "Angela", not after "Zoe". Names are folded to lowercase first so case
/// never decides; the sort is stable, so equal names keep their order.
pub fn sort_by_name(people: &mut Vec<&Person>) {
    let mut collator = Collator::default();
    let mut keyed: Vec<(String, &Person)> = people
        .drain(..)
        .map(|p| (p.name.to_lowercase(), p))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| collator.collate(a.as_str(), b.as_str()));
    people.extend(keyed.into_iter().map(|(_, p)| p));
}

/// Snapshot of the ids in a derived view, for "select all visible".
pub fn visible_ids(view: &[&Person]) -> BTreeSet<String> {
    view.iter().map(|p| p.id.clone()).collect()
}
