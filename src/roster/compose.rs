//! # Email Composer
//!
//! Builds comma-joined address lists. Every function walks the roster in its
//! stored order, skips absent addresses, and never deduplicates: two people
//! sharing an address both contribute it.
//!
//! The selected-people variants distinguish two empty outcomes so callers can
//! give different guidance: [`RosterError::EmptySelection`] (nobody chosen) and
//! [`RosterError::NoEmails`] (people chosen, none of them has an address).

use crate::error::{Result, RosterError};
use crate::model::{Person, Role};
use crate::selection::Selection;
use std::fmt;

pub const SEPARATOR: &str = ",";

/// Which role subset of the whole roster to address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    #[default]
    All,
    Students,
    Chaperones,
}

impl Scope {
    fn includes(&self, person: &Person) -> bool {
        match self {
            Scope::All => true,
            Scope::Students => person.role == Role::Student,
            Scope::Chaperones => person.role == Role::Chaperone,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::All => f.write_str("all"),
            Scope::Students => f.write_str("students"),
            Scope::Chaperones => f.write_str("chaperones"),
        }
    }
}

fn join<'a>(addresses: impl Iterator<Item = &'a str>) -> String {
    addresses.collect::<Vec<_>>().join(SEPARATOR)
}

/// Addresses of everyone in `scope`. May be empty.
pub fn compose_all(roster: &[Person], scope: Scope) -> String {
    join(
        roster
            .iter()
            .filter(|p| scope.includes(p))
            .filter_map(Person::email),
    )
}

fn selected<'a>(
    roster: &'a [Person],
    selection: &'a Selection,
) -> Result<impl Iterator<Item = &'a Person>> {
    if selection.is_empty() {
        return Err(RosterError::EmptySelection);
    }
    Ok(roster.iter().filter(move |p| selection.contains(&p.id)))
}

fn non_empty(out: String) -> Result<String> {
    if out.is_empty() {
        Err(RosterError::NoEmails)
    } else {
        Ok(out)
    }
}

pub fn compose_selected(roster: &[Person], selection: &Selection) -> Result<String> {
    let people = selected(roster, selection)?;
    non_empty(join(people.filter_map(Person::email)))
}

/// Like [`compose_selected`], with each student's guardian address right
/// after their own.
pub fn compose_selected_with_guardians(
    roster: &[Person],
    selection: &Selection,
) -> Result<String> {
    let people = selected(roster, selection)?;
    let addresses = people.flat_map(|p| p.email().into_iter().chain(p.guardian()));
    non_empty(join(addresses))
}
