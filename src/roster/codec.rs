//! Text format of the saved roster.
//!
//! Writing is plain serde. Reading is lenient: the saved text may come from
//! older builds or from hand edits, so records are decoded field by field
//! from a [`serde_json::Value`] instead of failing the whole load.

use crate::error::{Result, RosterError};
use crate::model::{normalize_optional, Person, Role};
use serde_json::Value;
use std::collections::HashSet;

pub fn encode_roster(people: &[Person]) -> Result<String> {
    serde_json::to_string_pretty(people).map_err(RosterError::Serialization)
}

/// Decodes saved roster text.
///
/// Returns `None` when the text is not JSON or its top level is not an array;
/// the caller keeps its default roster in that case. Records that lack a
/// usable `id` or `name`, or repeat an earlier `id`, are skipped.
pub fn decode_roster(text: &str) -> Option<Vec<Person>> {
    let parsed: Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("Ignoring unreadable saved roster: {}", e);
            return None;
        }
    };

    let Value::Array(records) = parsed else {
        log::warn!("Ignoring saved roster: top level is not a list");
        return None;
    };

    let mut seen = HashSet::new();
    let mut people = Vec::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        match decode_person(record) {
            Some(person) if seen.insert(person.id.clone()) => people.push(person),
            Some(person) => log::warn!("Skipping duplicate id {} at {}", person.id, position),
            None => log::warn!("Skipping malformed roster record at {}", position),
        }
    }
    Some(people)
}

fn decode_person(record: &Value) -> Option<Person> {
    let fields = record.as_object()?;

    let id = fields.get("id").and_then(text_field)?;
    let name = fields.get("name").and_then(Value::as_str)?;
    if name.trim().is_empty() {
        return None;
    }

    let role = match fields.get("role").and_then(Value::as_str) {
        Some(r) if r.eq_ignore_ascii_case("chaperone") => Role::Chaperone,
        _ => Role::Student,
    };

    Some(Person {
        id,
        name: name.to_string(),
        role,
        email: optional_string(fields.get("email")),
        guardian_email: optional_string(fields.get("guardianEmail")),
        passport: fields.get("passport").is_some_and(truthy),
    })
}

/// Ids written by other tools are sometimes numbers.
fn text_field(value: &Value) -> Option<String> {
    let id = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

fn optional_string(value: Option<&Value>) -> Option<String> {
    normalize_optional(value.and_then(Value::as_str).map(str::to_string))
}

/// JavaScript truthiness.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
