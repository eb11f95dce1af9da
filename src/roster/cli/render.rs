//! Terminal output for people and command messages.
//!
//! Renderers return `String`s so they can be tested; the handlers print them.
//! Column widths are measured with `unicode-width` before any color is
//! applied, so ANSI escapes never skew the layout.

use colored::{ColoredString, Colorize};
use roster::api::{CmdMessage, MessageLevel};
use roster::model::{Person, Role};
use unicode_width::UnicodeWidthStr;

const ABSENT: &str = "—";
const GAP: &str = "  ";
const HEADERS: [&str; 6] = ["ID", "Name", "Role", "Email", "Guardian Email", "Passport"];

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", render_message(message));
    }
}

pub fn render_message(message: &CmdMessage) -> ColoredString {
    match message.level {
        MessageLevel::Info => message.content.dimmed(),
        MessageLevel::Success => message.content.green(),
        MessageLevel::Warning => message.content.yellow(),
    }
}

pub fn member_count(n: usize) -> String {
    format!("{} Member{}", n, if n == 1 { "" } else { "s" })
}

fn cells(person: &Person) -> [String; 6] {
    [
        person.id.clone(),
        person.name.clone(),
        person.role.to_string(),
        person.email().unwrap_or(ABSENT).to_string(),
        person.guardian().unwrap_or(ABSENT).to_string(),
        if person.passport { "Yes" } else { "No" }.to_string(),
    ]
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

fn style_cell(column: usize, padded: String, person: &Person) -> ColoredString {
    match column {
        0 => padded.dimmed(),
        1 => padded.bold(),
        2 if person.role == Role::Chaperone => padded.cyan(),
        5 if person.passport => padded.green(),
        5 => padded.red(),
        _ if padded.trim() == ABSENT => padded.dimmed().italic(),
        _ => padded.normal(),
    }
}

/// The roster table followed by the member count, or "No people found.".
pub fn render_people_table(people: &[Person]) -> String {
    if people.is_empty() {
        return format!("No people found.\n{}\n", member_count(0));
    }

    let rows: Vec<[String; 6]> = people.iter().map(cells).collect();
    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad(h, *w).bold().underline().to_string())
        .collect();
    out.push_str(header.join(GAP).trim_end());
    out.push('\n');

    for (person, row) in people.iter().zip(rows) {
        let line: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(column, (cell, w))| style_cell(column, pad(cell, *w), person).to_string())
            .collect();
        out.push_str(line.join(GAP).trim_end());
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&member_count(people.len()));
    out.push('\n');
    out
}

/// One person as labelled lines, for `show`.
pub fn render_person(person: &Person) -> String {
    let labels = ["ID", "Name", "Role", "Email", "Guardian Email", "Passport"];
    let values = cells(person);
    let label_width = labels.iter().map(|l| l.width()).max().unwrap_or(0);

    labels
        .iter()
        .zip(values.iter())
        .filter(|(label, _)| person.is_student() || **label != "Guardian Email")
        .map(|(label, value)| format!("{}  {}\n", pad(label, label_width).bold(), value))
        .collect()
}
