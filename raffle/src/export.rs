//! Results document for the export boundary.
//!
//! A finished session is handed to the host save facility as a tabular
//! document: a title line naming the event, a two-column header, and one
//! row per drawn participant in draw order. [`ResultsDocument`] owns that
//! shape; [`ResultsDocument::to_csv`] is the serialization the client
//! downloads. Building and serializing the document never touches the
//! engine, so a failed export leaves the session untouched.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use crate::roster::Participant;

/// Column headers for the results table.
pub const EXPORT_HEADER: [&str; 2] = ["Name", "Registration"];

/// A drawn-list snapshot shaped for export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsDocument {
    title: String,
    rows: Vec<[String; 2]>,
}

impl ResultsDocument {
    /// Build a document from the drawn list, preserving draw order. Any
    /// drawn-list length is accepted; an empty list yields a document with
    /// only the title and header.
    #[must_use]
    pub fn new(event_name: &str, drawn: &[Participant]) -> Self {
        Self {
            title: format!("Drawn Participants - {event_name}"),
            rows: drawn
                .iter()
                .map(|p| [p.name.clone(), p.registration.clone()])
                .collect(),
        }
    }

    /// The title line naming the event.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Data rows in draw order, one `[name, registration]` pair each.
    #[must_use]
    pub fn rows(&self) -> &[[String; 2]] {
        &self.rows
    }

    /// Serialize as CSV: the title line, the header row, then the data
    /// rows. Fields containing commas, quotes, or line breaks are quoted
    /// with embedded quotes doubled.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        out.push_str(&csv_field(&self.title));
        out.push('\n');
        out.push_str(&csv_row(EXPORT_HEADER[0], EXPORT_HEADER[1]));
        for row in &self.rows {
            out.push_str(&csv_row(&row[0], &row[1]));
        }
        out
    }
}

fn csv_row(first: &str, second: &str) -> String {
    format!("{},{}\n", csv_field(first), csv_field(second))
}

fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}
