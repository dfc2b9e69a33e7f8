//! Builds the per-issue adjacency table from the issue log.
//!
//! Every log row contributes its `Relations` references to the issue it
//! belongs to; the table holds one row per issue with the sorted union of
//! those references.

use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{LogRow, RelationEntry};

/// Header of the relation table.
pub const RELATION_HEADER: [&str; 3] = ["issue_number", "related_issues", "title"];

/// What [`ensure_relation_table`] did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RelationTableOutcome {
    Created { path: PathBuf, issues: usize },
    AlreadyExists { path: PathBuf },
}

/// Group log rows by issue number.
///
/// Entries come back in order of each issue's first appearance. The title
/// kept is the last one seen; references are unioned across all rows.
/// A reference that is not a valid issue number is skipped with a warning.
pub fn aggregate_relations<R: Read>(log: R) -> DomainResult<Vec<RelationEntry>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(log);
    let mut entries: Vec<RelationEntry> = Vec::new();
    let mut index: HashMap<u64, usize> = HashMap::new();

    for row in reader.deserialize::<LogRow>() {
        let row = row?;
        let slot = *index.entry(row.issue_number).or_insert_with(|| {
            entries.push(RelationEntry::new(row.issue_number, ""));
            entries.len() - 1
        });
        let entry = &mut entries[slot];
        entry.title.clone_from(&row.issue_title);

        for token in row.relation_tokens() {
            match token.parse::<u64>() {
                Ok(number) => {
                    entry.related.insert(number);
                }
                Err(e) => warn!(
                    issue_number = row.issue_number,
                    token,
                    error = %e,
                    "skipping invalid relation reference"
                ),
            }
        }
    }

    Ok(entries)
}

/// Write the adjacency table, header first.
pub fn write_relation_table<W: Write>(entries: &[RelationEntry], out: W) -> DomainResult<W> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    writer.write_record(RELATION_HEADER)?;
    for entry in entries {
        writer.serialize(entry.to_row())?;
    }
    writer
        .into_inner()
        .map_err(|e| DomainError::Io(e.into_error()))
}

/// Create the relation table at `target` from the log at `log_path`,
/// unless `target` already exists.
///
/// An existing file is never touched, however stale. The file is opened
/// create-new, so one appearing between the check and the write is left
/// alone as well.
pub fn ensure_relation_table(log_path: &Path, target: &Path) -> DomainResult<RelationTableOutcome> {
    if target.exists() {
        info!(path = %target.display(), "relation table already exists, skipping creation");
        return Ok(RelationTableOutcome::AlreadyExists {
            path: target.to_path_buf(),
        });
    }
    info!(path = %target.display(), "relation table not found, creating");

    let entries = aggregate_relations(File::open(log_path)?)?;

    let file = match OpenOptions::new().write(true).create_new(true).open(target) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            info!(path = %target.display(), "relation table appeared concurrently, skipping");
            return Ok(RelationTableOutcome::AlreadyExists {
                path: target.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };
    write_relation_table(&entries, file)?;

    info!(path = %target.display(), issues = entries.len(), "relation table written");
    Ok(RelationTableOutcome::Created {
        path: target.to_path_buf(),
        issues: entries.len(),
    })
}
