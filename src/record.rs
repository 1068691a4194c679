//! In-place defancification of records that carry a display name.
//!
//! Collaborators hold entities whose `name` field may contain styled
//! letters. The helpers here rewrite that field in place, preserving the
//! record's identity and every other field, and quietly doing nothing when
//! there is no name to rewrite. The shapes form a closed set: an entity
//! with a name, a row wrapping an optional entity, and a collection of
//! rows that is either flat or grouped under string keys.

use crate::glyph::normalize;
use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An object with a display name (a channel, a thread, a user).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntity {
    /// Stable identifier; never touched by defancification.
    pub id: u64,
    /// Display name; the only field that gets rewritten.
    pub name: String,
}

/// A row wrapping an optional named entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// The wrapped entity, if the row has one.
    pub entity: Option<NamedEntity>,
}

/// A collection of rows, flat or grouped under string keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowSet {
    /// A flat list of rows.
    List(Vec<Row>),
    /// Rows grouped under a key, such as a category id.
    Grouped(BTreeMap<String, Vec<Row>>),
}

/// Folds the entity's name in place. The name is replaced only when the
/// folded text actually differs, so unchanged entities keep their original
/// allocation. Returns `true` if the name was rewritten.
pub fn defancify_entity(entity: &mut NamedEntity) -> bool {
    let folded = normalize(&entity.name);
    if folded.as_ref() != entity.name.as_str() {
        trace!("defancified name {:?} -> {:?}", entity.name, folded);
        entity.name = folded.into_owned();
        true
    } else {
        false
    }
}

/// Folds the name of the row's entity, if it has one.
pub fn defancify_row(row: &mut Row) -> bool {
    match row.entity.as_mut() {
        Some(entity) => defancify_entity(entity),
        None => false,
    }
}

/// Folds every row in the collection. Returns the number of rewritten names.
pub fn defancify_rows(rows: &mut RowSet) -> usize {
    match rows {
        RowSet::List(list) => list
            .iter_mut()
            .map(defancify_row)
            .filter(|&changed| changed)
            .count(),
        RowSet::Grouped(groups) => groups
            .values_mut()
            .flat_map(|list| list.iter_mut())
            .map(defancify_row)
            .filter(|&changed| changed)
            .count(),
    }
}
