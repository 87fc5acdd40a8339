//! Move records and the undo log

use crate::Direction;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A single applied roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Direction the cube rolled in
    pub direction: Direction,
    /// Cell the cube rolled into
    pub cell: IVec2,
}

/// Ordered log of applied rolls, newest last
///
/// Every successful non-undo roll pushes a record; undo pops one. Reset and
/// scramble clear the log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    /// Create an empty log
    pub fn new() -> Self {
        MoveHistory::default()
    }

    /// Check if the log has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of recorded rolls
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Record a roll
    pub fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    /// Take back the most recent record
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    /// Drop all records
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// All records, oldest first
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }
}
