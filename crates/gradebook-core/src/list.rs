//! The owning, LIFO-ordered record list.
//!
//! Inserting moves a boxed record into the list and makes it the new head.
//! Traversal runs head to tail, so records come back in reverse insertion
//! order. The list is the only owner of its records; they are dropped
//! exactly once, by [`RecordList::release`] or by the list's `Drop`.

use std::collections::VecDeque;
use std::io::Write;

use crate::error::CatalogError;
use crate::record::{Record, RecordView};

/// Lifecycle state of a [`RecordList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Empty,
    NonEmpty,
    /// Torn down; no further inserts or traversals.
    Released,
}

/// An ordered collection that exclusively owns its records.
#[derive(Debug, Default)]
pub struct RecordList {
    // Front is the head.
    records: VecDeque<Box<dyn Record>>,
    released: bool,
}

impl RecordList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ListState {
        if self.released {
            ListState::Released
        } else if self.records.is_empty() {
            ListState::Empty
        } else {
            ListState::NonEmpty
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Take ownership of `record` and make it the head of the list.
    ///
    /// The caller's handle is moved into the list, so the record can no
    /// longer be used or freed independently:
    ///
    /// ```compile_fail
    /// use gradebook_core::{ExamRecord, Record, RecordList};
    ///
    /// let mut list = RecordList::new();
    /// let record: Box<dyn Record> = Box::new(ExamRecord::new());
    /// list.insert(record).unwrap();
    /// println!("{}", record.label());
    /// ```
    pub fn insert(&mut self, record: Box<dyn Record>) -> Result<(), CatalogError> {
        if self.released {
            return Err(CatalogError::Released);
        }
        tracing::debug!(
            kind = %record.kind(),
            label = record.label(),
            position = self.records.len() + 1,
            "inserting record at head"
        );
        self.records.push_front(record);
        Ok(())
    }

    /// Display every record head to tail. Returns how many were displayed.
    ///
    /// An empty list writes nothing.
    pub fn show(&self, out: &mut dyn Write) -> Result<usize, CatalogError> {
        if self.released {
            return Err(CatalogError::Released);
        }
        for record in &self.records {
            record.display(out)?;
        }
        Ok(self.records.len())
    }

    /// Records from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Record> + '_ {
        self.records.iter().map(|r| r.as_ref())
    }

    /// Serializable snapshots of every record, head to tail.
    pub fn views(&self) -> Vec<RecordView> {
        self.iter().map(|r| r.view()).collect()
    }

    /// Drop every owned record and mark the list released.
    ///
    /// Returns the number of records dropped; calling it again returns 0.
    pub fn release(&mut self) -> usize {
        let count = self.records.len();
        while let Some(record) = self.records.pop_front() {
            drop(record);
        }
        if !self.released {
            tracing::debug!(released = count, "record list released");
        }
        self.released = true;
        count
    }
}

impl Drop for RecordList {
    fn drop(&mut self) {
        self.release();
    }
}
