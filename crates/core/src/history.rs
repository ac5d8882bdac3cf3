// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::state::Dataset;

/// A linear history of dataset snapshots with a current-position pointer.
///
/// The history is never empty: entry 0 is the initial dataset. The live
/// dataset always equals `states[current]` between commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedDataset {
    states: Vec<Dataset>,
    current: usize,
}

impl VersionedDataset {
    /// Creates a history holding only `initial`.
    #[must_use]
    pub fn new(initial: Dataset) -> Self {
        Self {
            states: vec![initial],
            current: 0,
        }
    }

    /// Returns the dataset at the current pointer.
    #[must_use]
    pub fn live(&self) -> &Dataset {
        // The pointer is kept in bounds by every mutator below.
        &self.states[self.current]
    }

    /// Records `next` as the newest snapshot.
    ///
    /// Any snapshots after the current pointer are discarded first, so a
    /// commit following an undo permanently invalidates redo.
    pub fn commit(&mut self, next: Dataset) {
        self.states.truncate(self.current + 1);
        self.states.push(next);
        self.current = self.states.len() - 1;
    }

    /// Moves the pointer back one snapshot.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NoPriorState` if the pointer is at entry 0.
    pub fn undo(&mut self) -> Result<&Dataset, CoreError> {
        if !self.can_undo() {
            return Err(CoreError::NoPriorState);
        }
        self.current -= 1;
        Ok(self.live())
    }

    /// Moves the pointer forward one snapshot.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NoNextState` if the pointer is at the newest entry.
    pub fn redo(&mut self) -> Result<&Dataset, CoreError> {
        if !self.can_redo() {
            return Err(CoreError::NoNextState);
        }
        self.current += 1;
        Ok(self.live())
    }

    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.current > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.current + 1 < self.states.len()
    }

    /// Replaces the whole history with a single entry. Not undoable.
    pub fn reset(&mut self, data: Dataset) {
        self.states = vec![data];
        self.current = 0;
    }

    /// Returns the number of snapshots held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false; a history holds at least its initial entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }
}

impl Default for VersionedDataset {
    fn default() -> Self {
        Self::new(Dataset::new())
    }
}
