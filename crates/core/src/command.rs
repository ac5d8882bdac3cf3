// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::context::ContextId;
use socialcare_domain::{EventPatch, NewEvent, Volunteer, VolunteerPatch};
use std::num::NonZeroUsize;

/// A one-based position in a filtered view.
///
/// Only positivity is checked at parse time. Whether the index addresses an
/// entry is decided against the view at execution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(NonZeroUsize);

impl Index {
    /// Creates an index from a one-based position. Returns `None` for zero.
    #[must_use]
    pub const fn from_one_based(position: usize) -> Option<Self> {
        match NonZeroUsize::new(position) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    #[must_use]
    pub const fn one_based(&self) -> usize {
        self.0.get()
    }

    #[must_use]
    pub const fn zero_based(&self) -> usize {
        self.0.get() - 1
    }
}

impl std::fmt::Display for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resolved operation, carrying validated arguments as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Context-independent commands.
    Shared(SharedCommand),
    /// Commands of the volunteer vocabulary.
    Volunteer(VolunteerCommand),
    /// Commands of the event vocabulary.
    Event(EventCommand),
    /// Commands of the record vocabulary.
    Record(RecordCommand),
}

impl Command {
    /// Returns true if executing the command commits a new snapshot on success.
    #[must_use]
    pub const fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Volunteer(
                VolunteerCommand::Add { .. }
                    | VolunteerCommand::Edit { .. }
                    | VolunteerCommand::Delete { .. }
                    | VolunteerCommand::Clear
            ) | Self::Event(
                EventCommand::Add { .. }
                    | EventCommand::Edit { .. }
                    | EventCommand::Delete { .. }
                    | EventCommand::Clear
            )
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharedCommand {
    /// List previously entered command lines, most recent first.
    History,
    Undo,
    Redo,
    Exit,
    Help,
    /// Make another context active.
    Switch(ContextId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VolunteerCommand {
    Add {
        volunteer: Volunteer,
    },
    Edit {
        index: Index,
        patch: VolunteerPatch,
    },
    Delete {
        index: Index,
    },
    Select {
        index: Index,
    },
    /// Show volunteers whose name contains any of the keywords as a word.
    Find {
        keywords: Vec<String>,
    },
    List,
    /// Remove every volunteer and every record.
    Clear,
    /// Focus the record view on one volunteer's records.
    Manage {
        index: Index,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventCommand {
    /// Add an event. Its id is assigned at execution time.
    Add {
        event: NewEvent,
    },
    Edit {
        index: Index,
        patch: EventPatch,
    },
    Delete {
        index: Index,
    },
    Select {
        index: Index,
    },
    Find {
        keywords: Vec<String>,
    },
    List,
    Clear,
    /// Focus the record view on one event's records.
    Manage {
        index: Index,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordCommand {
    Find { keywords: Vec<String> },
    List,
}
