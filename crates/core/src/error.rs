// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use socialcare_domain::{DomainError, EntityKind, RecordKey};

/// Stable classification of every failure the engine reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Switch target is not a known context.
    UnknownContext,
    /// Command word is not in the shared or active vocabulary.
    UnknownCommand,
    /// Command word is known but its arguments are malformed.
    InvalidCommandFormat,
    /// An edit named no field to change.
    NothingToEdit,
    /// Index is outside the currently filtered view.
    InvalidDisplayedIndex,
    /// The resulting entity collides with an existing one.
    DuplicateEntity,
    /// Undo requested at the first history entry.
    NoPriorState,
    /// Redo requested at the last history entry.
    NoNextState,
    /// The dataset is inconsistent, or has no room for the change.
    InvalidData,
}

impl ErrorKind {
    /// Returns the stable code for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownContext => "UNKNOWN_CONTEXT",
            Self::UnknownCommand => "UNKNOWN_COMMAND",
            Self::InvalidCommandFormat => "INVALID_COMMAND_FORMAT",
            Self::NothingToEdit => "NOTHING_TO_EDIT",
            Self::InvalidDisplayedIndex => "INVALID_DISPLAYED_INDEX",
            Self::DuplicateEntity => "DUPLICATE_ENTITY",
            Self::NoPriorState => "NO_PRIOR_STATE",
            Self::NoNextState => "NO_NEXT_STATE",
            Self::InvalidData => "INVALID_DATA",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while resolving or executing a command.
///
/// Every variant is recoverable: a failed command leaves the history, the
/// live collections and the context untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The requested context id is not recognised.
    UnknownContext(String),
    /// The command word is not recognised in the active context.
    UnknownCommand(String),
    /// The arguments do not match the command's expected shape.
    InvalidCommandFormat {
        /// Usage text of the command that failed to parse.
        usage: &'static str,
        /// The field-level problem, when a single field was at fault.
        cause: Option<DomainError>,
    },
    /// An edit command carried no field markers.
    NothingToEdit {
        /// Usage text of the edit command.
        usage: &'static str,
    },
    /// The index does not address an entry of the filtered view.
    InvalidDisplayedIndex {
        /// Which view was addressed.
        kind: EntityKind,
        /// The one-based index that was given.
        index: usize,
        /// The size of the filtered view at execution time.
        shown: usize,
    },
    /// The result would duplicate an existing entity.
    DuplicateEntity(EntityKind),
    /// There is no earlier snapshot to restore.
    NoPriorState,
    /// There is no later snapshot to restore.
    NoNextState,
    /// Two entities of one kind share an identity in a supplied dataset.
    DuplicateIdentity {
        /// The kind of the colliding entities.
        kind: EntityKind,
        /// The shared identity.
        id: String,
    },
    /// A record refers to a volunteer or event that does not exist.
    DanglingRecord(RecordKey),
    /// The largest event id is already in use, so no new event can be added.
    EventIdsExhausted,
}

impl CoreError {
    /// Returns the taxonomy kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownContext(_) => ErrorKind::UnknownContext,
            Self::UnknownCommand(_) => ErrorKind::UnknownCommand,
            Self::InvalidCommandFormat { .. } => ErrorKind::InvalidCommandFormat,
            Self::NothingToEdit { .. } => ErrorKind::NothingToEdit,
            Self::InvalidDisplayedIndex { .. } => ErrorKind::InvalidDisplayedIndex,
            Self::DuplicateEntity(_) => ErrorKind::DuplicateEntity,
            Self::NoPriorState => ErrorKind::NoPriorState,
            Self::NoNextState => ErrorKind::NoNextState,
            Self::DuplicateIdentity { .. }
            | Self::DanglingRecord(_)
            | Self::EventIdsExhausted => ErrorKind::InvalidData,
        }
    }

    /// Builds an `InvalidCommandFormat` error with no field cause.
    #[must_use]
    pub const fn invalid_format(usage: &'static str) -> Self {
        Self::InvalidCommandFormat { usage, cause: None }
    }

    /// Returns the usage text carried by this error, if any.
    #[must_use]
    pub const fn usage(&self) -> Option<&'static str> {
        match self {
            Self::InvalidCommandFormat { usage, .. } | Self::NothingToEdit { usage } => {
                Some(*usage)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownContext(id) => write!(
                f,
                "Unknown context '{id}': use -v (volunteers), -e (events) or -r (records)"
            ),
            Self::UnknownCommand(word) => write!(f, "Unknown command '{word}'"),
            Self::InvalidCommandFormat {
                usage,
                cause: Some(cause),
            } => write!(f, "Invalid command format! {cause}\n{usage}"),
            Self::InvalidCommandFormat { usage, cause: None } => {
                write!(f, "Invalid command format!\n{usage}")
            }
            Self::NothingToEdit { usage } => {
                write!(f, "At least one field to edit must be provided.\n{usage}")
            }
            Self::InvalidDisplayedIndex { kind, index, shown } => write!(
                f,
                "The {kind} index provided is invalid: {index} is outside the {shown} {kind}(s) shown"
            ),
            Self::DuplicateEntity(kind) => write!(f, "This {kind} already exists"),
            Self::NoPriorState => write!(f, "No more commands to undo!"),
            Self::NoNextState => write!(f, "No more commands to redo!"),
            Self::DuplicateIdentity { kind, id } => {
                write!(f, "More than one {kind} has the id '{id}'")
            }
            Self::DanglingRecord(key) => write!(
                f,
                "Record {key} refers to a volunteer or event that does not exist"
            ),
            Self::EventIdsExhausted => write!(
                f,
                "No event id is left to assign: the largest event id is already in use"
            ),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidCommandFormat {
                cause: Some(cause), ..
            } => Some(cause),
            _ => None,
        }
    }
}
