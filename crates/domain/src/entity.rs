// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// The three kinds of entity kept in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A volunteer.
    Volunteer,
    /// An event volunteers attend.
    Event,
    /// A record linking a volunteer to an event.
    Record,
}

impl EntityKind {
    /// Returns the lowercase singular name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Volunteer => "volunteer",
            Self::Event => "event",
            Self::Record => "record",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable value with a stable identity.
///
/// Entities are never edited in place: an edit builds a new value carrying
/// the same id. Two entities are the same entity when their ids match;
/// `duplicates` adds the kind-specific attribute rule used to reject a
/// second entry describing the same real-world thing under another id.
pub trait Entity: Clone + PartialEq + std::fmt::Debug + std::fmt::Display {
    /// The identity type.
    type Id: Clone + PartialEq + Eq + std::fmt::Debug + std::fmt::Display;

    /// The kind tag for this entity type.
    const KIND: EntityKind;

    /// Returns the identity of this entity.
    fn id(&self) -> Self::Id;

    /// Returns true if `other` describes the same thing by attributes alone.
    fn duplicates(&self, _other: &Self) -> bool {
        false
    }

    /// Returns true if `other` has the same id or duplicates this entity.
    fn is_same_entity(&self, other: &Self) -> bool {
        self.id() == other.id() || self.duplicates(other)
    }
}
