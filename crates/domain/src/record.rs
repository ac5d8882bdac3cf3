// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::entity::{Entity, EntityKind};
use crate::types::{EventId, Hour, Remark, VolunteerId};
use serde::{Deserialize, Serialize};

/// Identifies a record: a volunteer has at most one record per event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey {
    /// The event the hours were contributed to.
    pub event_id: EventId,
    /// The volunteer who contributed them.
    pub volunteer_id: VolunteerId,
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.volunteer_id, self.event_id)
    }
}

/// Hours a volunteer contributed to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    event_id: EventId,
    volunteer_id: VolunteerId,
    hour: Hour,
    #[serde(default)]
    remark: Remark,
}

impl Record {
    /// Creates a record.
    #[must_use]
    pub const fn new(
        event_id: EventId,
        volunteer_id: VolunteerId,
        hour: Hour,
        remark: Remark,
    ) -> Self {
        Self {
            event_id,
            volunteer_id,
            hour,
            remark,
        }
    }

    /// Returns the event this record belongs to.
    #[must_use]
    pub const fn event_id(&self) -> EventId {
        self.event_id
    }

    /// Returns the volunteer this record belongs to.
    #[must_use]
    pub const fn volunteer_id(&self) -> &VolunteerId {
        &self.volunteer_id
    }

    /// Returns the contributed hours.
    #[must_use]
    pub const fn hour(&self) -> Hour {
        self.hour
    }

    /// Returns the remark.
    #[must_use]
    pub const fn remark(&self) -> &Remark {
        &self.remark
    }
}

impl Entity for Record {
    type Id = RecordKey;

    const KIND: EntityKind = EntityKind::Record;

    fn id(&self) -> RecordKey {
        RecordKey {
            event_id: self.event_id,
            volunteer_id: self.volunteer_id.clone(),
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Volunteer {} at event {}: {} hour(s)",
            self.volunteer_id, self.event_id, self.hour
        )?;
        if !self.remark.value().is_empty() {
            write!(f, " Remark: {}", self.remark)?;
        }
        Ok(())
    }
}
