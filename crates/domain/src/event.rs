// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::entity::{Entity, EntityKind};
use crate::types::{Description, EventDate, EventId, EventTime, Location, Name, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An event volunteers can attend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    name: Name,
    location: Location,
    start_date: EventDate,
    end_date: EventDate,
    start_time: EventTime,
    end_time: EventTime,
    description: Description,
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

/// The validated fields of an event that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    /// Event name.
    pub name: Name,
    /// Event location.
    pub location: Location,
    /// First day of the event.
    pub start_date: EventDate,
    /// Last day of the event.
    pub end_date: EventDate,
    /// Start time on the first day.
    pub start_time: EventTime,
    /// End time on the last day.
    pub end_time: EventTime,
    /// Event description.
    pub description: Description,
    /// Event tags.
    pub tags: BTreeSet<Tag>,
}

impl NewEvent {
    /// Assigns `id` and produces the event.
    #[must_use]
    pub fn with_id(self, id: EventId) -> Event {
        Event {
            id,
            name: self.name,
            location: self.location,
            start_date: self.start_date,
            end_date: self.end_date,
            start_time: self.start_time,
            end_time: self.end_time,
            description: self.description,
            tags: self.tags,
        }
    }
}

impl Event {
    /// Returns the event id.
    #[must_use]
    pub const fn event_id(&self) -> EventId {
        self.id
    }

    /// Returns the event name.
    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the event location.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Returns the first day of the event.
    #[must_use]
    pub const fn start_date(&self) -> EventDate {
        self.start_date
    }

    /// Returns the last day of the event.
    #[must_use]
    pub const fn end_date(&self) -> EventDate {
        self.end_date
    }

    /// Returns the start time.
    #[must_use]
    pub const fn start_time(&self) -> EventTime {
        self.start_time
    }

    /// Returns the end time.
    #[must_use]
    pub const fn end_time(&self) -> EventTime {
        self.end_time
    }

    /// Returns the event description.
    #[must_use]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// Returns the event tags.
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }
}

impl Entity for Event {
    type Id = EventId;

    const KIND: EntityKind = EntityKind::Event;

    fn id(&self) -> EventId {
        self.id
    }

    fn duplicates(&self, other: &Self) -> bool {
        self.name == other.name
            && self.location == other.location
            && self.start_date == other.start_date
            && self.start_time == other.start_time
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] Location: {} From: {} {} To: {} {} Description: {} Tags: ",
            self.name,
            self.id,
            self.location,
            self.start_date,
            self.start_time,
            self.end_date,
            self.end_time,
            self.description
        )?;
        for tag in &self.tags {
            write!(f, "[{tag}]")?;
        }
        Ok(())
    }
}

/// The fields an edit replaces on an event.
///
/// Every `None` keeps the existing value. The id is not editable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    /// Replacement name.
    pub name: Option<Name>,
    /// Replacement location.
    pub location: Option<Location>,
    /// Replacement start date.
    pub start_date: Option<EventDate>,
    /// Replacement end date.
    pub end_date: Option<EventDate>,
    /// Replacement start time.
    pub start_time: Option<EventTime>,
    /// Replacement end time.
    pub end_time: Option<EventTime>,
    /// Replacement description.
    pub description: Option<Description>,
    /// Replacement tag set. `Some(empty)` clears all tags.
    pub tags: Option<BTreeSet<Tag>>,
}

impl EventPatch {
    /// Returns true if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.location.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.description.is_none()
            && self.tags.is_none()
    }

    /// Builds the edited event, keeping `original`'s id.
    #[must_use]
    pub fn apply_to(&self, original: &Event) -> Event {
        Event {
            id: original.id,
            name: self.name.clone().unwrap_or_else(|| original.name.clone()),
            location: self
                .location
                .clone()
                .unwrap_or_else(|| original.location.clone()),
            start_date: self.start_date.unwrap_or(original.start_date),
            end_date: self.end_date.unwrap_or(original.end_date),
            start_time: self.start_time.unwrap_or(original.start_time),
            end_time: self.end_time.unwrap_or(original.end_time),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| original.description.clone()),
            tags: self.tags.clone().unwrap_or_else(|| original.tags.clone()),
        }
    }
}
