// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use socialcare_domain::{Entity, Event, EventId, Record, Volunteer, VolunteerId};
use std::sync::Arc;

/// An insertion-ordered collection of entities with unique identities.
///
/// Storage is shared between clones and copied only on the first write, so a
/// snapshot that leaves a collection untouched shares it with its predecessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<T> {
    items: Arc<Vec<T>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Arc::new(Vec::new()),
        }
    }
}

impl<T: Entity> Collection<T> {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection, rejecting two entries with the same id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateIdentity` naming the first repeated id.
    pub fn from_vec(items: Vec<T>) -> Result<Self, CoreError> {
        for (position, item) in items.iter().enumerate() {
            let id: T::Id = item.id();
            if items[..position].iter().any(|earlier| earlier.id() == id) {
                return Err(CoreError::DuplicateIdentity {
                    kind: T::KIND,
                    id: id.to_string(),
                });
            }
        }
        Ok(Self {
            items: Arc::new(items),
        })
    }

    /// Returns the entities in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the entities in insertion order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if any entity is the same entity as `candidate`.
    #[must_use]
    pub fn contains(&self, candidate: &T) -> bool {
        self.items.iter().any(|item| item.is_same_entity(candidate))
    }

    /// Returns true if an entity other than the one with `except` is the same
    /// entity as `candidate`.
    #[must_use]
    pub fn conflicts_with(&self, candidate: &T, except: &T::Id) -> bool {
        self.items
            .iter()
            .any(|item| &item.id() != except && item.is_same_entity(candidate))
    }

    /// Looks up an entity by id.
    #[must_use]
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| &item.id() == id)
    }

    /// Returns true if both collections share the same storage.
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    pub(crate) fn push(&mut self, item: T) {
        Arc::make_mut(&mut self.items).push(item);
    }

    /// Replaces the entity with `id`, keeping its position.
    pub(crate) fn replace(&mut self, id: &T::Id, item: T) -> bool {
        let Some(position) = self.items.iter().position(|existing| &existing.id() == id) else {
            return false;
        };
        Arc::make_mut(&mut self.items)[position] = item;
        true
    }

    pub(crate) fn remove(&mut self, id: &T::Id) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        Arc::make_mut(&mut self.items).retain(|existing| &existing.id() != id);
        true
    }

    pub(crate) fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        if self.items.iter().all(&mut keep) {
            return;
        }
        Arc::make_mut(&mut self.items).retain(keep);
    }

    pub(crate) fn clear(&mut self) {
        self.items = Arc::new(Vec::new());
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A record joined with the volunteer and event it refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedRecord<'a> {
    pub record: &'a Record,
    pub volunteer: Option<&'a Volunteer>,
    pub event: Option<&'a Event>,
}

/// One immutable version of the three entity collections.
///
/// Every record refers to a volunteer and an event present in the same
/// dataset. Operations that remove volunteers or events also remove the
/// records that refer to them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    volunteers: Collection<Volunteer>,
    events: Collection<Event>,
    records: Collection<Record>,
}

impl Dataset {
    /// Creates an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dataset from loaded entities.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateIdentity` if two entities of one kind
    /// share an id, or `CoreError::DanglingRecord` if a record names a
    /// volunteer or event that is not present.
    pub fn from_parts(
        volunteers: Vec<Volunteer>,
        events: Vec<Event>,
        records: Vec<Record>,
    ) -> Result<Self, CoreError> {
        let volunteers: Collection<Volunteer> = Collection::from_vec(volunteers)?;
        let events: Collection<Event> = Collection::from_vec(events)?;
        let records: Collection<Record> = Collection::from_vec(records)?;

        for record in &records {
            if volunteers.get(record.volunteer_id()).is_none()
                || events.get(&record.event_id()).is_none()
            {
                return Err(CoreError::DanglingRecord(record.id()));
            }
        }

        Ok(Self {
            volunteers,
            events,
            records,
        })
    }

    #[must_use]
    pub const fn volunteers(&self) -> &Collection<Volunteer> {
        &self.volunteers
    }

    #[must_use]
    pub const fn events(&self) -> &Collection<Event> {
        &self.events
    }

    #[must_use]
    pub const fn records(&self) -> &Collection<Record> {
        &self.records
    }

    /// Returns the id the next added event receives, or `None` once the
    /// largest id in use is `u32::MAX`.
    #[must_use]
    pub fn next_event_id(&self) -> Option<EventId> {
        self.events
            .iter()
            .map(Event::event_id)
            .max()
            .map_or(Some(EventId::FIRST), |id| id.next())
    }

    /// Sums the hours of every record for the given volunteer.
    #[must_use]
    pub fn total_hours(&self, volunteer_id: &VolunteerId) -> u32 {
        self.records
            .iter()
            .filter(|record| record.volunteer_id() == volunteer_id)
            .map(|record| record.hour().value())
            .fold(0_u32, u32::saturating_add)
    }

    /// Joins a record with the volunteer and event it refers to.
    #[must_use]
    pub fn join<'a>(&'a self, record: &'a Record) -> JoinedRecord<'a> {
        JoinedRecord {
            record,
            volunteer: self.volunteers.get(record.volunteer_id()),
            event: self.events.get(&record.event_id()),
        }
    }

    /// Joins every record with its volunteer and event.
    #[must_use]
    pub fn joined_records(&self) -> Vec<JoinedRecord<'_>> {
        self.records.iter().map(|record| self.join(record)).collect()
    }

    pub(crate) fn add_volunteer(&mut self, volunteer: Volunteer) {
        self.volunteers.push(volunteer);
    }

    pub(crate) fn add_event(&mut self, event: Event) {
        self.events.push(event);
    }

    pub(crate) fn replace_volunteer(&mut self, id: &VolunteerId, volunteer: Volunteer) -> bool {
        self.volunteers.replace(id, volunteer)
    }

    pub(crate) fn replace_event(&mut self, id: EventId, event: Event) -> bool {
        self.events.replace(&id, event)
    }

    /// Removes a volunteer and every record that refers to it.
    pub(crate) fn remove_volunteer(&mut self, id: &VolunteerId) -> bool {
        if !self.volunteers.remove(id) {
            return false;
        }
        self.records.retain(|record| record.volunteer_id() != id);
        true
    }

    /// Removes an event and every record that refers to it.
    pub(crate) fn remove_event(&mut self, id: EventId) -> bool {
        if !self.events.remove(&id) {
            return false;
        }
        self.records.retain(|record| record.event_id() != id);
        true
    }

    pub(crate) fn clear_volunteers(&mut self) {
        self.volunteers.clear();
        self.records.clear();
    }

    pub(crate) fn clear_events(&mut self) {
        self.events.clear();
        self.records.clear();
    }
}
