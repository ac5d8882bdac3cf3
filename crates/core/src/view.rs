// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::Collection;
use socialcare_domain::{Entity, Event, EventId, Record, Volunteer, VolunteerId};
use std::sync::Arc;

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A predicate selecting which entities of a collection are shown.
///
/// The default filter shows everything.
pub struct Filter<T> {
    predicate: Option<Predicate<T>>,
}

impl<T> Filter<T> {
    /// A filter that shows every entity.
    #[must_use]
    pub const fn all() -> Self {
        Self { predicate: None }
    }

    /// A filter that shows the entities matching `predicate`.
    #[must_use]
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Some(Arc::new(predicate)),
        }
    }

    #[must_use]
    pub fn matches(&self, item: &T) -> bool {
        self.predicate.as_ref().is_none_or(|predicate| predicate(item))
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        self.predicate.is_none()
    }
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Self::all()
    }
}

impl<T> Clone for Filter<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_all() {
            f.write_str("Filter(all)")
        } else {
            f.write_str("Filter(predicate)")
        }
    }
}

/// The active filter of each view.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    pub volunteers: Filter<Volunteer>,
    pub events: Filter<Event>,
    pub records: Filter<Record>,
}

/// Returns the entities of `collection` that pass `filter`, in order.
#[must_use]
pub fn filtered<'a, T: Entity>(collection: &'a Collection<T>, filter: &Filter<T>) -> Vec<&'a T> {
    collection.iter().filter(|item| filter.matches(item)).collect()
}

fn lowercase_all(keywords: &[String]) -> Vec<String> {
    keywords.iter().map(|keyword| keyword.to_lowercase()).collect()
}

fn contains_word(text: &str, keywords: &[String]) -> bool {
    text.split_whitespace()
        .any(|word| keywords.iter().any(|keyword| word.to_lowercase() == *keyword))
}

/// Shows volunteers whose name has any keyword as a whole word, ignoring case.
#[must_use]
pub fn volunteer_name_filter(keywords: &[String]) -> Filter<Volunteer> {
    let keywords: Vec<String> = lowercase_all(keywords);
    Filter::new(move |volunteer: &Volunteer| contains_word(volunteer.name().value(), &keywords))
}

/// Shows events whose name has any keyword as a whole word, ignoring case.
#[must_use]
pub fn event_name_filter(keywords: &[String]) -> Filter<Event> {
    let keywords: Vec<String> = lowercase_all(keywords);
    Filter::new(move |event: &Event| contains_word(event.name().value(), &keywords))
}

/// Shows records whose volunteer id or remark matches any keyword.
#[must_use]
pub fn record_keyword_filter(keywords: &[String]) -> Filter<Record> {
    let keywords: Vec<String> = lowercase_all(keywords);
    Filter::new(move |record: &Record| {
        let volunteer_id: String = record.volunteer_id().value().to_lowercase();
        keywords.contains(&volunteer_id) || contains_word(record.remark().value(), &keywords)
    })
}

/// Shows the records of one volunteer.
#[must_use]
pub fn records_of_volunteer(volunteer_id: VolunteerId) -> Filter<Record> {
    Filter::new(move |record: &Record| record.volunteer_id() == &volunteer_id)
}

/// Shows the records of one event.
#[must_use]
pub fn records_of_event(event_id: EventId) -> Filter<Record> {
    Filter::new(move |record: &Record| record.event_id() == event_id)
}
