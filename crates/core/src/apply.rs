// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure application of scoped commands to a dataset.
//!
//! Nothing here touches history or context. A successful mutation returns the
//! next dataset for the caller to commit; reads return `None` in its place.

use crate::command::{EventCommand, Index, RecordCommand, VolunteerCommand};
use crate::context::ContextId;
use crate::error::CoreError;
use crate::outcome::Notification;
use crate::state::{Collection, Dataset};
use crate::view::{
    Filter, Filters, event_name_filter, filtered, record_keyword_filter, records_of_event,
    records_of_volunteer, volunteer_name_filter,
};
use socialcare_domain::{Entity, EntityKind, Event, EventId, Volunteer, VolunteerId};

/// The effect of applying a command.
#[derive(Debug, Clone)]
pub struct Transition {
    /// The next dataset, present only for a successful mutation.
    pub dataset: Option<Dataset>,
    /// The filters to install after the command.
    pub filters: Filters,
    /// A context the session should move to.
    pub context: Option<ContextId>,
    /// The user-facing feedback.
    pub message: String,
    /// A signal for the presentation layer.
    pub notification: Option<Notification>,
}

impl Transition {
    fn read(filters: Filters, message: String) -> Self {
        Self {
            dataset: None,
            filters,
            context: None,
            message,
            notification: None,
        }
    }

    fn commit(dataset: Dataset, filters: Filters, message: String) -> Self {
        Self {
            dataset: Some(dataset),
            filters,
            context: None,
            message,
            notification: None,
        }
    }
}

/// Returns the entry at `index` of the filtered view.
///
/// The range is checked against the view as it is now, not as it was when
/// the command was parsed.
fn at_index<'a, T: Entity>(
    collection: &'a Collection<T>,
    filter: &Filter<T>,
    index: Index,
) -> Result<&'a T, CoreError> {
    let view: Vec<&T> = filtered(collection, filter);
    view.get(index.zero_based())
        .copied()
        .ok_or_else(|| CoreError::InvalidDisplayedIndex {
            kind: T::KIND,
            index: index.one_based(),
            shown: view.len(),
        })
}

/// Applies a volunteer-scope command.
///
/// # Errors
///
/// - `InvalidDisplayedIndex` if an index is outside the filtered volunteer view
/// - `DuplicateEntity` if an add or edit would duplicate another volunteer
#[allow(clippy::too_many_lines)]
pub fn apply_volunteer(
    dataset: &Dataset,
    filters: &Filters,
    command: VolunteerCommand,
) -> Result<Transition, CoreError> {
    match command {
        VolunteerCommand::Add { volunteer } => {
            if dataset.volunteers().contains(&volunteer) {
                return Err(CoreError::DuplicateEntity(EntityKind::Volunteer));
            }

            let message: String = format!("New volunteer added: {volunteer}");
            let mut next: Dataset = dataset.clone();
            next.add_volunteer(volunteer);

            let mut next_filters: Filters = filters.clone();
            next_filters.volunteers = Filter::all();
            Ok(Transition::commit(next, next_filters, message))
        }
        VolunteerCommand::Edit { index, patch } => {
            let target: &Volunteer = at_index(dataset.volunteers(), &filters.volunteers, index)?;
            let target_id: VolunteerId = target.id();
            let edited: Volunteer = patch.apply_to(target);

            if dataset.volunteers().conflicts_with(&edited, &target_id) {
                return Err(CoreError::DuplicateEntity(EntityKind::Volunteer));
            }

            let message: String = format!("Edited volunteer: {edited}");
            let mut next: Dataset = dataset.clone();
            next.replace_volunteer(&target_id, edited);

            let mut next_filters: Filters = filters.clone();
            next_filters.volunteers = Filter::all();
            Ok(Transition::commit(next, next_filters, message))
        }
        VolunteerCommand::Delete { index } => {
            let target: &Volunteer = at_index(dataset.volunteers(), &filters.volunteers, index)?;
            let target_id: VolunteerId = target.id();
            let message: String = format!("Deleted volunteer: {target}");

            let mut next: Dataset = dataset.clone();
            next.remove_volunteer(&target_id);
            Ok(Transition::commit(next, filters.clone(), message))
        }
        VolunteerCommand::Select { index } => {
            at_index(dataset.volunteers(), &filters.volunteers, index)?;
            let mut transition: Transition =
                Transition::read(filters.clone(), format!("Selected volunteer: {index}"));
            transition.notification = Some(Notification::Selected {
                kind: EntityKind::Volunteer,
                index,
            });
            Ok(transition)
        }
        VolunteerCommand::Find { keywords } => {
            let mut next_filters: Filters = filters.clone();
            next_filters.volunteers = volunteer_name_filter(&keywords);
            let shown: usize = filtered(dataset.volunteers(), &next_filters.volunteers).len();
            Ok(Transition::read(
                next_filters,
                format!("{shown} volunteers listed!"),
            ))
        }
        VolunteerCommand::List => {
            let mut next_filters: Filters = filters.clone();
            next_filters.volunteers = Filter::all();
            Ok(Transition::read(
                next_filters,
                String::from("Listed all volunteers"),
            ))
        }
        VolunteerCommand::Clear => {
            let mut next: Dataset = dataset.clone();
            next.clear_volunteers();

            let mut next_filters: Filters = filters.clone();
            next_filters.volunteers = Filter::all();
            next_filters.records = Filter::all();
            Ok(Transition::commit(
                next,
                next_filters,
                String::from("Volunteer list has been cleared!"),
            ))
        }
        VolunteerCommand::Manage { index } => {
            let target: &Volunteer = at_index(dataset.volunteers(), &filters.volunteers, index)?;
            let mut next_filters: Filters = filters.clone();
            next_filters.records = records_of_volunteer(target.id());
            let shown: usize = filtered(dataset.records(), &next_filters.records).len();

            let mut transition: Transition = Transition::read(
                next_filters,
                format!(
                    "Managing volunteer {} ({}): {shown} record(s) listed",
                    target.name(),
                    target.volunteer_id()
                ),
            );
            transition.context = Some(ContextId::Record);
            Ok(transition)
        }
    }
}

/// Applies an event-scope command.
///
/// # Errors
///
/// - `InvalidDisplayedIndex` if an index is outside the filtered event view
/// - `DuplicateEntity` if an add or edit would duplicate another event
/// - `EventIdsExhausted` if an add finds no event id left to assign
#[allow(clippy::too_many_lines)]
pub fn apply_event(
    dataset: &Dataset,
    filters: &Filters,
    command: EventCommand,
) -> Result<Transition, CoreError> {
    match command {
        EventCommand::Add { event } => {
            let id: EventId = dataset
                .next_event_id()
                .ok_or(CoreError::EventIdsExhausted)?;
            let event: Event = event.with_id(id);
            if dataset.events().contains(&event) {
                return Err(CoreError::DuplicateEntity(EntityKind::Event));
            }

            let message: String = format!("New event added: {event}");
            let mut next: Dataset = dataset.clone();
            next.add_event(event);

            let mut next_filters: Filters = filters.clone();
            next_filters.events = Filter::all();
            Ok(Transition::commit(next, next_filters, message))
        }
        EventCommand::Edit { index, patch } => {
            let target: &Event = at_index(dataset.events(), &filters.events, index)?;
            let target_id: EventId = target.id();
            let edited: Event = patch.apply_to(target);

            if dataset.events().conflicts_with(&edited, &target_id) {
                return Err(CoreError::DuplicateEntity(EntityKind::Event));
            }

            let message: String = format!("Edited event: {edited}");
            let mut next: Dataset = dataset.clone();
            next.replace_event(target_id, edited);

            let mut next_filters: Filters = filters.clone();
            next_filters.events = Filter::all();
            Ok(Transition::commit(next, next_filters, message))
        }
        EventCommand::Delete { index } => {
            let target: &Event = at_index(dataset.events(), &filters.events, index)?;
            let target_id: EventId = target.id();
            let message: String = format!("Deleted event: {target}");

            let mut next: Dataset = dataset.clone();
            next.remove_event(target_id);
            Ok(Transition::commit(next, filters.clone(), message))
        }
        EventCommand::Select { index } => {
            at_index(dataset.events(), &filters.events, index)?;
            let mut transition: Transition =
                Transition::read(filters.clone(), format!("Selected event: {index}"));
            transition.notification = Some(Notification::Selected {
                kind: EntityKind::Event,
                index,
            });
            Ok(transition)
        }
        EventCommand::Find { keywords } => {
            let mut next_filters: Filters = filters.clone();
            next_filters.events = event_name_filter(&keywords);
            let shown: usize = filtered(dataset.events(), &next_filters.events).len();
            Ok(Transition::read(next_filters, format!("{shown} events listed!")))
        }
        EventCommand::List => {
            let mut next_filters: Filters = filters.clone();
            next_filters.events = Filter::all();
            Ok(Transition::read(next_filters, String::from("Listed all events")))
        }
        EventCommand::Clear => {
            let mut next: Dataset = dataset.clone();
            next.clear_events();

            let mut next_filters: Filters = filters.clone();
            next_filters.events = Filter::all();
            next_filters.records = Filter::all();
            Ok(Transition::commit(
                next,
                next_filters,
                String::from("Event list has been cleared!"),
            ))
        }
        EventCommand::Manage { index } => {
            let target: &Event = at_index(dataset.events(), &filters.events, index)?;
            let mut next_filters: Filters = filters.clone();
            next_filters.records = records_of_event(target.event_id());
            let shown: usize = filtered(dataset.records(), &next_filters.records).len();

            let mut transition: Transition = Transition::read(
                next_filters,
                format!(
                    "Managing event {} [{}]: {shown} record(s) listed",
                    target.name(),
                    target.event_id()
                ),
            );
            transition.context = Some(ContextId::Record);
            Ok(transition)
        }
    }
}

/// Applies a record-scope command. Record commands never mutate.
///
/// # Errors
///
/// Currently infallible; the signature matches the other scopes.
#[allow(clippy::unnecessary_wraps)]
pub fn apply_record(
    dataset: &Dataset,
    filters: &Filters,
    command: RecordCommand,
) -> Result<Transition, CoreError> {
    match command {
        RecordCommand::Find { keywords } => {
            let mut next_filters: Filters = filters.clone();
            next_filters.records = record_keyword_filter(&keywords);
            let shown: usize = filtered(dataset.records(), &next_filters.records).len();
            Ok(Transition::read(next_filters, format!("{shown} records listed!")))
        }
        RecordCommand::List => {
            let mut next_filters: Filters = filters.clone();
            next_filters.records = Filter::all();
            Ok(Transition::read(next_filters, String::from("Listed all records")))
        }
    }
}
