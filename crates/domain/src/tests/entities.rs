// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Address, Birthday, Description, Email, Entity, EntityKind, Event, EventDate, EventId,
    EventPatch, EventTime, Gender, Hour, Location, Name, NewEvent, Phone, Record, Remark,
    Volunteer, VolunteerId, VolunteerPatch, parse_tags,
};
use std::collections::BTreeSet;

fn create_test_volunteer(id: &str, name: &str, phone: &str, email: &str) -> Volunteer {
    Volunteer::new(
        VolunteerId::parse(id).unwrap(),
        Name::parse(name).unwrap(),
        Gender::Female,
        Birthday::parse("01-01-1991").unwrap(),
        Phone::parse(phone).unwrap(),
        Email::parse(email).unwrap(),
        Address::parse("123 Main Street").unwrap(),
        parse_tags(&["friend"]).unwrap(),
    )
}

fn create_test_event(id: u32, name: &str) -> Event {
    NewEvent {
        name: Name::parse(name).unwrap(),
        location: Location::parse("East Coast Park").unwrap(),
        start_date: EventDate::parse("01-06-2026").unwrap(),
        end_date: EventDate::parse("01-06-2026").unwrap(),
        start_time: EventTime::parse("09:00").unwrap(),
        end_time: EventTime::parse("12:00").unwrap(),
        description: Description::parse("Beach cleanup").unwrap(),
        tags: BTreeSet::new(),
    }
    .with_id(EventId::new(id).unwrap())
}

#[test]
fn test_volunteers_with_same_id_are_same_entity() {
    let a: Volunteer = create_test_volunteer("S1234567A", "Alice", "91234567", "a@x.com");
    let b: Volunteer = create_test_volunteer("S1234567A", "Bob", "81234567", "b@x.com");
    assert!(a.is_same_entity(&b));
    assert_ne!(a, b);
}

#[test]
fn test_volunteer_duplicate_requires_name_and_contact() {
    let a: Volunteer = create_test_volunteer("S1234567A", "Alice", "91234567", "a@x.com");
    let same_phone: Volunteer = create_test_volunteer("S7654321B", "Alice", "91234567", "z@x.com");
    let same_email: Volunteer = create_test_volunteer("S7654321B", "Alice", "80000000", "a@x.com");
    let other_name: Volunteer = create_test_volunteer("S7654321B", "Alicia", "91234567", "a@x.com");

    assert!(a.duplicates(&same_phone));
    assert!(a.duplicates(&same_email));
    assert!(!a.duplicates(&other_name));
    assert!(!a.is_same_entity(&other_name));
}

#[test]
fn test_volunteer_patch_keeps_identity() {
    let original: Volunteer = create_test_volunteer("S1234567A", "Alice", "91234567", "a@x.com");
    let patch: VolunteerPatch = VolunteerPatch {
        phone: Some(Phone::parse("81234567").unwrap()),
        tags: Some(BTreeSet::new()),
        ..VolunteerPatch::default()
    };

    let edited: Volunteer = patch.apply_to(&original);
    assert_eq!(edited.volunteer_id(), original.volunteer_id());
    assert_eq!(edited.phone().value(), "81234567");
    assert_eq!(edited.name(), original.name());
    assert!(edited.tags().is_empty());
}

#[test]
fn test_empty_patch_reports_empty() {
    assert!(VolunteerPatch::default().is_empty());
    assert!(EventPatch::default().is_empty());
    let patch: EventPatch = EventPatch {
        location: Some(Location::parse("Sentosa").unwrap()),
        ..EventPatch::default()
    };
    assert!(!patch.is_empty());
}

#[test]
fn test_event_duplicates_by_name_place_and_start() {
    let a: Event = create_test_event(1, "Cleanup");
    let b: Event = create_test_event(2, "Cleanup");
    let c: Event = create_test_event(3, "Fundraiser");
    assert!(a.duplicates(&b));
    assert!(!a.duplicates(&c));
    assert_eq!(Event::KIND, EntityKind::Event);
}

#[test]
fn test_record_identity_is_volunteer_and_event() {
    let event_id: EventId = EventId::new(4).unwrap();
    let volunteer_id: VolunteerId = VolunteerId::parse("S1234567A").unwrap();
    let a: Record = Record::new(event_id, volunteer_id.clone(), Hour::new(3).unwrap(), Remark::new(""));
    let b: Record = Record::new(event_id, volunteer_id, Hour::new(8).unwrap(), Remark::new("late"));
    assert!(a.is_same_entity(&b));
    assert_eq!(a.id().to_string(), "S1234567A@4");
}

#[test]
fn test_volunteer_serde_validates_fields() {
    let volunteer: Volunteer = create_test_volunteer("S1234567A", "Alice", "91234567", "a@x.com");
    let json: String = serde_json::to_string(&volunteer).unwrap();
    assert!(json.contains("\"01-01-1991\""));
    let decoded: Volunteer = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, volunteer);

    let tampered: String = json.replace("91234567", "12");
    assert!(serde_json::from_str::<Volunteer>(&tampered).is_err());
}
