// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Dataset, Engine};
use socialcare_domain::{
    Address, Birthday, Description, Email, Event, EventDate, EventId, EventTime, Gender, Hour,
    Location, Name, NewEvent, Phone, Record, Remark, Volunteer, VolunteerId, parse_tags,
};
use std::collections::BTreeSet;

pub const ALICE: &str = "S1234567A";
pub const BOB: &str = "S7654321B";

pub fn create_test_volunteer(id: &str, name: &str, phone: &str, email: &str) -> Volunteer {
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

pub fn create_test_new_event(name: &str) -> NewEvent {
    NewEvent {
        name: Name::parse(name).unwrap(),
        location: Location::parse("East Coast Park").unwrap(),
        start_date: EventDate::parse("01-06-2026").unwrap(),
        end_date: EventDate::parse("01-06-2026").unwrap(),
        start_time: EventTime::parse("09:00").unwrap(),
        end_time: EventTime::parse("12:00").unwrap(),
        description: Description::parse("Community outing").unwrap(),
        tags: BTreeSet::new(),
    }
}

pub fn create_test_event(id: u32, name: &str) -> Event {
    create_test_new_event(name).with_id(EventId::new(id).unwrap())
}

pub fn create_test_record(event_id: u32, volunteer_id: &str, hours: u32, remark: &str) -> Record {
    Record::new(
        EventId::new(event_id).unwrap(),
        VolunteerId::parse(volunteer_id).unwrap(),
        Hour::new(hours).unwrap(),
        Remark::new(remark),
    )
}

/// Two volunteers, two events and three records.
pub fn create_test_dataset() -> Dataset {
    Dataset::from_parts(
        vec![
            create_test_volunteer(ALICE, "Alice Tan", "91234567", "alice@example.com"),
            create_test_volunteer(BOB, "Bob Lee", "81234567", "bob@example.com"),
        ],
        vec![
            create_test_event(1, "Beach Cleanup"),
            create_test_event(2, "Charity Run"),
        ],
        vec![
            create_test_record(1, ALICE, 3, ""),
            create_test_record(1, BOB, 2, "Team lead"),
            create_test_record(2, ALICE, 4, ""),
        ],
    )
    .unwrap()
}

pub fn create_test_engine() -> Engine {
    Engine::new(create_test_dataset())
}
