// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod entity;
mod error;
mod event;
mod record;
mod types;
mod validation;
mod volunteer;

#[cfg(test)]
mod tests;

pub use entity::{Entity, EntityKind};
pub use error::DomainError;
pub use event::{Event, EventPatch, NewEvent};
pub use record::{Record, RecordKey};
pub use types::{
    Address, Birthday, Description, Email, EventDate, EventId, EventTime, Gender, Hour, Location,
    Name, Phone, Remark, Tag, VolunteerId, parse_tags,
};
pub use validation::{
    validate_address, validate_description, validate_email, validate_location, validate_name,
    validate_phone, validate_tag, validate_volunteer_id,
};
pub use volunteer::{Volunteer, VolunteerPatch};
