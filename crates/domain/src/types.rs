// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::{
    validate_address, validate_description, validate_email, validate_location, validate_name,
    validate_phone, validate_tag, validate_volunteer_id,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use time::{Date, Time};

/// Declares a string value object whose only invariant is a validation rule.
///
/// The generated type trims its input, validates it, and (de)serialises as a
/// plain string through the same validating constructor.
macro_rules! validated_string {
    ($(#[$meta:meta])* $name:ident, $validate:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name {
            value: String,
        }

        impl $name {
            /// Parses a raw field value, trimming surrounding whitespace.
            ///
            /// # Errors
            ///
            /// Returns a `DomainError` if the trimmed value fails validation.
            pub fn parse(raw: &str) -> Result<Self, DomainError> {
                let value: &str = raw.trim();
                $validate(value)?;
                Ok(Self {
                    value: value.to_string(),
                })
            }

            /// Returns the validated value.
            #[must_use]
            pub fn value(&self) -> &str {
                &self.value
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(raw: String) -> Result<Self, Self::Error> {
                Self::parse(&raw)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.value
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.value)
            }
        }
    };
}

validated_string!(
    /// A volunteer or event name.
    Name,
    validate_name
);
validated_string!(
    /// A phone number made of digits only.
    Phone,
    validate_phone
);
validated_string!(
    /// An email address.
    Email,
    validate_email
);
validated_string!(
    /// A free-form postal address.
    Address,
    validate_address
);
validated_string!(
    /// Where an event takes place.
    Location,
    validate_location
);
validated_string!(
    /// A short description of an event.
    Description,
    validate_description
);
validated_string!(
    /// A single alphanumeric tag.
    Tag,
    validate_tag
);

/// Parses every raw tag value into a tag set.
///
/// Duplicate tags collapse into one.
///
/// # Errors
///
/// Returns the first `DomainError::InvalidTag` encountered.
pub fn parse_tags<S: AsRef<str>>(raw: &[S]) -> Result<BTreeSet<Tag>, DomainError> {
    raw.iter().map(|value| Tag::parse(value.as_ref())).collect()
}

/// Identifies a volunteer.
///
/// The identifier is supplied when the volunteer is added and never changes
/// afterwards. It is normalised to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VolunteerId {
    value: String,
}

impl VolunteerId {
    /// Parses a raw identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidVolunteerId` if the value is malformed.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let value: String = raw.trim().to_uppercase();
        validate_volunteer_id(&value)?;
        Ok(Self { value })
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl TryFrom<String> for VolunteerId {
    type Error = DomainError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<VolunteerId> for String {
    fn from(id: VolunteerId) -> Self {
        id.value
    }
}

impl std::fmt::Display for VolunteerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// A volunteer's gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
}

impl Gender {
    /// Parses a gender, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidGender` for anything other than male or female.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        match raw.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(DomainError::InvalidGender(raw.trim().to_string())),
        }
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = DomainError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        gender.as_str().to_string()
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn parse_calendar_date(field: &'static str, raw: &str) -> Result<Date, DomainError> {
    let value: &str = raw.trim();
    Date::parse(value, time::macros::format_description!("[day]-[month]-[year]")).map_err(|_| {
        DomainError::InvalidDate {
            field,
            value: value.to_string(),
        }
    })
}

fn format_calendar_date(date: Date) -> String {
    format!(
        "{:02}-{:02}-{:04}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

/// A volunteer's date of birth, written `dd-mm-yyyy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday {
    date: Date,
}

impl Birthday {
    /// Parses a `dd-mm-yyyy` date.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDate` if the value is not a real calendar date.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        Ok(Self {
            date: parse_calendar_date("birthday", raw)?,
        })
    }

    /// Returns the underlying date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }
}

impl TryFrom<String> for Birthday {
    type Error = DomainError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        format_calendar_date(birthday.date)
    }
}

impl std::fmt::Display for Birthday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_calendar_date(self.date))
    }
}

/// The start or end date of an event, written `dd-mm-yyyy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventDate {
    date: Date,
}

impl EventDate {
    /// Parses a `dd-mm-yyyy` date.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDate` if the value is not a real calendar date.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        Ok(Self {
            date: parse_calendar_date("event date", raw)?,
        })
    }

    /// Returns the underlying date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }
}

impl TryFrom<String> for EventDate {
    type Error = DomainError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<EventDate> for String {
    fn from(date: EventDate) -> Self {
        format_calendar_date(date.date)
    }
}

impl std::fmt::Display for EventDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_calendar_date(self.date))
    }
}

/// The start or end time of an event, written `HH:MM` on a 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventTime {
    time: Time,
}

impl EventTime {
    /// Parses an `HH:MM` time.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTime` if the value is malformed or out of range.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let value: &str = raw.trim();
        let invalid = || DomainError::InvalidTime {
            field: "event time",
            value: value.to_string(),
        };

        let (hour, minute) = value.split_once(':').ok_or_else(invalid)?;
        let two_digits = |part: &str| part.len() == 2 && part.chars().all(|c| c.is_ascii_digit());
        if !two_digits(hour) || !two_digits(minute) {
            return Err(invalid());
        }

        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;
        let time: Time = Time::from_hms(hour, minute, 0).map_err(|_| invalid())?;
        Ok(Self { time })
    }

    /// Returns the underlying time.
    #[must_use]
    pub const fn time(&self) -> Time {
        self.time
    }
}

impl TryFrom<String> for EventTime {
    type Error = DomainError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<EventTime> for String {
    fn from(time: EventTime) -> Self {
        time.to_string()
    }
}

impl std::fmt::Display for EventTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.time.hour(), self.time.minute())
    }
}

/// Identifies an event.
///
/// Event ids are assigned when the event is added and are never reused while
/// the event exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct EventId {
    value: u32,
}

impl EventId {
    /// The id given to the first event of an empty collection.
    pub const FIRST: Self = Self { value: 1 };

    /// Creates an event id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEventId` if `value` is zero.
    pub const fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::InvalidEventId(value));
        }
        Ok(Self { value })
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Returns the id following this one, or `None` at `u32::MAX`.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self.value.checked_add(1) {
            Some(value) => Some(Self { value }),
            None => None,
        }
    }
}

impl TryFrom<u32> for EventId {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EventId> for u32 {
    fn from(id: EventId) -> Self {
        id.value
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Hours a volunteer contributed to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Hour {
    value: u32,
}

impl Hour {
    /// Creates an hour count.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidHour` if `value` is zero.
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::InvalidHour(value.to_string()));
        }
        Ok(Self { value })
    }

    /// Parses a positive integer hour count.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidHour` if the value is not a positive integer.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let value: &str = raw.trim();
        if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::InvalidHour(value.to_string()));
        }
        let hours: u32 = value
            .parse()
            .map_err(|_| DomainError::InvalidHour(value.to_string()))?;
        Self::new(hours)
    }

    /// Returns the hour count.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }
}

impl TryFrom<u32> for Hour {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Hour> for u32 {
    fn from(hour: Hour) -> Self {
        hour.value
    }
}

impl std::fmt::Display for Hour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A free-text remark attached to a record. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Remark {
    value: String,
}

impl Remark {
    /// Creates a remark from raw text, trimming surrounding whitespace.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            value: raw.trim().to_string(),
        }
    }

    /// Returns the remark text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Remark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}
