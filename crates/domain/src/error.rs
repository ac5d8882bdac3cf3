// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised by the field parsers.
///
/// Each variant carries the rejected input so callers can echo it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Volunteer identifier is not a letter, seven digits and a letter.
    InvalidVolunteerId(String),
    /// Name is blank or contains characters other than letters, digits and spaces.
    InvalidName(String),
    /// Gender is not one of the recognised values.
    InvalidGender(String),
    /// A calendar date could not be parsed.
    InvalidDate {
        /// The field being parsed (e.g. "birthday", "start date").
        field: &'static str,
        /// The rejected input.
        value: String,
    },
    /// A time of day could not be parsed.
    InvalidTime {
        /// The field being parsed (e.g. "start time").
        field: &'static str,
        /// The rejected input.
        value: String,
    },
    /// Phone number is not made of at least three digits.
    InvalidPhone(String),
    /// Email address is malformed.
    InvalidEmail(String),
    /// Address is blank.
    InvalidAddress(String),
    /// Tag is blank or not alphanumeric.
    InvalidTag(String),
    /// Event location is blank.
    InvalidLocation(String),
    /// Event description is blank.
    InvalidDescription(String),
    /// Event identifier is zero.
    InvalidEventId(u32),
    /// Hour count is not a positive integer.
    InvalidHour(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidVolunteerId(value) => write!(
                f,
                "Invalid volunteer id '{value}': expected one letter, seven digits and one letter (e.g. S1234567A)"
            ),
            Self::InvalidName(value) => write!(
                f,
                "Invalid name '{value}': names should only contain letters, digits and spaces, and should not be blank"
            ),
            Self::InvalidGender(value) => {
                write!(f, "Invalid gender '{value}': gender should be male or female")
            }
            Self::InvalidDate { field, value } => write!(
                f,
                "Invalid {field} '{value}': dates should be a valid calendar date in the format dd-mm-yyyy"
            ),
            Self::InvalidTime { field, value } => write!(
                f,
                "Invalid {field} '{value}': times should be in 24-hour format HH:MM"
            ),
            Self::InvalidPhone(value) => write!(
                f,
                "Invalid phone '{value}': phone numbers should only contain digits and be at least 3 digits long"
            ),
            Self::InvalidEmail(value) => write!(
                f,
                "Invalid email '{value}': emails should be of the format local-part@domain"
            ),
            Self::InvalidAddress(value) => write!(
                f,
                "Invalid address '{value}': addresses can take any value but should not be blank"
            ),
            Self::InvalidTag(value) => {
                write!(f, "Invalid tag '{value}': tags should be alphanumeric")
            }
            Self::InvalidLocation(value) => {
                write!(f, "Invalid location '{value}': locations should not be blank")
            }
            Self::InvalidDescription(value) => {
                write!(f, "Invalid description '{value}': descriptions should not be blank")
            }
            Self::InvalidEventId(value) => {
                write!(f, "Invalid event id {value}: ids should be greater than zero")
            }
            Self::InvalidHour(value) => {
                write!(f, "Invalid hour '{value}': hours should be a positive integer")
            }
        }
    }
}

impl std::error::Error for DomainError {}
