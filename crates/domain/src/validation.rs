// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Validates a volunteer identifier.
///
/// Identifiers are one uppercase letter, seven digits and one uppercase
/// letter (e.g. `S1234567A`). Callers normalise case before validating.
///
/// # Errors
///
/// Returns `DomainError::InvalidVolunteerId` if the value does not match.
pub fn validate_volunteer_id(value: &str) -> Result<(), DomainError> {
    let chars: Vec<char> = value.chars().collect();
    let well_formed: bool = chars.len() == 9
        && chars.first().is_some_and(char::is_ascii_uppercase)
        && chars.last().is_some_and(char::is_ascii_uppercase)
        && chars[1..8].iter().all(char::is_ascii_digit);

    if !well_formed {
        return Err(DomainError::InvalidVolunteerId(value.to_string()));
    }
    Ok(())
}

/// Validates a volunteer or event name.
///
/// # Errors
///
/// Returns `DomainError::InvalidName` if the name is blank or contains
/// anything other than alphanumerics and spaces.
pub fn validate_name(value: &str) -> Result<(), DomainError> {
    // Rule: the first character must not be whitespace, otherwise " " passes
    let starts_ok: bool = value.chars().next().is_some_and(char::is_alphanumeric);
    let body_ok: bool = value.chars().all(|c| c.is_alphanumeric() || c == ' ');

    if !starts_ok || !body_ok {
        return Err(DomainError::InvalidName(value.to_string()));
    }
    Ok(())
}

/// Validates a phone number.
///
/// # Errors
///
/// Returns `DomainError::InvalidPhone` unless the value is at least three ASCII digits.
pub fn validate_phone(value: &str) -> Result<(), DomainError> {
    if value.len() < 3 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainError::InvalidPhone(value.to_string()));
    }
    Ok(())
}

/// Validates an email address.
///
/// The local part may contain alphanumerics and `._%+-`; the domain must be
/// dot-separated alphanumeric labels (hyphens allowed inside a label).
///
/// # Errors
///
/// Returns `DomainError::InvalidEmail` if the value is malformed.
pub fn validate_email(value: &str) -> Result<(), DomainError> {
    let invalid = || DomainError::InvalidEmail(value.to_string());

    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;

    let local_ok: bool = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_alphanumeric() || "._%+-".contains(c));

    let domain_ok: bool = !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_alphanumeric() || c == '-')
        });

    if !local_ok || !domain_ok {
        return Err(invalid());
    }
    Ok(())
}

/// Validates an address.
///
/// # Errors
///
/// Returns `DomainError::InvalidAddress` if the value is empty or starts with whitespace.
pub fn validate_address(value: &str) -> Result<(), DomainError> {
    if !is_non_blank(value) {
        return Err(DomainError::InvalidAddress(value.to_string()));
    }
    Ok(())
}

/// Validates an event location.
///
/// # Errors
///
/// Returns `DomainError::InvalidLocation` if the value is empty or starts with whitespace.
pub fn validate_location(value: &str) -> Result<(), DomainError> {
    if !is_non_blank(value) {
        return Err(DomainError::InvalidLocation(value.to_string()));
    }
    Ok(())
}

/// Validates an event description.
///
/// # Errors
///
/// Returns `DomainError::InvalidDescription` if the value is empty or starts with whitespace.
pub fn validate_description(value: &str) -> Result<(), DomainError> {
    if !is_non_blank(value) {
        return Err(DomainError::InvalidDescription(value.to_string()));
    }
    Ok(())
}

/// Validates a tag name.
///
/// # Errors
///
/// Returns `DomainError::InvalidTag` if the tag is empty or not alphanumeric.
pub fn validate_tag(value: &str) -> Result<(), DomainError> {
    if value.is_empty() || !value.chars().all(char::is_alphanumeric) {
        return Err(DomainError::InvalidTag(value.to_string()));
    }
    Ok(())
}

fn is_non_blank(value: &str) -> bool {
    value.chars().next().is_some_and(|c| !c.is_whitespace())
}
