// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, validate_address, validate_description, validate_email, validate_location,
    validate_name, validate_phone, validate_tag, validate_volunteer_id,
};

#[test]
fn test_validate_volunteer_id_accepts_valid_id() {
    assert!(validate_volunteer_id("S1234567A").is_ok());
    assert!(validate_volunteer_id("T0000000Z").is_ok());
}

#[test]
fn test_validate_volunteer_id_rejects_lowercase() {
    // Normalisation happens in VolunteerId::parse, not here
    let result: Result<(), DomainError> = validate_volunteer_id("s1234567a");
    assert!(matches!(result, Err(DomainError::InvalidVolunteerId(_))));
}

#[test]
fn test_validate_name_accepts_digits_and_spaces() {
    assert!(validate_name("Team 42").is_ok());
}

#[test]
fn test_validate_name_rejects_leading_space() {
    assert!(validate_name(" Alice").is_err());
}

#[test]
fn test_validate_phone() {
    assert!(validate_phone("91234567").is_ok());
    assert!(validate_phone("9123 4567").is_err());
}

#[test]
fn test_validate_email_accepts_common_forms() {
    assert!(validate_email("rachel@example.com").is_ok());
    assert!(validate_email("a.b+c@mail-server.example.org").is_ok());
}

#[test]
fn test_validate_email_rejects_malformed() {
    assert!(validate_email("example.com").is_err());
    assert!(validate_email("@example.com").is_err());
    assert!(validate_email("rachel@").is_err());
    assert!(validate_email("rachel@-example.com").is_err());
    assert!(validate_email("rachel@example..com").is_err());
}

#[test]
fn test_validate_blank_free_text_fields() {
    assert!(validate_address("123 Main Street #0505").is_ok());
    assert!(validate_address(" ").is_err());
    assert!(validate_location("").is_err());
    assert!(validate_description("\tdesc").is_err());
    assert!(validate_description("Beach cleanup").is_ok());
}

#[test]
fn test_validate_tag() {
    assert!(validate_tag("friend").is_ok());
    assert!(validate_tag("#friend").is_err());
    assert!(validate_tag("").is_err());
}
