// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::entity::{Entity, EntityKind};
use crate::types::{Address, Birthday, Email, Gender, Name, Phone, Tag, VolunteerId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A registered volunteer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volunteer {
    id: VolunteerId,
    name: Name,
    gender: Gender,
    birthday: Birthday,
    phone: Phone,
    email: Email,
    address: Address,
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl Volunteer {
    /// Creates a volunteer from already-validated fields.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        id: VolunteerId,
        name: Name,
        gender: Gender,
        birthday: Birthday,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            id,
            name,
            gender,
            birthday,
            phone,
            email,
            address,
            tags,
        }
    }

    /// Returns the volunteer's identifier.
    #[must_use]
    pub const fn volunteer_id(&self) -> &VolunteerId {
        &self.id
    }

    /// Returns the volunteer's name.
    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the volunteer's gender.
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Returns the volunteer's birthday.
    #[must_use]
    pub const fn birthday(&self) -> Birthday {
        self.birthday
    }

    /// Returns the volunteer's phone number.
    #[must_use]
    pub const fn phone(&self) -> &Phone {
        &self.phone
    }

    /// Returns the volunteer's email address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the volunteer's address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// Returns the volunteer's tags.
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }
}

impl Entity for Volunteer {
    type Id = VolunteerId;

    const KIND: EntityKind = EntityKind::Volunteer;

    fn id(&self) -> VolunteerId {
        self.id.clone()
    }

    // Same name and at least one shared contact detail.
    fn duplicates(&self, other: &Self) -> bool {
        self.name == other.name && (self.phone == other.phone || self.email == other.email)
    }
}

impl std::fmt::Display for Volunteer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) Gender: {} Birthday: {} Phone: {} Email: {} Address: {} Tags: ",
            self.name,
            self.id,
            self.gender,
            self.birthday,
            self.phone,
            self.email,
            self.address
        )?;
        for tag in &self.tags {
            write!(f, "[{tag}]")?;
        }
        Ok(())
    }
}

/// The fields an edit replaces on a volunteer.
///
/// Every `None` keeps the existing value. The identifier is not editable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolunteerPatch {
    /// Replacement name.
    pub name: Option<Name>,
    /// Replacement gender.
    pub gender: Option<Gender>,
    /// Replacement birthday.
    pub birthday: Option<Birthday>,
    /// Replacement phone number.
    pub phone: Option<Phone>,
    /// Replacement email address.
    pub email: Option<Email>,
    /// Replacement address.
    pub address: Option<Address>,
    /// Replacement tag set. `Some(empty)` clears all tags.
    pub tags: Option<BTreeSet<Tag>>,
}

impl VolunteerPatch {
    /// Returns true if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.gender.is_none()
            && self.birthday.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.tags.is_none()
    }

    /// Builds the edited volunteer, keeping `original`'s id.
    #[must_use]
    pub fn apply_to(&self, original: &Volunteer) -> Volunteer {
        Volunteer {
            id: original.id.clone(),
            name: self.name.clone().unwrap_or_else(|| original.name.clone()),
            gender: self.gender.unwrap_or(original.gender),
            birthday: self.birthday.unwrap_or(original.birthday),
            phone: self.phone.clone().unwrap_or_else(|| original.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| original.email.clone()),
            address: self
                .address
                .clone()
                .unwrap_or_else(|| original.address.clone()),
            tags: self.tags.clone().unwrap_or_else(|| original.tags.clone()),
        }
    }
}
