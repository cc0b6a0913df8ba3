use std::fmt;

use super::*;
use serde::{Deserialize, Serialize};

pub const FIELD_DELIMITER: &str = "|";
pub const FIELD_COUNT: usize = 6;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Contact {
    // Synthetic identity, only meaningful for the lifetime of the loaded book.
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,

    pub name: String,
    pub street: String,
    pub zip_code: String,
    pub city: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        street: impl Into<String>,
        zip_code: impl Into<String>,
        city: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Contact {
            id: Uuid::new_v4(),
            name: name.into(),
            street: street.into(),
            zip_code: zip_code.into(),
            city: city.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Encodes the contact as a single `name|street|zip|city|phone|email` line.
    ///
    /// Field values are written verbatim. A value containing `|` will shift
    /// the remaining fields when the line is decoded again.
    pub fn to_line(&self) -> String {
        self.fields().join(FIELD_DELIMITER)
    }

    /// Decodes a line produced by [`Contact::to_line`].
    ///
    /// Segments past the sixth are ignored. A line with fewer than six
    /// segments is rejected with [`AppError::MalformedRecord`].
    pub fn from_line(line: &str) -> Result<Self, AppError> {
        let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();

        let [name, street, zip_code, city, phone, email, ..] = parts.as_slice() else {
            return Err(AppError::MalformedRecord {
                expected: FIELD_COUNT,
                found: parts.len(),
            });
        };

        Ok(Contact::new(*name, *street, *zip_code, *city, *phone, *email))
    }

    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            self.name.as_str(),
            self.street.as_str(),
            self.zip_code.as_str(),
            self.city.as_str(),
            self.phone.as_str(),
            self.email.as_str(),
        ]
    }
}

// Compares the six fields only, `id` plays no part.
impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.fields() == other.fields()
    }
}

impl Eq for Contact {}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} {}, {}, {}",
            self.name, self.street, self.zip_code, self.city, self.phone, self.email
        )
    }
}

/// Replacement values for an existing contact. `None` leaves a field as is.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub street: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ContactPatch {
    pub fn is_empty(&self) -> bool {
        self == &ContactPatch::default()
    }

    pub fn apply(&self, contact: &mut Contact) {
        if let Some(name) = &self.name {
            contact.name = name.clone();
        }
        if let Some(street) = &self.street {
            contact.street = street.clone();
        }
        if let Some(zip_code) = &self.zip_code {
            contact.zip_code = zip_code.clone();
        }
        if let Some(city) = &self.city {
            contact.city = city.clone();
        }
        if let Some(phone) = &self.phone {
            contact.phone = phone.clone();
        }
        if let Some(email) = &self.email {
            contact.email = email.clone();
        }
    }
}

impl From<Contact> for ContactPatch {
    fn from(contact: Contact) -> Self {
        ContactPatch {
            name: Some(contact.name),
            street: Some(contact.street),
            zip_code: Some(contact.zip_code),
            city: Some(contact.city),
            phone: Some(contact.phone),
            email: Some(contact.email),
        }
    }
}
