use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One person's record. All text fields are free-form, no format
/// constraints are enforced at this layer.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Contact {
    /// Stable identity used by update/delete targeting. Survives
    /// persistence round-trips.
    pub id: Uuid,

    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Contact {
    pub fn new(
        first_name: String,
        last_name: String,
        phone: String,
        email: String,
        address: String,
    ) -> Self {
        Contact {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            phone,
            email,
            address,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// OR match across four fields: first name, last name and email are
    /// compared case-insensitively, phone is a verbatim substring match.
    /// `lowered` must be the lowercased form of `query`.
    pub fn matches(&self, query: &str, lowered: &str) -> bool {
        self.first_name.to_lowercase().contains(lowered)
            || self.last_name.to_lowercase().contains(lowered)
            || self.phone.contains(query)
            || self.email.to_lowercase().contains(lowered)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.full_name(), self.phone)
    }
}
