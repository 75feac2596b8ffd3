use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Field names requested in vehicle mode, in prompt order.
pub const VEHICLE_FIELDS: [&str; 5] = [
    "Vehicle Make",
    "Vehicle Model",
    "Vehicle Year",
    "Vehicle VIN",
    "Primary Use",
];

/// Field names requested in personal mode, in prompt order. The last
/// field carries the literal string "true" or "false" rather than a
/// boolean; that convention lives in the prompt, not in any validation.
pub const PERSONAL_FIELDS: [&str; 9] = [
    "First Name",
    "Last Name",
    "Email",
    "Phone No.",
    "Address",
    "City",
    "State",
    "Zip Code",
    "Create Client Web Portal",
];

/// Which of the two fixed field schemas the remote model is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    Vehicle,
    Personal,
}

impl ExtractionMode {
    /// Map the wire-level `type_id` (1 or 2) onto a mode.
    pub fn from_type_id(type_id: i64) -> Result<Self> {
        match type_id {
            1 => Ok(Self::Vehicle),
            2 => Ok(Self::Personal),
            other => Err(Error::InvalidMode(other)),
        }
    }

    #[must_use]
    pub const fn type_id(self) -> u8 {
        match self {
            Self::Vehicle => 1,
            Self::Personal => 2,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Vehicle => "Vehicle Information",
            Self::Personal => "Personal Information",
        }
    }

    #[must_use]
    pub const fn field_names(self) -> &'static [&'static str] {
        match self {
            Self::Vehicle => &VEHICLE_FIELDS,
            Self::Personal => &PERSONAL_FIELDS,
        }
    }
}
