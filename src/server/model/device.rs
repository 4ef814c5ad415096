//! Device mode domain model.

use std::{fmt, str::FromStr};

/// What the front-desk device is currently doing.
///
/// `Register` enrols a fingerprint for a member; `Attendance` records punches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceMode {
    Register,
    Attendance,
}

impl DeviceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Attendance => "attendance",
        }
    }
}

impl fmt::Display for DeviceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "register" => Ok(Self::Register),
            "attendance" => Ok(Self::Attendance),
            other => Err(format!("Invalid mode '{}'", other)),
        }
    }
}
