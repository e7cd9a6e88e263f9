use std::fmt;

use serde::{Serialize, Serializer};

/// Lifecycle state of a process instance.
///
/// Engines report raw numeric codes; [`ProcessState::from_code`] maps them
/// onto the known set and keeps anything else as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessState {
    Pending,
    Active,
    Completed,
    Aborted,
    Suspended,
    Unknown(i64),
}

impl ProcessState {
    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => ProcessState::Pending,
            1 => ProcessState::Active,
            // Some engines report a second completion code.
            2 | 5 => ProcessState::Completed,
            3 => ProcessState::Aborted,
            4 => ProcessState::Suspended,
            other => ProcessState::Unknown(other),
        }
    }

    pub const fn code(self) -> i64 {
        match self {
            ProcessState::Pending => 0,
            ProcessState::Active => 1,
            ProcessState::Completed => 2,
            ProcessState::Aborted => 3,
            ProcessState::Suspended => 4,
            ProcessState::Unknown(code) => code,
        }
    }

    pub fn label(self) -> String {
        match self {
            ProcessState::Pending => "PENDING".to_string(),
            ProcessState::Active => "ACTIVE".to_string(),
            ProcessState::Completed => "COMPLETED".to_string(),
            ProcessState::Aborted => "ABORTED".to_string(),
            ProcessState::Suspended => "SUSPENDED".to_string(),
            ProcessState::Unknown(code) => format!("UNKNOWN({code})"),
        }
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl Serialize for ProcessState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.label())
    }
}
