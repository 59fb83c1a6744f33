//! Organizational roles derivable for an alert's current assignee.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role labels known to the process, plus the `Other` fallback.
///
/// The four named roles are the ones the admin registry can assign;
/// `Other` is what resolution falls back to when neither the registry
/// nor the stage table knows the assignee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Process Engineer")]
    ProcessEngineer,
    #[serde(rename = "Process Manager")]
    ProcessManager,
    #[serde(rename = "Operation Engineer")]
    OperationEngineer,
    #[serde(rename = "Operation Manager")]
    OperationManager,
    #[serde(rename = "Other")]
    Other,
}

impl Role {
    /// Roles assignable through the admin registry, in display order.
    pub const ASSIGNABLE: [Role; 4] = [
        Role::ProcessEngineer,
        Role::ProcessManager,
        Role::OperationEngineer,
        Role::OperationManager,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::ProcessEngineer => "Process Engineer",
            Role::ProcessManager => "Process Manager",
            Role::OperationEngineer => "Operation Engineer",
            Role::OperationManager => "Operation Manager",
            Role::Other => "Other",
        }
    }

    /// Parse a display label back into a role. Unknown labels yield `None`.
    pub fn parse(label: &str) -> Option<Role> {
        match label.trim() {
            "Process Engineer" => Some(Role::ProcessEngineer),
            "Process Manager" => Some(Role::ProcessManager),
            "Operation Engineer" => Some(Role::OperationEngineer),
            "Operation Manager" => Some(Role::OperationManager),
            "Other" => Some(Role::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
