use std::fmt;

use serde::{Deserialize, Serialize};

/// Node labels the service is allowed to query by.
///
/// Labels reach the store as bound parameters, so only these values can
/// ever appear in a label filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeLabel {
    Coach,
    Team,
    User,
}

impl NodeLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeLabel::Coach => "COACH",
            NodeLabel::Team => "TEAM",
            NodeLabel::User => "User",
        }
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only projection of a coach or team node.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NamedNode {
    pub name: String,
}
