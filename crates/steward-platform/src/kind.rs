use serde::{Deserialize, Serialize};
use std::fmt;

/// The derived-resource kinds the platform store understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    WorkloadDefinition,
    NetworkEndpoint,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkloadDefinition => write!(f, "WorkloadDefinition"),
            Self::NetworkEndpoint => write!(f, "NetworkEndpoint"),
        }
    }
}
