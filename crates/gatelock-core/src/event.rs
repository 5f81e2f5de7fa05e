use serde::{Deserialize, Serialize};

use crate::error::GatelockError;
use crate::operation::Operation;
use crate::types::{Seconds, Timestamp};

/// Notifications raised for external watchers. Field sets are fixed; hosts
/// forward them as-is (typically as JSON).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum TimelockEvent {
    TimelockInitiated {
        operation: Operation,
        complete_at: Timestamp,
        /// Raw encoded arguments. Carried here only; the store keeps the
        /// fingerprint.
        #[serde(with = "hex_bytes")]
        arguments: Vec<u8>,
        expires_at: Timestamp,
    },
    TimelockIntervalModified {
        operation: Operation,
        old_interval: Seconds,
        new_interval: Seconds,
    },
    TimelockExpirationModified {
        operation: Operation,
        old_expiration: Seconds,
        new_expiration: Seconds,
    },
}

impl TimelockEvent {
    pub fn operation(&self) -> Operation {
        match self {
            TimelockEvent::TimelockInitiated { operation, .. }
            | TimelockEvent::TimelockIntervalModified { operation, .. }
            | TimelockEvent::TimelockExpirationModified { operation, .. } => *operation,
        }
    }

    pub fn to_json(&self) -> Result<String, GatelockError> {
        serde_json::to_string(self).map_err(|e| GatelockError::Serialization(e.to_string()))
    }

    pub fn from_json(s: &str) -> Result<Self, GatelockError> {
        serde_json::from_str(s).map_err(|e| GatelockError::Serialization(e.to_string()))
    }
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(d)?;
        hex::decode(s).map_err(serde::de::Error::custom)
    }
}
