use gatelock_core::error::GatelockError;
use gatelock_core::operation::Call;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Canonical encoding of a gated call's arguments (bincode, fixed-int
/// little-endian). The same bytes must be used to announce and to enforce.
pub fn encode_arguments<T: Serialize>(arguments: &T) -> Result<Vec<u8>, GatelockError> {
    bincode::serialize(arguments).map_err(|e| GatelockError::Serialization(e.to_string()))
}

pub fn decode_arguments<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, GatelockError> {
    bincode::deserialize(bytes).map_err(|e| GatelockError::Serialization(e.to_string()))
}

/// Raw argument bytes carried in the `TimelockInitiated` notification.
///
/// Gated calls already hold their encoded arguments; admin calls encode
/// their full payload so watchers can see the proposed value even though
/// the store key ignores it.
pub fn call_arguments(call: &Call) -> Result<Vec<u8>, GatelockError> {
    match call {
        Call::Gated { arguments, .. } => Ok(arguments.clone()),
        Call::Admin(admin) => encode_arguments(admin),
    }
}
