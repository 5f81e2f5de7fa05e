use gatelock_core::constants::{FINGERPRINT_DOMAIN, OPERATION_ID_DOMAIN};
use gatelock_core::operation::{Call, TimelockKey};
use gatelock_core::types::{Fingerprint, OperationId};

/// Compute BLAKE3 hash of arbitrary bytes → 32-byte array.
pub fn blake3_hash(data: &[u8]) -> [u8; 32] {
    *blake3::hash(data).as_bytes()
}

fn domain_hash(domain: &[u8], data: &[u8]) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(domain);
    hasher.update(data);
    *hasher.finalize().as_bytes()
}

/// Derive the `OperationId` for a host operation name.
pub fn operation_id(name: &str) -> OperationId {
    OperationId::from_bytes(domain_hash(OPERATION_ID_DOMAIN, name.as_bytes()))
}

/// Fingerprint canonically encoded call arguments.
pub fn fingerprint(arguments: &[u8]) -> Fingerprint {
    Fingerprint::from_bytes(domain_hash(FINGERPRINT_DOMAIN, arguments))
}

/// Store key for `call`. Admin calls map to their argument-insensitive key.
pub fn call_key(call: &Call) -> TimelockKey {
    match call {
        Call::Gated { operation, arguments } => {
            TimelockKey::gated(*operation, fingerprint(arguments))
        }
        Call::Admin(admin) => TimelockKey::admin(admin.action()),
    }
}
