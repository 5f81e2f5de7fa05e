pub mod encode;
pub mod hash;

pub use encode::{call_arguments, decode_arguments, encode_arguments};
pub use hash::{blake3_hash, call_key, fingerprint, operation_id};
