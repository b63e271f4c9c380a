//! Transport layer: wire-format details (serialization/deserialization).

mod send_sms;

pub use send_sms::{
    WireError, decode_bulk_success, decode_rejection, decode_single_success,
    encode_bulk_promotional_body, encode_promotional_body, encode_transactional_body,
};
