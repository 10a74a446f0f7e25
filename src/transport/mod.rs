//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod sms;
mod viber;

pub use sms::{
    decode_balance_response, decode_send_response, decode_state_response, encode_balance_query,
    encode_send_query, encode_state_query,
};
pub use viber::{
    decode_plus_sms_receipt_response, decode_receipt_response, decode_send_viber_response,
    encode_message_id_body, encode_send_viber_body, encode_send_viber_plus_sms_body,
};

pub fn is_success_status(status: u16) -> bool {
    (200..=299).contains(&status)
}
