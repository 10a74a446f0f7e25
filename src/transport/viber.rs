use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::domain::{
    ButtonCaption, Outcome, SmsMessageId, SmsMessageStatus, ValidityPeriod, ViberError,
    ViberMessage, ViberMessageId, ViberMessageReceipt, ViberMessageStatus, ViberPlusSmsMessage,
    ViberPlusSmsMessageReceipt,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct ViberErrorJson {
    name: String,
    message: String,
    code: i32,
    status: i32,
}

impl From<ViberErrorJson> for ViberError {
    fn from(value: ViberErrorJson) -> Self {
        Self {
            name: value.name,
            message: value.message,
            code: value.code,
            status: value.status,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct SendViberJsonResponse {
    message_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
struct ReceiptJsonResponse {
    message_id: i64,
    status: i32,
}

#[derive(Debug, Clone, Deserialize)]
struct PlusSmsReceiptJsonResponse {
    message_id: i64,
    status: i32,
    #[serde(default)]
    sms_message_id: Option<i64>,
    #[serde(default)]
    sms_message_status: Option<i32>,
}

pub fn encode_send_viber_body(message: &ViberMessage) -> Value {
    Value::Object(viber_message_fields(message))
}

pub fn encode_send_viber_plus_sms_body(message: &ViberPlusSmsMessage) -> Value {
    let mut fields = viber_message_fields(message.viber());
    fields.insert(
        ViberPlusSmsMessage::SMS_TEXT_FIELD.to_owned(),
        message.sms_text().as_str().into(),
    );
    Value::Object(fields)
}

pub fn encode_message_id_body(message_id: ViberMessageId) -> Value {
    let mut fields = Map::new();
    fields.insert(ViberMessageId::FIELD.to_owned(), message_id.value().into());
    Value::Object(fields)
}

fn viber_message_fields(message: &ViberMessage) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert(
        ViberMessage::SENDER_FIELD.to_owned(),
        message.sender().as_str().into(),
    );
    fields.insert(
        ViberMessage::RECEIVER_FIELD.to_owned(),
        message.receiver().raw().into(),
    );
    fields.insert(
        "message_type".to_owned(),
        message.message_type().code().into(),
    );
    fields.insert(
        ViberMessage::TEXT_FIELD.to_owned(),
        message.text().as_str().into(),
    );
    fields.insert("source_type".to_owned(), message.source_type().code().into());

    let options = message.options();
    if let Some(image_url) = options.image_url.as_deref() {
        fields.insert("image".to_owned(), image_url.into());
    }
    if let Some(button) = options.button.as_ref() {
        fields.insert(ButtonCaption::FIELD.to_owned(), button.caption.as_str().into());
        fields.insert("button_action".to_owned(), button.action.as_str().into());
    }
    if let Some(callback_url) = options.callback_url.as_deref() {
        fields.insert("callback_url".to_owned(), callback_url.into());
    }
    if let Some(validity_period) = options.validity_period {
        fields.insert(
            ValidityPeriod::FIELD.to_owned(),
            validity_period.seconds().into(),
        );
    }
    fields
}

pub fn decode_send_viber_response(
    status: u16,
    body: &str,
) -> Result<Outcome<ViberMessageId, ViberError>, TransportError> {
    let outcome = decode_viber_response::<SendViberJsonResponse>(status, body)?;
    Ok(outcome.map(|parsed| ViberMessageId::new(parsed.message_id)))
}

pub fn decode_receipt_response(
    status: u16,
    body: &str,
) -> Result<Outcome<ViberMessageReceipt, ViberError>, TransportError> {
    let outcome = decode_viber_response::<ReceiptJsonResponse>(status, body)?;
    Ok(outcome.map(|parsed| ViberMessageReceipt {
        message_id: ViberMessageId::new(parsed.message_id),
        status: ViberMessageStatus::from_code(parsed.status),
    }))
}

pub fn decode_plus_sms_receipt_response(
    status: u16,
    body: &str,
) -> Result<Outcome<ViberPlusSmsMessageReceipt, ViberError>, TransportError> {
    let outcome = decode_viber_response::<PlusSmsReceiptJsonResponse>(status, body)?;
    Ok(outcome.map(|parsed| ViberPlusSmsMessageReceipt {
        message_id: ViberMessageId::new(parsed.message_id),
        status: ViberMessageStatus::from_code(parsed.status),
        sms_message_id: parsed.sms_message_id.map(SmsMessageId::new),
        sms_message_status: parsed.sms_message_status.map(SmsMessageStatus::from_code),
    }))
}

/// Split a Viber response into success or vendor error.
///
/// Anything that is not a 2xx answer carrying `message_id` is read as an error object.
fn decode_viber_response<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<Outcome<T, ViberError>, TransportError> {
    let json: Value = serde_json::from_str(body)?;
    let has_message_id = json.get(ViberMessageId::FIELD).is_some();

    if !super::is_success_status(status) || !has_message_id {
        let error: ViberErrorJson = serde_json::from_value(json)?;
        return Ok(Outcome::Fail(error.into()));
    }

    Ok(Outcome::Ok(serde_json::from_value(json)?))
}
