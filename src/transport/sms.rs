//! SMS API wire format.
//!
//! Requests are plain query strings. Responses use a bracketed list that only looks like
//! JSON: `["msgid","31885463"]`, `["status",2]`, `["error",44]`, and for the balance
//! `["balance":"-791.83","credit":"1000","currency":"EUR"]`. Quoting of numbers is
//! inconsistent, so every token is read as text and converted afterwards.

use std::str::FromStr;

use crate::domain::{
    MessageText, Outcome, RawPhoneNumber, SenderId, SmsBalance, SmsErrorCode, SmsMessage,
    SmsMessageId, SmsMessageStatus,
};

const ERROR_KEY: &str = "error";
const STATUS_KEY: &str = "status";
const DELIVERY_FIELD: &str = "dlr";

const BALANCE_KEY: &str = "balance";
const CREDIT_KEY: &str = "credit";
const CURRENCY_KEY: &str = "currency";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("unexpected response key: expected {expected:?}, got {actual:?}")]
    UnexpectedKey {
        expected: &'static str,
        actual: String,
    },

    #[error("response has no value for key {key:?}")]
    MissingValue { key: &'static str },

    #[error("value of {key:?} is not a number: {value:?}")]
    InvalidNumber { key: String, value: String },

    #[error("unknown SMS error code: {code}")]
    UnknownErrorCode { code: i32 },

    #[error("malformed key/value pair: {pair:?}")]
    MalformedPair { pair: String },

    #[error("response is not a bracketed list: {body:?}")]
    NotAList { body: String },
}

pub fn encode_send_query(message: &SmsMessage) -> Vec<(String, String)> {
    vec![
        (RawPhoneNumber::FIELD.to_owned(), message.to.raw().to_owned()),
        (SenderId::FIELD.to_owned(), message.sender.as_str().to_owned()),
        (MessageText::FIELD.to_owned(), message.text.as_str().to_owned()),
        (
            DELIVERY_FIELD.to_owned(),
            if message.delivery { "1" } else { "0" }.to_owned(),
        ),
    ]
}

pub fn encode_state_query(message_id: SmsMessageId) -> Vec<(String, String)> {
    vec![(SmsMessageId::FIELD.to_owned(), message_id.to_string())]
}

pub fn encode_balance_query() -> Vec<(String, String)> {
    Vec::new()
}

pub fn decode_send_response(
    body: &str,
) -> Result<Outcome<SmsMessageId, SmsErrorCode>, TransportError> {
    Ok(match list_value(body, SmsMessageId::FIELD)? {
        Outcome::Ok(raw) => {
            Outcome::Ok(SmsMessageId::new(parse_number(SmsMessageId::FIELD, raw)?))
        }
        Outcome::Fail(code) => Outcome::Fail(code),
    })
}

pub fn decode_state_response(
    body: &str,
) -> Result<Outcome<SmsMessageStatus, SmsErrorCode>, TransportError> {
    Ok(match list_value(body, STATUS_KEY)? {
        // The gateway leaves the status blank until the operator reports back.
        Outcome::Ok("") => Outcome::Ok(SmsMessageStatus::Unknown),
        Outcome::Ok(raw) => Outcome::Ok(SmsMessageStatus::from_code(parse_number(
            STATUS_KEY, raw,
        )?)),
        Outcome::Fail(code) => Outcome::Fail(code),
    })
}

/// Decode the balance pseudo-object.
///
/// Missing amounts default to `0.0` and a missing currency to `None`; unknown keys are
/// ignored.
pub fn decode_balance_response(
    body: &str,
) -> Result<Outcome<SmsBalance, SmsErrorCode>, TransportError> {
    let inner = strip_brackets(body)?;
    if let Some(code) = vendor_error(&list_tokens(inner))? {
        return Ok(Outcome::Fail(code));
    }

    let mut balance = SmsBalance {
        balance: 0.0,
        credit: 0.0,
        currency: None,
    };

    if inner.is_empty() {
        return Ok(Outcome::Ok(balance));
    }

    for pair in inner.split(',') {
        let (key, value) = pair
            .split_once(':')
            .ok_or_else(|| TransportError::MalformedPair {
                pair: pair.trim().to_owned(),
            })?;
        let key = trim_token(key);
        let value = pair_value(value);

        // `["error":"44"]` carries the vendor error in pair form.
        if key == ERROR_KEY {
            let raw = value.ok_or(TransportError::MissingValue { key: ERROR_KEY })?;
            return error_code(raw).map(Outcome::Fail);
        }

        let Some(value) = value else {
            continue;
        };

        match key {
            BALANCE_KEY => balance.balance = parse_amount(key, value)?,
            CREDIT_KEY => balance.credit = parse_amount(key, value)?,
            CURRENCY_KEY => balance.currency = Some(value.to_owned()),
            _ => {}
        }
    }

    Ok(Outcome::Ok(balance))
}

/// Return the value for `key` from a `["key","value"]` response, or the vendor error.
fn list_value<'a>(
    body: &'a str,
    key: &'static str,
) -> Result<Outcome<&'a str, SmsErrorCode>, TransportError> {
    let tokens = list_tokens(strip_brackets(body)?);
    if let Some(code) = vendor_error(&tokens)? {
        return Ok(Outcome::Fail(code));
    }

    let actual = tokens.first().copied().unwrap_or_default();
    if actual != key {
        return Err(TransportError::UnexpectedKey {
            expected: key,
            actual: actual.to_owned(),
        });
    }

    tokens
        .get(1)
        .copied()
        .map(Outcome::Ok)
        .ok_or(TransportError::MissingValue { key })
}

fn vendor_error(tokens: &[&str]) -> Result<Option<SmsErrorCode>, TransportError> {
    if tokens.first().copied() != Some(ERROR_KEY) {
        return Ok(None);
    }

    let raw = tokens
        .get(1)
        .copied()
        .ok_or(TransportError::MissingValue { key: ERROR_KEY })?;
    error_code(raw).map(Some)
}

fn error_code(raw: &str) -> Result<SmsErrorCode, TransportError> {
    let code: i32 = parse_number(ERROR_KEY, raw)?;
    SmsErrorCode::from_code(code).ok_or(TransportError::UnknownErrorCode { code })
}

fn list_tokens(inner: &str) -> Vec<&str> {
    inner.split(',').map(trim_token).collect()
}

/// Inner text of a `[...]` body.
fn strip_brackets(body: &str) -> Result<&str, TransportError> {
    let body = body.trim();
    body.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::trim)
        .ok_or_else(|| TransportError::NotAList {
            body: body.to_owned(),
        })
}

fn trim_token(token: &str) -> &str {
    token.trim().trim_matches('"')
}

/// Bare `null` means the field is absent.
fn pair_value(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    if raw == "null" {
        return None;
    }
    Some(trim_token(raw))
}

fn parse_number<T: FromStr>(key: &str, raw: &str) -> Result<T, TransportError> {
    raw.parse().map_err(|_| TransportError::InvalidNumber {
        key: key.to_owned(),
        value: raw.to_owned(),
    })
}

fn parse_amount(key: &str, raw: &str) -> Result<f64, TransportError> {
    let amount: f64 = parse_number(key, raw)?;
    if !amount.is_finite() {
        return Err(TransportError::InvalidNumber {
            key: key.to_owned(),
            value: raw.to_owned(),
        });
    }
    Ok(amount)
}
