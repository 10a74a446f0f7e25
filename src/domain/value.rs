use std::fmt;

use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS API account login.
///
/// Invariant: non-empty after trimming.
pub struct Login(String);

impl Login {
    /// Query parameter name used by the SMS API (`login`).
    pub const FIELD: &'static str = "login";

    /// Create a validated [`Login`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated login.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// SMS API account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Query parameter name used by the SMS API (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Viber API access key.
///
/// The key is the whole Basic credential: it is base64-encoded as-is, without a
/// `user:password` pair. Invariant: non-empty after trimming.
pub struct AccessKey(String);

impl AccessKey {
    pub const FIELD: &'static str = "access_key";

    /// Create a validated [`AccessKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message sender: a phone number with country code or an alphanumeric name.
///
/// Invariant: non-empty after trimming.
pub struct SenderId(String);

impl SenderId {
    /// Query parameter name used by the SMS API (`sender`).
    pub const FIELD: &'static str = "sender";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message body.
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Query parameter name used by the SMS API (`text`).
    pub const FIELD: &'static str = "text";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Caption of a Viber message button.
///
/// Invariant: non-empty after trimming and at most [`ButtonCaption::MAX_CHARS`] characters.
pub struct ButtonCaption(String);

impl ButtonCaption {
    pub const FIELD: &'static str = "button_caption";
    pub const MAX_CHARS: usize = 30;

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        ensure_max_chars(Self::FIELD, &value, Self::MAX_CHARS)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated receiver phone number (MSISDN).
///
/// Invariant: non-empty after trimming. This type does not normalize; if you want E.164
/// normalization, parse into [`PhoneNumber`] and convert it into [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Query parameter name used by the SMS API (`phone`).
    pub const FIELD: &'static str = "phone";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to the gateway.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert an already-parsed phone number to a normalized raw value (E.164).
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
}

impl PhoneNumber {
    pub const FIELD: &'static str = RawPhoneNumber::FIELD;

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164 })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Id of a submitted SMS message (`msgid`).
pub struct SmsMessageId(i64);

impl SmsMessageId {
    /// Query parameter / response key used by the SMS API (`msgid`).
    pub const FIELD: &'static str = "msgid";

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for SmsMessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Id of a submitted Viber message (`message_id`).
///
/// Status lookups only work for messages sent in the last 5 days.
pub struct ViberMessageId(i64);

impl ViberMessageId {
    /// JSON field name used by the Viber API (`message_id`).
    pub const FIELD: &'static str = "message_id";

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ViberMessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Lifetime of a Viber message in seconds (`validity_period`).
///
/// A message not delivered within this period is neither delivered nor charged. When
/// omitted, the gateway keeps trying for one day.
///
/// Invariant: `40..=432000` (5 days).
pub struct ValidityPeriod(u32);

impl ValidityPeriod {
    pub const FIELD: &'static str = "validity_period";

    /// Minimum allowed period in seconds.
    pub const MIN: u32 = 40;
    /// Maximum allowed period in seconds.
    pub const MAX: u32 = 432_000;

    /// Create a validated validity period.
    pub fn new(seconds: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&seconds) {
            return Err(ValidationError::ValidityPeriodOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: seconds,
            });
        }
        Ok(Self(seconds))
    }

    /// Get the period in seconds.
    pub fn seconds(self) -> u32 {
        self.0
    }
}

pub(crate) fn ensure_max_chars(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let login = Login::new(" user ").unwrap();
        assert_eq!(login.as_str(), "user");
        assert!(Login::new("").is_err());

        let password = Password::new(" secret ").unwrap();
        assert_eq!(password.as_str(), " secret ");
        assert!(Password::new("").is_err());

        let key = AccessKey::new("  key ").unwrap();
        assert_eq!(key.as_str(), "key");
        assert!(AccessKey::new("  ").is_err());

        let sender = SenderId::new(" sender ").unwrap();
        assert_eq!(sender.as_str(), "sender");

        let msg = MessageText::new(" hi ").unwrap();
        assert_eq!(msg.as_str(), " hi ");
        assert!(MessageText::new("  ").is_err());
    }

    #[test]
    fn secrets_are_redacted_in_debug_output() {
        let password = Password::new("hunter2").unwrap();
        assert_eq!(format!("{password:?}"), "Password(***)");

        let key = AccessKey::new("top-secret").unwrap();
        assert!(!format!("{key:?}").contains("top-secret"));
    }

    #[test]
    fn button_caption_counts_characters_not_bytes() {
        let caption = "ы".repeat(ButtonCaption::MAX_CHARS);
        assert!(ButtonCaption::new(caption.clone()).is_ok());

        let err = ButtonCaption::new(format!("{caption}ы")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                field: ButtonCaption::FIELD,
                max: ButtonCaption::MAX_CHARS,
                actual: ButtonCaption::MAX_CHARS + 1,
            }
        );
    }

    #[test]
    fn raw_phone_number_trims_and_exposes_raw() {
        let raw = RawPhoneNumber::new(" 380631111111 ").unwrap();
        assert_eq!(raw.raw(), "380631111111");
        assert!(RawPhoneNumber::new("").is_err());
    }

    #[test]
    fn phone_number_parsing_and_equality_use_e164() {
        let p1 = PhoneNumber::parse(None, "+380631234567").unwrap();
        let p2 = PhoneNumber::parse(None, "+380 63 123 45 67").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.e164(), "+380631234567");

        let raw: RawPhoneNumber = p1.into();
        assert_eq!(raw.raw(), "+380631234567");
        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
    }

    #[test]
    fn validity_period_enforces_range() {
        assert!(ValidityPeriod::new(ValidityPeriod::MIN).is_ok());
        assert!(ValidityPeriod::new(ValidityPeriod::MAX).is_ok());
        assert!(ValidityPeriod::new(ValidityPeriod::MIN - 1).is_err());
        assert!(ValidityPeriod::new(ValidityPeriod::MAX + 1).is_err());
    }

    #[test]
    fn message_ids_display_as_plain_numbers() {
        assert_eq!(SmsMessageId::new(31_885_463).to_string(), "31885463");
        assert_eq!(ViberMessageId::new(429).to_string(), "429");
    }
}
