use crate::domain::validation::ValidationError;
use crate::domain::value::{
    ButtonCaption, MessageText, RawPhoneNumber, SenderId, ValidityPeriod, ensure_max_chars,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// SMS message submitted through `send`.
pub struct SmsMessage {
    /// Receiver phone number (MSISDN destination).
    pub to: RawPhoneNumber,
    /// Phone number with country code, or an alphanumeric name of up to 11 characters.
    pub sender: SenderId,
    pub text: MessageText,
    /// Ask the gateway to keep a delivery receipt for later status lookups (`dlr=1`).
    pub delivery: bool,
}

impl SmsMessage {
    /// Create a message without a delivery receipt request.
    pub fn new(to: RawPhoneNumber, sender: SenderId, text: MessageText) -> Self {
        Self {
            to,
            sender,
            text,
            delivery: false,
        }
    }

    /// Set the delivery receipt flag.
    pub fn with_delivery(mut self, delivery: bool) -> Self {
        self.delivery = delivery;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViberMessageType {
    /// Text only (convenient for transactional messages).
    TextOnly,
    /// Text, image and button (convenient for promotional messages).
    TextImageButton,
    /// Two-way text only.
    TextOnly2Way,
    /// Two-way text, image and button.
    TextImageButton2Way,
}

impl ViberMessageType {
    /// Numeric code used on the wire.
    pub fn code(self) -> u16 {
        match self {
            Self::TextOnly => 106,
            Self::TextImageButton => 108,
            Self::TextOnly2Way => 206,
            Self::TextImageButton2Way => 208,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViberMessageSourceType {
    /// Message may carry text, an image and a button.
    Promotional,
    /// Message may carry text only.
    Transactional,
}

impl ViberMessageSourceType {
    pub fn code(self) -> u8 {
        match self {
            Self::Promotional => 1,
            Self::Transactional => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Call-to-action button shown under a promotional Viber message.
pub struct ViberButton {
    pub caption: ButtonCaption,
    /// URL opened when the button is pressed.
    pub action: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Optional parts of a Viber message.
pub struct ViberOptions {
    /// JPEG or PNG, at most 400x400 pixels.
    pub image_url: Option<String>,
    pub button: Option<ViberButton>,
    /// URL the gateway calls back with status updates.
    pub callback_url: Option<String>,
    pub validity_period: Option<ValidityPeriod>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViberMessage {
    sender: SenderId,
    receiver: RawPhoneNumber,
    message_type: ViberMessageType,
    text: MessageText,
    source_type: ViberMessageSourceType,
    options: ViberOptions,
}

impl ViberMessage {
    pub const SENDER_FIELD: &'static str = "source_addr";
    pub const RECEIVER_FIELD: &'static str = "destination_addr";
    pub const TEXT_FIELD: &'static str = "text";

    pub const ADDR_MAX_CHARS: usize = 20;
    pub const TEXT_MAX_CHARS: usize = 1000;

    /// Create a validated Viber message.
    ///
    /// Sender and receiver are limited to 20 characters, the text to 1000 characters.
    pub fn new(
        sender: SenderId,
        receiver: RawPhoneNumber,
        message_type: ViberMessageType,
        text: MessageText,
        source_type: ViberMessageSourceType,
        options: ViberOptions,
    ) -> Result<Self, ValidationError> {
        ensure_max_chars(Self::SENDER_FIELD, sender.as_str(), Self::ADDR_MAX_CHARS)?;
        ensure_max_chars(Self::RECEIVER_FIELD, receiver.raw(), Self::ADDR_MAX_CHARS)?;
        ensure_max_chars(Self::TEXT_FIELD, text.as_str(), Self::TEXT_MAX_CHARS)?;
        Ok(Self {
            sender,
            receiver,
            message_type,
            text,
            source_type,
            options,
        })
    }

    pub fn sender(&self) -> &SenderId {
        &self.sender
    }

    pub fn receiver(&self) -> &RawPhoneNumber {
        &self.receiver
    }

    pub fn message_type(&self) -> ViberMessageType {
        self.message_type
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn source_type(&self) -> ViberMessageSourceType {
        self.source_type
    }

    pub fn options(&self) -> &ViberOptions {
        &self.options
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Viber message with an SMS fallback.
///
/// When a transactional Viber message is not delivered, the gateway sends `sms_text` as a
/// plain SMS instead (70 characters for UCS-2, 160 for Latin).
pub struct ViberPlusSmsMessage {
    viber: ViberMessage,
    sms_text: MessageText,
}

impl ViberPlusSmsMessage {
    pub const SMS_TEXT_FIELD: &'static str = "text_sms";

    pub fn new(viber: ViberMessage, sms_text: MessageText) -> Self {
        Self { viber, sms_text }
    }

    pub fn viber(&self) -> &ViberMessage {
        &self.viber
    }

    pub fn sms_text(&self) -> &MessageText {
        &self.sms_text
    }
}
