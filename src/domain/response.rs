use crate::domain::value::{SmsMessageId, ViberMessageId};

#[derive(Debug, Clone, PartialEq)]
/// Account balance returned by the SMS API.
///
/// Amounts absent from the response are reported as `0.0`; an absent currency as `None`.
pub struct SmsBalance {
    pub balance: f64,
    /// Credit line, if one is opened.
    pub credit: f64,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Error reported by the SMS API (`["error",N]`).
pub enum SmsErrorCode {
    InvalidNumber,
    IncorrectSender,
    InvalidMessageId,
    IncorrectJson,
    InvalidLoginOrPassword,
    UserLocked,
    EmptyText,
    EmptyLogin,
    EmptyPassword,
    NotEnoughMoney,
    AuthorizationError,
    InvalidPhoneNumber,
    /// The server answered with a non-2xx HTTP status. Never sent by the vendor.
    ServerError,
}

impl SmsErrorCode {
    /// Convert a vendor error code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            40 => Self::InvalidNumber,
            41 => Self::IncorrectSender,
            42 => Self::InvalidMessageId,
            43 => Self::IncorrectJson,
            44 => Self::InvalidLoginOrPassword,
            45 => Self::UserLocked,
            46 => Self::EmptyText,
            47 => Self::EmptyLogin,
            48 => Self::EmptyPassword,
            49 => Self::NotEnoughMoney,
            50 => Self::AuthorizationError,
            51 => Self::InvalidPhoneNumber,
            _ => return None,
        })
    }

    /// Vendor code, or `None` for [`SmsErrorCode::ServerError`].
    pub fn code(self) -> Option<i32> {
        Some(match self {
            Self::InvalidNumber => 40,
            Self::IncorrectSender => 41,
            Self::InvalidMessageId => 42,
            Self::IncorrectJson => 43,
            Self::InvalidLoginOrPassword => 44,
            Self::UserLocked => 45,
            Self::EmptyText => 46,
            Self::EmptyLogin => 47,
            Self::EmptyPassword => 48,
            Self::NotEnoughMoney => 49,
            Self::AuthorizationError => 50,
            Self::InvalidPhoneNumber => 51,
            Self::ServerError => return None,
        })
    }

    /// Whether the credentials were rejected.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self,
            Self::InvalidLoginOrPassword
                | Self::UserLocked
                | Self::EmptyLogin
                | Self::EmptyPassword
                | Self::AuthorizationError
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Delivery status of an SMS message.
pub enum SmsMessageStatus {
    Unknown,
    Delivered,
    Expired,
    Undeliverable,
    Accepted,
}

impl SmsMessageStatus {
    /// Map a vendor status code. Codes outside the table map to [`SmsMessageStatus::Unknown`].
    pub fn from_code(code: i32) -> Self {
        match code {
            2 => Self::Delivered,
            3 => Self::Expired,
            5 => Self::Undeliverable,
            6 => Self::Accepted,
            _ => Self::Unknown,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Unknown => 0,
            Self::Delivered => 2,
            Self::Expired => 3,
            Self::Undeliverable => 5,
            Self::Accepted => 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Error object returned by the Viber API.
pub struct ViberError {
    pub name: String,
    pub message: String,
    pub code: i32,
    pub status: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViberMessageStatus {
    Sent,
    Delivered,
    Error,
    Rejected,
    Undelivered,
    Pending,
    Unknown,
}

impl ViberMessageStatus {
    /// Map a vendor status code. Codes outside the table map to [`ViberMessageStatus::Unknown`].
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Sent,
            1 => Self::Delivered,
            2 => Self::Error,
            3 => Self::Rejected,
            4 => Self::Undelivered,
            5 => Self::Pending,
            _ => Self::Unknown,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Sent => 0,
            Self::Delivered => 1,
            Self::Error => 2,
            Self::Rejected => 3,
            Self::Undelivered => 4,
            Self::Pending => 5,
            Self::Unknown => 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Status of a Viber message.
pub struct ViberMessageReceipt {
    pub message_id: ViberMessageId,
    pub status: ViberMessageStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Status of a Viber message and of its SMS fallback.
///
/// The SMS fields are only present for transactional messages that fell back to SMS.
pub struct ViberPlusSmsMessageReceipt {
    pub message_id: ViberMessageId,
    pub status: ViberMessageStatus,
    pub sms_message_id: Option<SmsMessageId>,
    pub sms_message_status: Option<SmsMessageStatus>,
}
