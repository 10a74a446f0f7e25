//! Domain layer: strong types with validation and invariants (no I/O).

mod outcome;
mod request;
mod response;
mod validation;
mod value;

pub use outcome::Outcome;
pub use request::{
    SmsMessage, ViberButton, ViberMessage, ViberMessageSourceType, ViberMessageType,
    ViberOptions, ViberPlusSmsMessage,
};
pub use response::{
    SmsBalance, SmsErrorCode, SmsMessageStatus, ViberError, ViberMessageReceipt,
    ViberMessageStatus, ViberPlusSmsMessageReceipt,
};
pub use validation::ValidationError;
pub use value::{
    AccessKey, ButtonCaption, Login, MessageText, Password, PhoneNumber, RawPhoneNumber,
    SenderId, SmsMessageId, ValidityPeriod, ViberMessageId,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn viber_parts() -> (SenderId, RawPhoneNumber, MessageText) {
        (
            SenderId::new("Shop").unwrap(),
            RawPhoneNumber::new("380631111111").unwrap(),
            MessageText::new("hello").unwrap(),
        )
    }

    #[test]
    fn login_rejects_empty() {
        assert!(matches!(
            Login::new("   "),
            Err(ValidationError::Empty {
                field: Login::FIELD
            })
        ));
    }

    #[test]
    fn sms_message_defaults_to_no_delivery_receipt() {
        let (sender, to, text) = viber_parts();
        let msg = SmsMessage::new(to, sender, text);
        assert!(!msg.delivery);
        assert!(msg.with_delivery(true).delivery);
    }

    #[test]
    fn viber_message_enforces_address_limits() {
        let (_, receiver, text) = viber_parts();
        let sender = SenderId::new("x".repeat(ViberMessage::ADDR_MAX_CHARS + 1)).unwrap();
        let err = ViberMessage::new(
            sender,
            receiver,
            ViberMessageType::TextOnly,
            text,
            ViberMessageSourceType::Transactional,
            ViberOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                field: ViberMessage::SENDER_FIELD,
                max: ViberMessage::ADDR_MAX_CHARS,
                actual: ViberMessage::ADDR_MAX_CHARS + 1,
            }
        );
    }

    #[test]
    fn viber_message_enforces_text_limit() {
        let (sender, receiver, _) = viber_parts();
        let text = MessageText::new("a".repeat(ViberMessage::TEXT_MAX_CHARS + 1)).unwrap();
        let err = ViberMessage::new(
            sender,
            receiver,
            ViberMessageType::TextOnly,
            text,
            ViberMessageSourceType::Transactional,
            ViberOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TooLong {
                field: ViberMessage::TEXT_FIELD,
                ..
            }
        ));
    }

    #[test]
    fn sms_error_code_known_mapping() {
        assert_eq!(
            SmsErrorCode::from_code(44),
            Some(SmsErrorCode::InvalidLoginOrPassword)
        );
        assert_eq!(
            SmsErrorCode::from_code(51),
            Some(SmsErrorCode::InvalidPhoneNumber)
        );
        assert_eq!(SmsErrorCode::from_code(39), None);
        assert_eq!(SmsErrorCode::from_code(52), None);
        assert_eq!(SmsErrorCode::ServerError.code(), None);
        assert_eq!(SmsErrorCode::NotEnoughMoney.code(), Some(49));
    }

    #[test]
    fn sms_error_code_round_trips_over_vendor_range() {
        for code in 40..=51 {
            let known = SmsErrorCode::from_code(code).unwrap();
            assert_eq!(known.code(), Some(code));
        }
    }

    #[test]
    fn sms_error_code_auth_helper() {
        assert!(SmsErrorCode::InvalidLoginOrPassword.is_auth_error());
        assert!(!SmsErrorCode::NotEnoughMoney.is_auth_error());
        assert!(!SmsErrorCode::ServerError.is_auth_error());
    }

    #[test]
    fn message_status_tables_fall_back_to_unknown() {
        assert_eq!(SmsMessageStatus::from_code(2), SmsMessageStatus::Delivered);
        assert_eq!(SmsMessageStatus::from_code(4), SmsMessageStatus::Unknown);
        assert_eq!(SmsMessageStatus::Accepted.code(), 6);

        assert_eq!(ViberMessageStatus::from_code(5), ViberMessageStatus::Pending);
        assert_eq!(ViberMessageStatus::from_code(20), ViberMessageStatus::Unknown);
        assert_eq!(ViberMessageStatus::from_code(99), ViberMessageStatus::Unknown);
        assert_eq!(ViberMessageStatus::Unknown.code(), 20);
    }

    #[test]
    fn viber_enum_wire_codes() {
        assert_eq!(ViberMessageType::TextOnly.code(), 106);
        assert_eq!(ViberMessageType::TextImageButton2Way.code(), 208);
        assert_eq!(ViberMessageSourceType::Promotional.code(), 1);
        assert_eq!(ViberMessageSourceType::Transactional.code(), 2);
    }
}
