use std::io;
use std::time::Duration;

use decisiontelecom::{
    AccessKey, MessageText, Outcome, RawPhoneNumber, SenderId, ValidityPeriod, ViberClient,
    ViberMessage, ViberMessageSourceType, ViberMessageType, ViberOptions, ViberPlusSmsMessage,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let access_key = std::env::var("DECISIONTELECOM_ACCESS_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "DECISIONTELECOM_ACCESS_KEY environment variable is required",
        )
    })?;
    let phone = std::env::var("DECISIONTELECOM_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "DECISIONTELECOM_PHONE environment variable is required",
        )
    })?;

    let client = ViberClient::builder(AccessKey::new(access_key)?)
        .timeout(Duration::from_secs(30))
        .build_plus_sms()?;

    let viber = ViberMessage::new(
        SenderId::new("Viber")?,
        RawPhoneNumber::new(phone)?,
        ViberMessageType::TextOnly,
        MessageText::new("Your code is 1234")?,
        ViberMessageSourceType::Transactional,
        ViberOptions {
            validity_period: Some(ValidityPeriod::new(600)?),
            ..ViberOptions::default()
        },
    )?;
    let message = ViberPlusSmsMessage::new(viber, MessageText::new("Code 1234")?);

    let Outcome::Ok(id) = client.send_message(&message).await? else {
        println!("message was rejected");
        return Ok(());
    };
    println!("message id: {id}");

    match client.get_message_status(id).await? {
        Outcome::Ok(receipt) => println!(
            "viber: {:?}, sms id: {:?}, sms status: {:?}",
            receipt.status, receipt.sms_message_id, receipt.sms_message_status
        ),
        Outcome::Fail(error) => println!("status lookup rejected: {error:?}"),
    }

    Ok(())
}
