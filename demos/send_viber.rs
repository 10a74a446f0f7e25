use std::io;

use decisiontelecom::{
    AccessKey, MessageText, Outcome, RawPhoneNumber, SenderId, ViberClient, ViberMessage,
    ViberMessageSourceType, ViberMessageType, ViberOptions,
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
    let sender = std::env::var("DECISIONTELECOM_SENDER").unwrap_or_else(|_| "Viber".to_owned());

    let client = ViberClient::new(AccessKey::new(access_key)?);
    let message = ViberMessage::new(
        SenderId::new(sender)?,
        RawPhoneNumber::new(phone)?,
        ViberMessageType::TextOnly,
        MessageText::new("Hello from the decisiontelecom demo.")?,
        ViberMessageSourceType::Transactional,
        ViberOptions::default(),
    )?;

    match client.send_message(&message).await? {
        Outcome::Ok(id) => {
            println!("message id: {id}");
            match client.get_message_status(id).await? {
                Outcome::Ok(receipt) => println!("status: {:?}", receipt.status),
                Outcome::Fail(error) => println!("status lookup rejected: {error:?}"),
            }
        }
        Outcome::Fail(error) => println!("rejected: {} ({})", error.name, error.message),
    }

    Ok(())
}
