use std::io;

use decisiontelecom::{
    MessageText, Outcome, RawPhoneNumber, SenderId, SmsAuth, SmsClient, SmsMessage,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let login = required_env("DECISIONTELECOM_LOGIN")?;
    let password = required_env("DECISIONTELECOM_PASSWORD")?;
    let phone = required_env("DECISIONTELECOM_PHONE")?;
    let sender = std::env::var("DECISIONTELECOM_SENDER").unwrap_or_else(|_| "it-decision".to_owned());
    let text = std::env::var("DECISIONTELECOM_MESSAGE")
        .unwrap_or_else(|_| "Hello from the decisiontelecom demo.".to_owned());

    let client = SmsClient::new(SmsAuth::new(login, password)?);
    let message = SmsMessage::new(
        RawPhoneNumber::new(phone)?,
        SenderId::new(sender)?,
        MessageText::new(text)?,
    )
    .with_delivery(true);

    match client.send_message(&message).await? {
        Outcome::Ok(id) => {
            println!("message id: {id}");
            match client.get_message_status(id).await? {
                Outcome::Ok(status) => println!("status: {status:?}"),
                Outcome::Fail(code) => println!("status lookup rejected: {code:?}"),
            }
        }
        Outcome::Fail(code) if code.is_auth_error() => {
            println!("credentials rejected: {code:?}; check DECISIONTELECOM_LOGIN/PASSWORD")
        }
        Outcome::Fail(code) => println!("rejected: {code:?} (code {:?})", code.code()),
    }

    Ok(())
}
