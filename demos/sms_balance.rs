use std::io;

use decisiontelecom::{Outcome, SmsAuth, SmsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let login = std::env::var("DECISIONTELECOM_LOGIN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "DECISIONTELECOM_LOGIN environment variable is required",
        )
    })?;
    let password = std::env::var("DECISIONTELECOM_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "DECISIONTELECOM_PASSWORD environment variable is required",
        )
    })?;

    let client = SmsClient::new(SmsAuth::new(login, password)?);
    match client.get_balance().await? {
        Outcome::Ok(balance) => println!(
            "balance: {}, credit: {}, currency: {}",
            balance.balance,
            balance.credit,
            balance.currency.as_deref().unwrap_or("-")
        ),
        Outcome::Fail(code) => println!("rejected: {code:?}"),
    }

    Ok(())
}
