use std::io;
use std::time::Duration;

use smsowl::{Credentials, Placeholders, SmsOwlClient, TransactionalSms};

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
    tracing_subscriber::fmt::init();

    let account_id = required_env("SMSOWL_ACCOUNT_ID")?;
    let api_key = required_env("SMSOWL_API_KEY")?;
    let sender_id = required_env("SMSOWL_SENDER_ID")?;
    let phone = required_env("SMSOWL_PHONE")?;
    let template_id = required_env("SMSOWL_TEMPLATE_ID")?;
    let otp = std::env::var("SMSOWL_OTP").unwrap_or_else(|_| "4821".to_owned());

    let client = SmsOwlClient::builder(Credentials::new(account_id, api_key))
        .timeout(Duration::from_secs(10))
        .build()?;

    let request = TransactionalSms::new(sender_id, phone, template_id, Placeholders::new())
        .placeholder("otp", otp);
    let sms_id = client.send_transactional_sms(request).await?;
    println!("sms_id: {sms_id}");

    Ok(())
}
