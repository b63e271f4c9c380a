use std::io;

use smsowl::{Credentials, PromotionalSms, SmsOwlClient};

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
    let message = std::env::var("SMSOWL_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smsowl demo.".to_owned());

    let client = SmsOwlClient::new(Credentials::new(account_id, api_key));
    let sms_id = client
        .send_promotional_sms(PromotionalSms::new(sender_id, phone, message))
        .await?;
    println!("sms_id: {sms_id}");

    Ok(())
}
