use anyhow::Context;
use comagic::core::record::Record;
use comagic::models::VirtualNumber;
use comagic::{Comagic, ComagicConfig, ListOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // COMAGIC_LOGIN + COMAGIC_PASSWORD or COMAGIC_TOKEN, optionally from .env
    let config = ComagicConfig::load("COMAGIC").context("loading credentials")?;
    let mut client = Comagic::new(config).await?;

    let account = client.get_account(None).await?;
    println!(
        "Account: {} ({})",
        account.name.unwrap_or_default(),
        account.app_id.unwrap_or_default()
    );

    let numbers = client
        .get_virtual_numbers(
            ListOptions::new()
                .limit(5)
                .fields([VirtualNumber::FIELD.virtual_phone_number, VirtualNumber::FIELD.status]),
        )
        .await?;
    println!("Found {} virtual numbers", numbers.len());
    for number in numbers {
        let number = number?;
        println!("{}", serde_json::to_string(&number.to_map())?);
    }

    Ok(())
}
