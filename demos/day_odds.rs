use climascope::Climascope;
use std::env;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let place = env::args().nth(1).unwrap_or_else(|| "New Delhi".to_string());
    let client = Climascope::new()?;

    let resolved = client.geocode(&place).await?;
    println!("{} -> {:?}", resolved.name, resolved.location);

    let report = client
        .query()
        .location(resolved.location)
        .month(7)
        .day(4)
        .call()
        .await?;

    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}
