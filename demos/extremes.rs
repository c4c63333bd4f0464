use chrono::{Datelike, Local};
use climascope::{
    Climascope, ClimascopeError, EngineConfig, FallbackMode, LatLon, NominatimGeocoder,
    PowerClient,
};

#[tokio::main]
async fn main() -> Result<(), ClimascopeError> {
    // Whole-record fallback keeps leap days answerable in short windows.
    let config = EngineConfig::builder()
        .fallback_mode(FallbackMode::WholeRecord)
        .build();
    let client =
        Climascope::with_collaborators(PowerClient::new()?, NominatimGeocoder::new()?, config);

    let today = Local::now().date_naive();
    let report = client
        .extremes()
        .location(LatLon(28.6139, 77.2090))
        .month(today.month())
        .day(today.day())
        .call()
        .await?;

    println!("Probabilities for {}-{:02}:", today.month(), today.day());
    println!("{:#?}", report.summary);
    Ok(())
}
