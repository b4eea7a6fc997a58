use crate::client::CatalogClient;
use crate::config::Config;

pub async fn cmd_lookup(config: &Config, imdb_id: &str) -> anyhow::Result<()> {
    println!("Looking up IMDB id: {imdb_id}");

    let client = CatalogClient::from_config(config)?;
    let series = client.get_by_imdb_id(imdb_id).await?;

    println!();
    println!("• {} (ID: {})", series.name, series.id);
    if !series.network.is_empty() {
        println!("  Network: {}", series.network);
    }
    if !series.status.is_empty() {
        println!("  Status: {}", series.status);
    }
    if !series.first_aired.is_empty() {
        println!("  First aired: {}", series.first_aired);
    }

    println!();
    println!("Use 'tvdb info {}' for details.", series.id);

    Ok(())
}
