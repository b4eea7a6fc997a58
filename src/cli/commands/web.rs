use crate::client::CatalogClient;
use crate::config::Config;

pub async fn cmd_web_search(
    config: &Config,
    query: &str,
    max_results: Option<i32>,
) -> anyhow::Result<()> {
    if !config.has_api_key() {
        println!("No API key configured.");
        println!("Set catalog.api_key in config.toml ('tvdb init' creates the file).");
        return Ok(());
    }

    println!("Searching the web interface for: {query}");

    let cap = max_results.unwrap_or(config.search.max_web_results);
    let client = CatalogClient::from_config(config)?;
    let results = client.search_web(query, cap).await?;

    if results.is_empty() {
        println!("No series found matching '{query}'");
        return Ok(());
    }

    println!();
    println!("Search Results:");
    println!("{:-<60}", "");

    for series in &results {
        println!("• {} (ID: {})", series.name, series.id);
        if !series.network.is_empty() {
            println!("  Network: {}", series.network);
        }
        if !series.first_aired.is_empty() {
            println!("  First aired: {}", series.first_aired);
        }
        println!();
    }

    Ok(())
}
