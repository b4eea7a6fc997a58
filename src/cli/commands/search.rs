use crate::client::CatalogClient;
use crate::config::Config;
use crate::constants::limits;

pub async fn cmd_search(config: &Config, query: &str) -> anyhow::Result<()> {
    println!("Searching for: {query}");

    let client = CatalogClient::from_config(config)?;
    let results = client.search_by_name(query).await?;

    if results.is_empty() {
        println!("No series found matching '{query}'");
        return Ok(());
    }

    println!();
    println!("Search Results:");
    println!("{:-<60}", "");

    for series in results.iter().take(limits::SEARCH_DISPLAY_LIMIT) {
        println!("• {} (ID: {})", series.name, series.id);
        if !series.network.is_empty() {
            println!("  Network: {}", series.network);
        }
        if !series.first_aired.is_empty() {
            println!("  First aired: {}", series.first_aired);
        }
        if !series.overview.is_empty() {
            let overview = if series.overview.len() > 160 {
                format!("{}...", &series.overview[0..160])
            } else {
                series.overview.clone()
            };
            println!("  {overview}");
        }
        println!();
    }

    if results.len() > limits::SEARCH_DISPLAY_LIMIT {
        println!(
            "... and {} more matches",
            results.len() - limits::SEARCH_DISPLAY_LIMIT
        );
    }

    println!("To inspect a series: tvdb info <id>");

    Ok(())
}
