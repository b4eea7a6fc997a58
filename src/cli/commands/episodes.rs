use crate::client::CatalogClient;
use crate::config::Config;

pub async fn cmd_episodes(config: &Config, id: u64, season: Option<u64>) -> anyhow::Result<()> {
    if !config.has_api_key() {
        println!("No API key configured.");
        println!("Set catalog.api_key in config.toml ('tvdb init' creates the file).");
        return Ok(());
    }

    let client = CatalogClient::from_config(config)?;
    let mut series = client.get_by_id(id).await?;
    client.enrich_series(&mut series).await?;

    println!("Episodes for: {}", series.name);
    println!("{:-<70}", "");

    if series.seasons.is_empty() {
        println!("No episodes listed.");
        return Ok(());
    }

    for (number, episodes) in &series.seasons {
        if let Some(wanted) = season
            && *number != wanted
        {
            continue;
        }

        if *number == 0 {
            println!("Specials");
        } else {
            println!("Season {number}");
        }

        for episode in episodes {
            let title = if episode.name.is_empty() {
                "(no title)"
            } else {
                episode.name.as_str()
            };
            let aired = if episode.first_aired.is_empty() {
                String::new()
            } else {
                format!(" - {}", episode.first_aired)
            };
            println!("  {:>3}. {title}{aired}", episode.episode_number);
        }
        println!();
    }

    Ok(())
}
