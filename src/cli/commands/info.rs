use crate::client::CatalogClient;
use crate::config::Config;

pub async fn cmd_info(config: &Config, id: u64) -> anyhow::Result<()> {
    if !config.has_api_key() {
        println!("No API key configured.");
        println!("Set catalog.api_key in config.toml ('tvdb init' creates the file).");
        return Ok(());
    }

    let client = CatalogClient::from_config(config)?;
    let mut series = client.get_by_id(id).await?;
    client.enrich_series(&mut series).await?;

    println!("Series Info");
    println!("{:-<60}", "");
    println!("Name:     {}", series.name);
    println!("ID:       {}", series.id);
    if !series.network.is_empty() {
        println!("Network:  {}", series.network);
    }
    if !series.status.is_empty() {
        println!("Status:   {}", series.status);
    }
    if !series.airs_day_of_week.is_empty() {
        println!("Airs:     {} {}", series.airs_day_of_week, series.airs_time);
    }
    if !series.first_aired.is_empty() {
        println!("Aired:    {}", series.first_aired);
    }
    if !series.rating.is_empty() {
        println!("Rating:   {} ({} votes)", series.rating, series.rating_count);
    }
    if !series.genre.is_empty() {
        println!("Genres:   {}", series.genre.join(", "));
    }
    if !series.actors.is_empty() {
        println!("Actors:   {}", series.actors.join(", "));
    }
    if !series.imdb_id.is_empty() {
        println!("IMDB:     {}", series.imdb_id);
    }
    if !series.overview.is_empty() {
        println!();
        println!("{}", series.overview);
    }

    println!();
    println!(
        "Seasons ({}, {} episodes total):",
        series.seasons.len(),
        series.episode_count()
    );
    for (number, episodes) in &series.seasons {
        let label = if *number == 0 {
            "Specials".to_string()
        } else {
            format!("Season {number}")
        };
        println!("  {label}: {} episodes", episodes.len());
    }

    println!();
    println!("Use 'tvdb episodes {id}' for the full episode list.");

    Ok(())
}
