use tvmaze_core::{DisplayRegion, Region, ShowBrowser, TvMazeCatalog};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let term = std::env::args().nth(1).unwrap_or_else(|| "girls".to_string());
    let catalog = TvMazeCatalog::new()?;

    println!("Searching for '{}'...\n", term);

    let shows = catalog.search_shows(&term).await?;
    println!("Found {} shows:", shows.len());
    for (i, show) in shows.iter().enumerate() {
        println!("  {}. {} - ID: {}", i + 1, show.name, show.id);
    }

    let Some(first) = shows.first() else {
        return Ok(());
    };

    println!("\nEpisodes of {}:\n", first.name);
    let episodes = catalog.get_episodes(&first.id.to_string()).await?;
    for ep in &episodes {
        println!("  S{:02}E{:02} {}", ep.season, ep.number, ep.name);
    }
    println!("\n{} episodes in total.", episodes.len());

    // Same flow through the page controller, printing the rendered regions.
    let browser = ShowBrowser::new(
        TvMazeCatalog::new()?,
        DisplayRegion::shows_list(),
        DisplayRegion::episodes_area(),
    );
    browser.submit_search(Some(term.as_str())).await?;
    browser.click_episodes_control(0).await?;

    browser
        .with_regions(|shows, episodes| {
            println!("\n#{}:\n{}", shows.id, shows.markup());
            println!("#{} (visible: {}):\n{}", episodes.id, episodes.is_visible(), episodes.markup());
        })
        .await;

    Ok(())
}
