use std::path::Path;

use colored::Colorize;

use wr_engine::GameConfig;

pub fn run(world: &Path) -> Result<(), String> {
    let (catalog, source) = super::load_world(world)?;
    let config = GameConfig::default();

    catalog
        .validate_inventory(&config.starting_inventory)
        .map_err(|e| format!("starting pack does not fit this world: {e}"))?;
    let reachable = catalog
        .reachable_from(&config.start_location)
        .map_err(|e| format!("no starting location: {e}"))?;

    println!("  World: {source}");
    println!(
        "  {} locations, {} items, {} reachable from '{}'",
        catalog.locations().len(),
        catalog.items().len(),
        reachable.len(),
        config.start_location,
    );

    if reachable.contains(config.victory_location.as_str()) {
        println!("  All checks passed.");
    } else {
        println!(
            "  {} '{}' cannot be reached from '{}'; this world can't be won.",
            "warning:".yellow().bold(),
            config.victory_location,
            config.start_location,
        );
    }

    Ok(())
}
