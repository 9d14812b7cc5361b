//! Text rendering for locations, status and help.
//!
//! Every function here is pure: it reads state and returns text. Side
//! effects of rendering (first-visit mileage) live in the session.

use wr_core::{Catalog, Item, Location};

use crate::rules::{GAUGE_MAX, JOURNEY_MILES};
use crate::session::LossCause;
use crate::traveler::{Gauge, Traveler};

/// A gauge line: `label: [████░░░░░░] 40%`.
pub fn gauge_line(label: &str, gauge: Gauge) -> String {
    format!("{label}: [{}] {gauge}", gauge.bar())
}

/// Describe a location: name, description, routes, items and warnings,
/// followed by the brief status block.
pub fn describe_location(location: &Location, catalog: &Catalog, rider: &Traveler) -> String {
    let mut output = String::new();

    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&location.name);
    output.push('\n');
    output.push_str(&"-".repeat(location.name.chars().count()));
    output.push('\n');
    output.push_str(&location.description);
    output.push('\n');

    let routes = location.routes();
    if !routes.is_empty() {
        output.push_str(&format!("\nRoutes: {}\n", routes.join(", ")));
    }

    if !location.items.is_empty() {
        let names: Vec<&str> = location
            .items
            .iter()
            .map(|id| catalog.item_name(id))
            .collect();
        output.push_str(&format!("\nYou spot: {}\n", names.join(", ")));
    }

    if location.dangerous {
        output.push_str("DANGER: This area looks hazardous!\n");
    }

    output.push('\n');
    output.push_str(&brief_status(rider));
    output
}

/// Fuel and bike bars, plus health when it is below full.
pub fn brief_status(rider: &Traveler) -> String {
    let mut lines = vec![
        gauge_line("Fuel", rider.fuel),
        gauge_line("Bike", rider.condition),
    ];
    if rider.health.value() < GAUGE_MAX {
        lines.push(gauge_line("Health", rider.health));
    }
    lines.join("\n")
}

/// Compact effect summary such as `(fuel +25, health +10)`.
pub fn effect_summary(item: &Item) -> Option<String> {
    if !item.has_effect() {
        return None;
    }
    let mut parts = Vec::new();
    if item.fuel_value > 0 {
        parts.push(format!("fuel +{}", item.fuel_value));
    }
    if item.food_value > 0 {
        parts.push(format!("health +{}", item.food_value));
    }
    if item.repair_value > 0 {
        parts.push(format!("repair +{}", item.repair_value));
    }
    Some(format!("({})", parts.join(", ")))
}

/// List the rider's pack.
pub fn inventory_listing(rider: &Traveler, catalog: &Catalog) -> String {
    if rider.inventory.is_empty() {
        return "Your pack is empty.".to_string();
    }

    let mut output = "SURVIVAL PACK:".to_string();
    for id in &rider.inventory {
        let Some(item) = catalog.item(id) else {
            continue;
        };
        output.push_str(&format!("\n  - {}", item.name));
        if let Some(effects) = effect_summary(item) {
            output.push_str(&format!("\n    {effects}"));
        }
    }
    output
}

/// Describe a single item with its nonzero effects.
pub fn item_details(item: &Item) -> String {
    let mut output = format!("{}\n  {}", item.name, item.description);
    if item.fuel_value > 0 {
        output.push_str(&format!("\n  Fuel value: +{}", item.fuel_value));
    }
    if item.food_value > 0 {
        output.push_str(&format!("\n  Health value: +{}", item.food_value));
    }
    if item.repair_value > 0 {
        output.push_str(&format!("\n  Repair value: +{}", item.repair_value));
    }
    output
}

/// Full rider status with the distance estimate.
pub fn full_status(rider: &Traveler, location_name: &str) -> String {
    let remaining = JOURNEY_MILES.saturating_sub(rider.miles_traveled);
    format!(
        "RIDER STATUS:\n\
         Location: {location_name}\n\
         Miles Traveled: {}\n\
         Days Survived: {}\n\
         Health: {}\n\
         Fuel: {}\n\
         Bike Condition: {}\n\
         Estimated miles to Los Angeles: {remaining}",
        rider.miles_traveled,
        rider.whole_days(),
        rider.health,
        rider.fuel,
        rider.condition,
    )
}

/// Miles and whole days, two lines.
pub fn journey_summary(rider: &Traveler) -> String {
    format!(
        "Miles traveled: {}\nDays survived: {}",
        rider.miles_traveled,
        rider.whole_days()
    )
}

/// Text for reaching the victory location.
pub fn victory(rider: &Traveler) -> String {
    format!(
        "INCREDIBLE! You've made it to Los Angeles!\n\
         Against all odds, you've crossed the wasteland and reached the City of Angels!\n{}",
        journey_summary(rider)
    )
}

/// Text for running out of a critical resource.
pub fn defeat(cause: LossCause, rider: &Traveler) -> String {
    let story = match cause {
        LossCause::OutOfFuel => {
            "Your bike runs out of fuel in the middle of the wasteland...\n\
             Without transportation, you become another casualty of the apocalypse."
        }
        LossCause::BrokenDown => {
            "Your motorcycle breaks down beyond repair...\n\
             Stranded in the wasteland, your journey ends here."
        }
    };
    format!("{story}\n{}", journey_summary(rider))
}

/// Help text, optionally for one topic.
pub fn help(topic: Option<&str>) -> String {
    match topic {
        Some("movement" | "move" | "ride") => "MOVEMENT:\n\
            ride <direction>   - ride through an exit (also go, move, drive)\n\
            north/n, south/s, east/e, west/w, up, down\n\
            Leaving a location costs fuel; steep routes can damage the bike."
            .to_string(),
        Some("items" | "item") => "ITEMS:\n\
            take <item>        - pick up items from the wasteland\n\
            drop <item>        - drop items from your pack\n\
            use <item>         - consume food, fuel, or medicine\n\
            examine <item>     - get detailed information about items"
            .to_string(),
        Some("bike" | "maintenance") => "BIKE MAINTENANCE:\n\
            refuel <item>      - add fuel to your tank\n\
            repair <item>      - fix your bike with tools/parts\n\
            rest               - make camp and recover health (burns fuel)"
            .to_string(),
        Some("game" | "save" | "load") => "GAME:\n\
            save               - save your progress\n\
            load               - load saved game\n\
            help [topic]       - show help (movement, items, bike, game)\n\
            quit/q             - end your journey"
            .to_string(),
        Some(other) => format!("No help available for '{other}'."),
        None => "WASTELAND RIDER COMMANDS:\n\
            \n\
            MOVEMENT:\n\
            \x20  ride <direction> | north/n, south/s, east/e, west/w\n\
            \n\
            ITEMS:\n\
            \x20  take <item>     - pick up items from the wasteland\n\
            \x20  drop <item>     - drop items from your pack\n\
            \x20  use <item>      - consume food, fuel, or medicine\n\
            \x20  examine <item>  - get detailed information about items\n\
            \n\
            BIKE MAINTENANCE:\n\
            \x20  refuel <item>   - add fuel to your tank\n\
            \x20  repair <item>   - fix your bike with tools/parts\n\
            \x20  rest            - make camp and recover health\n\
            \n\
            INFORMATION:\n\
            \x20  look/l          - look around your current location\n\
            \x20  inventory/i     - check your survival pack\n\
            \x20  status          - view detailed rider and bike status\n\
            \n\
            GAME:\n\
            \x20  save            - save your progress\n\
            \x20  load            - load saved game\n\
            \x20  help/h [topic]  - show this help\n\
            \x20  quit/q          - end your journey\n\
            \n\
            SURVIVAL TIPS:\n\
            - Keep your fuel tank full - running out means death\n\
            - Maintain your bike - breakdowns are fatal\n\
            - Rest when injured, but watch your fuel consumption\n\
            - Dangerous areas have better loot but more risks\n\
            - Your goal: Reach Los Angeles alive!"
            .to_string(),
    }
}
