//! Shared test world and session builders.

use wr_core::Catalog;

use crate::config::GameConfig;
use crate::session::GameSession;

/// Four locations: a costly camp, a dangerous road to the coast and a
/// steep ridge.
pub(crate) const TEST_WORLD: &str = r#"{
    "locations": {
        "camp": {
            "name": "Base Camp",
            "description": "A cold fire pit.",
            "exits": {"west": "road", "north": "ridge"},
            "items": ["gas_can", "tire", "statue", "rock", "combo"],
            "fuel_cost": 3
        },
        "road": {
            "name": "Coast Road",
            "description": "Cracked asphalt heading west.",
            "exits": {"west": "los_angeles", "east": "camp"},
            "dangerous": true
        },
        "ridge": {
            "name": "Windy Ridge",
            "description": "Loose rock and switchbacks.",
            "exits": {"south": "camp"},
            "fuel_cost": 5
        },
        "los_angeles": {
            "name": "Los Angeles",
            "description": "The City of Angels.",
            "exits": {}
        }
    },
    "items": {
        "toolkit": {
            "name": "Motorcycle Toolkit",
            "description": "Wrenches and tape.",
            "takeable": false,
            "useable": true,
            "use_message": "You tighten every bolt you can find.",
            "aliases": ["tools", "kit"],
            "repair_value": 15
        },
        "water": {
            "name": "Water Bottle",
            "description": "Half full.",
            "useable": true,
            "use_message": "You drink deeply.",
            "aliases": ["drink"],
            "food_value": 10
        },
        "gas_can": {
            "name": "Gas Can",
            "description": "Sloshes.",
            "useable": true,
            "use_message": "You pour it in.",
            "aliases": ["gas"],
            "fuel_value": 25
        },
        "tire": {
            "name": "Spare Tire",
            "description": "Still holds air.",
            "useable": true,
            "use_message": "You swap the tire.",
            "repair_value": 20
        },
        "combo": {
            "name": "Survival Crate",
            "description": "A bit of everything.",
            "useable": true,
            "use_message": "You unpack the crate.",
            "fuel_value": 10,
            "food_value": 5,
            "repair_value": 5
        },
        "map": {"name": "Road Map", "description": "Creased."},
        "rock": {"name": "Rock", "description": "A rock."},
        "statue": {
            "name": "Stone Statue",
            "description": "Far too heavy.",
            "takeable": false
        }
    }
}"#;

pub(crate) fn config() -> GameConfig {
    GameConfig::default()
        .with_seed(7)
        .with_start("camp")
        .with_inventory(&["toolkit", "water"])
        .with_encounter_chance(0.0)
}

pub(crate) fn session_with(config: GameConfig) -> GameSession {
    let catalog = Catalog::from_json(TEST_WORLD).unwrap();
    GameSession::new(catalog, config).unwrap()
}

pub(crate) fn session() -> GameSession {
    session_with(config())
}
