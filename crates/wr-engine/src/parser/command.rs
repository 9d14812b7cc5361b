//! Command parsing for player input.

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ride through an exit.
    Move {
        /// The direction token as typed (lower-cased).
        direction: String,
    },
    /// Pick up an item at the current location.
    Take {
        /// The item name.
        item: String,
    },
    /// Leave an item at the current location.
    Drop {
        /// The item name.
        item: String,
    },
    /// Use an item from the pack.
    Use {
        /// The item name.
        item: String,
    },
    /// Pour a fuel item into the tank.
    Refuel {
        /// The item name.
        item: String,
    },
    /// Repair the bike with an item.
    Repair {
        /// The item name.
        item: String,
    },
    /// Make camp for the night.
    Rest,
    /// Describe the current location.
    Look,
    /// List the pack.
    Inventory,
    /// Describe an item in the pack or at the location.
    Examine {
        /// The item name.
        item: String,
    },
    /// Show the full rider status.
    Status,
    /// Show help.
    Help {
        /// Optional help topic.
        topic: Option<String>,
    },
    /// Write the save file.
    Save,
    /// Read the save file.
    Load,
    /// End the session.
    Quit,
    /// Blank input.
    Empty,
    /// Anything else.
    Unknown {
        /// The original input, lower-cased and trimmed.
        input: String,
    },
}

/// Verb synonyms for command parsing.
const MOVE_VERBS: &[&str] = &["ride", "go", "move", "drive"];
const DIRECTION_WORDS: &[&str] = &[
    "north", "n", "south", "s", "east", "e", "west", "w", "up", "down",
];
const TAKE_VERBS: &[&str] = &["take", "get", "pick", "grab"];
const DROP_VERBS: &[&str] = &["drop", "leave"];
const USE_VERBS: &[&str] = &["use", "consume", "drink", "eat"];
const REFUEL_VERBS: &[&str] = &["refuel", "fuel"];
const REPAIR_VERBS: &[&str] = &["repair", "fix"];
const REST_VERBS: &[&str] = &["rest", "sleep", "camp"];
const LOOK_VERBS: &[&str] = &["look", "l"];
const INVENTORY_VERBS: &[&str] = &["inventory", "i", "inv", "pack"];
const EXAMINE_VERBS: &[&str] = &["examine", "x", "inspect"];
const STATUS_VERBS: &[&str] = &["status", "stats", "condition"];
const HELP_VERBS: &[&str] = &["help", "h"];
const QUIT_VERBS: &[&str] = &["quit", "q", "exit"];

/// Every verb the parser recognizes, for suggestions.
pub(crate) const ALL_VERBS: &[&[&str]] = &[
    MOVE_VERBS,
    DIRECTION_WORDS,
    TAKE_VERBS,
    DROP_VERBS,
    USE_VERBS,
    REFUEL_VERBS,
    REPAIR_VERBS,
    REST_VERBS,
    LOOK_VERBS,
    INVENTORY_VERBS,
    EXAMINE_VERBS,
    STATUS_VERBS,
    HELP_VERBS,
    &["save", "load"],
    QUIT_VERBS,
];

/// Expand a single-letter compass abbreviation. Other tokens pass through.
pub fn normalize_direction(token: &str) -> String {
    match token {
        "n" => "north",
        "s" => "south",
        "e" => "east",
        "w" => "west",
        other => other,
    }
    .to_string()
}

/// Parse a player input string into a command.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim().to_lowercase();
    let words: Vec<&str> = input.split_whitespace().collect();
    let Some((&verb, rest)) = words.split_first() else {
        return Command::Empty;
    };

    let unknown = || Command::Unknown {
        input: input.clone(),
    };
    let argument = || (!rest.is_empty()).then(|| rest.join(" "));

    if DIRECTION_WORDS.contains(&verb) {
        return Command::Move {
            direction: verb.to_string(),
        };
    }
    if MOVE_VERBS.contains(&verb) {
        return match rest.first() {
            Some(direction) => Command::Move {
                direction: direction.to_string(),
            },
            None => unknown(),
        };
    }
    if TAKE_VERBS.contains(&verb) {
        // "pick up the can"
        let item_words = match rest.split_first() {
            Some((&"up", tail)) if !tail.is_empty() => tail,
            _ => rest,
        };
        return if item_words.is_empty() {
            unknown()
        } else {
            Command::Take {
                item: item_words.join(" "),
            }
        };
    }

    let with_item = |make: fn(String) -> Command| argument().map_or_else(unknown, make);

    if DROP_VERBS.contains(&verb) {
        return with_item(|item| Command::Drop { item });
    }
    if USE_VERBS.contains(&verb) {
        return with_item(|item| Command::Use { item });
    }
    if REFUEL_VERBS.contains(&verb) {
        return with_item(|item| Command::Refuel { item });
    }
    if REPAIR_VERBS.contains(&verb) {
        return with_item(|item| Command::Repair { item });
    }
    if EXAMINE_VERBS.contains(&verb) {
        return with_item(|item| Command::Examine { item });
    }
    if REST_VERBS.contains(&verb) {
        return Command::Rest;
    }
    if LOOK_VERBS.contains(&verb) {
        return Command::Look;
    }
    if INVENTORY_VERBS.contains(&verb) {
        return Command::Inventory;
    }
    if STATUS_VERBS.contains(&verb) {
        return Command::Status;
    }
    if HELP_VERBS.contains(&verb) {
        return Command::Help { topic: argument() };
    }
    if QUIT_VERBS.contains(&verb) {
        return Command::Quit;
    }
    match verb {
        "save" => Command::Save,
        "load" => Command::Load,
        _ => unknown(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(direction: &str) -> Command {
        Command::Move {
            direction: direction.to_string(),
        }
    }

    #[test]
    fn parse_bare_direction() {
        assert_eq!(parse_command("north"), mv("north"));
        assert_eq!(parse_command("W"), mv("w"));
        assert_eq!(parse_command("  down "), mv("down"));
    }

    #[test]
    fn parse_ride_direction() {
        assert_eq!(parse_command("ride west"), mv("west"));
        assert_eq!(parse_command("go s"), mv("s"));
        assert_eq!(parse_command("drive northwest now"), mv("northwest"));
    }

    #[test]
    fn move_verb_needs_direction() {
        assert_eq!(
            parse_command("ride"),
            Command::Unknown {
                input: "ride".to_string()
            }
        );
    }

    #[test]
    fn normalize_abbreviations() {
        assert_eq!(normalize_direction("n"), "north");
        assert_eq!(normalize_direction("w"), "west");
        assert_eq!(normalize_direction("up"), "up");
        assert_eq!(normalize_direction("portal"), "portal");
    }

    #[test]
    fn parse_take() {
        assert_eq!(
            parse_command("take gas can"),
            Command::Take {
                item: "gas can".to_string()
            }
        );
        assert_eq!(
            parse_command("pick up the tire"),
            Command::Take {
                item: "the tire".to_string()
            }
        );
        assert_eq!(
            parse_command("Grab Jerky"),
            Command::Take {
                item: "jerky".to_string()
            }
        );
    }

    #[test]
    fn parse_item_verbs() {
        assert_eq!(
            parse_command("drop map"),
            Command::Drop {
                item: "map".to_string()
            }
        );
        assert_eq!(
            parse_command("drink water"),
            Command::Use {
                item: "water".to_string()
            }
        );
        assert_eq!(
            parse_command("fuel gas"),
            Command::Refuel {
                item: "gas".to_string()
            }
        );
        assert_eq!(
            parse_command("fix tools"),
            Command::Repair {
                item: "tools".to_string()
            }
        );
        assert_eq!(
            parse_command("x binoculars"),
            Command::Examine {
                item: "binoculars".to_string()
            }
        );
    }

    #[test]
    fn item_verbs_need_argument() {
        for verb in ["take", "drop", "use", "refuel", "repair", "examine"] {
            assert_eq!(
                parse_command(verb),
                Command::Unknown {
                    input: verb.to_string()
                },
                "{verb}"
            );
        }
    }

    #[test]
    fn parse_bare_verbs() {
        assert_eq!(parse_command("camp"), Command::Rest);
        assert_eq!(parse_command("l"), Command::Look);
        assert_eq!(parse_command("pack"), Command::Inventory);
        assert_eq!(parse_command("stats"), Command::Status);
        assert_eq!(parse_command("save"), Command::Save);
        assert_eq!(parse_command("load"), Command::Load);
        assert_eq!(parse_command("exit"), Command::Quit);
    }

    #[test]
    fn parse_help() {
        assert_eq!(parse_command("help"), Command::Help { topic: None });
        assert_eq!(
            parse_command("h bike"),
            Command::Help {
                topic: Some("bike".to_string())
            }
        );
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            parse_command("Dance Wildly"),
            Command::Unknown {
                input: "dance wildly".to_string()
            }
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_command(""), Command::Empty);
        assert_eq!(parse_command("   "), Command::Empty);
    }
}
