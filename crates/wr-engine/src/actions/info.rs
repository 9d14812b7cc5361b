use rand::Rng;
use tracing::debug;

use crate::error::EngineResult;
use crate::narrator;
use crate::parser::suggest_verb;
use crate::session::GameSession;

/// Flavor text for commands the parser doesn't know.
const REJECTIONS: [&str; 4] = [
    "Your bike's engine idles as you consider that command...",
    "The wasteland wind carries away your words...",
    "That doesn't seem possible in this harsh world.",
    "Your survival instincts suggest trying something else.",
];

impl GameSession {
    pub(crate) fn inventory(&self) -> String {
        narrator::inventory_listing(&self.traveler, &self.catalog)
    }

    pub(crate) fn status(&self) -> EngineResult<String> {
        let here = self.current_location()?;
        Ok(narrator::full_status(&self.traveler, &here.name))
    }

    /// Reply to unrecognized input. Never fails and changes nothing but
    /// the RNG.
    pub(crate) fn reject(&mut self, input: &str) -> String {
        debug!(input, "unrecognized command");
        let mut lines = vec![
            REJECTIONS[self.rng.random_range(0..REJECTIONS.len())].to_string(),
            "Type 'help' for available commands.".to_string(),
        ];

        let verb = input.split_whitespace().next().unwrap_or_default();
        if let Some(suggestion) = suggest_verb(verb) {
            // A known verb lands here only when its argument is missing.
            if suggestion == verb {
                lines.push(format!("What do you want to {verb}?"));
            } else {
                lines.push(format!("Did you mean '{suggestion}'?"));
            }
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::REJECTIONS;
    use crate::fixtures::session;

    #[test]
    fn inventory_lists_pack() {
        let s = session();
        let text = s.inventory();
        assert!(text.contains("Motorcycle Toolkit"));
        assert!(text.contains("Water Bottle"));
    }

    #[test]
    fn status_names_location() {
        let s = session();
        let text = s.status().unwrap();
        assert!(text.contains("Location: Base Camp"));
        assert!(text.contains("Fuel: 50%"));
    }

    #[test]
    fn rejection_uses_flavor_text() {
        let mut s = session();
        let text = s.reject("dance");
        assert!(REJECTIONS.iter().any(|r| text.starts_with(r)));
        assert!(text.contains("Type 'help'"));
    }

    #[test]
    fn rejection_suggests_close_verb() {
        let mut s = session();
        assert!(s.reject("refule gas").contains("Did you mean 'refuel'?"));
        assert!(s.reject("take").contains("What do you want to take?"));
        assert!(!s.reject("xyzzy").contains("Did you mean"));
    }
}
