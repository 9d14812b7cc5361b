use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use wr_engine::narrator::journey_summary;
use wr_engine::{GameConfig, GameSession, GameState};

const INTRO: &str = "\
WASTELAND RIDER
==================================================
The year is 2087. The bombs fell decades ago.
You're a lone rider on a dual-sport motorcycle,
trying to get from Washington DC to Los Angeles
across 2,500 miles of post-apocalyptic wasteland.

Your bike is your lifeline. Your fuel is your blood.
The road is long, dangerous, and unforgiving.

Type 'help' for commands. Good luck, rider.
==================================================";

pub fn run(world: &Path, save: &Path, seed: Option<u64>) -> Result<(), String> {
    let (catalog, _) = super::load_world(world)?;

    let mut config = GameConfig::default().with_save_path(save);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut session =
        GameSession::new(catalog, config).map_err(|e| format!("failed to start session: {e}"))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    play_loop(&mut session, stdin.lock(), stdout.lock()).map_err(|e| e.to_string())
}

/// Drive a session from `input` until it ends, the player quits, or input
/// runs out.
pub fn play_loop<R: BufRead, W: Write>(
    session: &mut GameSession,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "{}", INTRO.bold())?;
    match session.look() {
        Ok(view) => writeln!(out, "\n{view}")?,
        Err(e) => writeln!(out, "{}", format!("❌ {e}").yellow())?,
    }

    let mut line = String::new();
    loop {
        write!(out, "\n> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break; // EOF
        }

        let turn = session.process(line.trim_end());
        match &turn.result {
            Ok(text) if !text.is_empty() => writeln!(out, "{text}")?,
            Ok(_) => {}
            Err(e) => writeln!(out, "{}", format!("❌ {e}").yellow())?,
        }
        if let Some(ending) = &turn.ending {
            writeln!(out, "\n{ending}")?;
        }
        if turn.is_final() {
            break;
        }
    }

    farewell(session, &mut out)
}

fn farewell<W: Write>(session: &GameSession, out: &mut W) -> io::Result<()> {
    let rider = session.traveler();
    match session.state() {
        GameState::Won => {
            writeln!(out, "\n{}", "VICTORY! You've conquered the wasteland!".green().bold())?;
            writeln!(out, "{}", journey_summary(rider))?;
            writeln!(out, "You are a true wasteland legend!")
        }
        GameState::Lost { .. } => {
            writeln!(out, "\n{}", "GAME OVER".red().bold())?;
            writeln!(out, "{}", journey_summary(rider))?;
            writeln!(out, "The wasteland claims another soul...")
        }
        GameState::Playing => writeln!(
            out,
            "\nThanks for riding! Miles traveled: {}",
            rider.miles_traveled
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wr_core::default_world;

    fn run_script(script: &str) -> (GameSession, String) {
        let config = GameConfig::default().with_seed(3).with_encounter_chance(0.0);
        let mut session = GameSession::new(default_world(), config).unwrap();
        let mut out = Vec::new();
        play_loop(&mut session, script.as_bytes(), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn intro_and_first_location() {
        let (session, out) = run_script("");
        assert!(out.contains("The year is 2087"));
        assert!(out.contains("Washington DC Ruins"));
        assert!(out.contains("Thanks for riding! Miles traveled: 50"));
        assert_eq!(session.traveler().miles_traveled, 50);
    }

    #[test]
    fn quit_stops_reading() {
        let (session, out) = run_script("quit\nstatus\n");
        assert!(out.contains("Safe travels"));
        assert!(!out.contains("RIDER STATUS"));
        assert_eq!(session.state(), GameState::Playing);
    }

    #[test]
    fn failures_are_shown_inline() {
        let (_, out) = run_script("drop anvil\nlook\n");
        assert!(out.contains("You don't have any anvil."));
        assert!(out.matches("Washington DC Ruins").count() >= 2);
    }

    #[test]
    fn running_dry_ends_the_game() {
        let config = GameConfig::default().with_seed(3).with_fuel(2);
        let mut session = GameSession::new(default_world(), config).unwrap();
        let mut out = Vec::new();
        play_loop(&mut session, "rest\nlook\n".as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("runs out of fuel"));
        assert!(out.contains("GAME OVER"));
        assert!(out.contains("The wasteland claims another soul..."));
    }
}
