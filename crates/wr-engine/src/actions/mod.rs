//! Action handlers. Each file adds one verb family to [`GameSession`].
//!
//! Handlers return the text to show the player. A handler that returns an
//! error has changed nothing.
//!
//! [`GameSession`]: crate::session::GameSession

mod bike;
mod game;
mod info;
mod items;
mod movement;
