//! Asteroids simulation core.
//!
//! The library owns every piece of game logic: entity motion, the ship's
//! projectile pool, asteroid splitting, collision resolution and the
//! menu → play → score-list state machine.  Rendering, input and sound are
//! left to the caller, which feeds an [`entities::Input`] plus a frame delta
//! into [`game::Game::step`] and reads back a [`entities::Snapshot`].

pub mod asteroid;
pub mod compute;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod game;
pub mod scores;
pub mod ship;
