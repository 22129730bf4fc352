//! Trainerdex - Pokedex browser with two-trainer rosters, on tui-dispatch
//!
//! The library exposes the app's modules for testing.

pub mod action;
pub mod api;
pub mod catalog;
pub mod components;
pub mod effect;
pub mod pokemon;
pub mod reducer;
pub mod roster;
pub mod state;
