//! Terminal front-end: one player, one session, one deck.

pub mod app;
pub mod controller;
mod ui;
