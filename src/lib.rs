pub mod actions;
pub mod cards;
pub mod chart;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod rank_shape;
pub mod search;
pub mod session;
pub mod suit_assign;
pub mod suit_pattern;
