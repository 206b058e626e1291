//! Pure gameplay rules for DigDive.
//!
//! This crate contains all game logic that is independent of any ECS,
//! engine, or runtime. Functions take plain data and return results, making
//! them unit-testable and portable across the headless harness and any
//! future rendering frontend.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`ai`] | Zombie motivation state machine (roam/chase) and steering |
//! | [`config`] | World configuration with defaults matching the shipped game |
//! | [`constants`] | Gameplay constants (speeds, rates, thresholds, tile size) |
//! | [`dig`] | Dig and fill rules over the tile grid, with entombment guard |
//! | [`gauge`] | Bounded current/max stat used for health and oxygen |
//! | [`geometry`] | 2D vectors and axis-aligned rectangles for overlap tests |
//! | [`grid`] | Fixed-size tile grid with bounds-checked access |
//! | [`movement`] | Surface and submerged velocity rules, facing, tool offset |
//! | [`zone`] | Surface/Submerged classification against the waterline |

pub mod ai;
pub mod config;
pub mod constants;
pub mod dig;
pub mod gauge;
pub mod geometry;
pub mod grid;
pub mod movement;
pub mod zone;
