//! Pure pursuit and navigation logic for Darkhouse.
//!
//! This crate contains the game logic that is independent of any engine,
//! clock, or renderer. Functions take plain data and return results, making
//! them unit-testable and portable across the headless harness and any
//! future frontend.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`chase`] | In-room pursuit math: step vectors, speed gating |
//! | [`house`] | Validated room graph: adjacency, ambient data, connectivity |
//! | [`nav`] | BFS shortest paths over the room graph |
//! | [`sight`] | Flashlight-cone visibility and proximity tension |

pub mod chase;
pub mod house;
pub mod nav;
pub mod sight;
