//! Orchestration services over the pure move engine.
//!
//! # Responsibility
//! - Own board state, dispatch drag intents, and drive persistence.
//! - Keep UI/FFI layers decoupled from engine and storage details.

pub mod board_service;
pub mod throttle;
