//! # Base types for rookline
//!
//! This is an auxiliary crate for `rookline`, which contains the plain value types: positions,
//! colors, pieces, step geometry and square sets. It has no knowledge of chess rules.
//!
//! Normally you don't want to use this crate directly. Use `rookline` instead, which re-exports
//! everything from here.

pub mod bitboard;
pub mod geometry;
pub mod types;
