//! Cube Piece-Packing Library
//!
//! Core engine for an interactive puzzle where collected pieces stack into
//! a 3x3x4 cube: a fixed shape table ([`pieces`]), a deterministic
//! first-fit layer packer ([`packer`]), a completion evaluator that derives
//! a renderable per-cell grid ([`cubemap`]), and a weighted-random
//! generator that synthesizes complete demo cubes ([`generator`]).
//!
//! The engine is pure and total: packing and evaluation are deterministic
//! transformations of an ordered color sequence, with no I/O and no shared
//! state. The acquired-piece collection itself is read and written by
//! [`persistence`].

pub mod cubemap;
pub mod generator;
pub mod packer;
pub mod persistence;
pub mod pieces;
