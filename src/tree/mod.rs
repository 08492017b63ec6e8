//! Mirrored Filesystem Tree
//!
//! The node model, the path resolver that walks it, and the builder that
//! populates it from a live directory.

pub mod builder;
pub mod hasher;
pub mod node;
pub mod path;
pub mod traverse;
pub mod walker;
