//! Core types for the seqlens sequence-diagram inspector.
//!
//! This crate holds the read-only model snapshot types ([`model`]), the
//! 2-D geometry primitives ([`geometry`]), and the diagram presentation
//! types ([`presentation`]). It performs no I/O; loading a project snapshot
//! and producing reports live in the `seqlens` crate.

pub mod geometry;
pub mod model;
pub mod presentation;
