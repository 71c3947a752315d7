//! Tierdraw Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Tierdraw
//! crates. It includes:
//!
//! - **Graph**: The validated input model ([`graph::Graph`], [`graph::Node`], [`graph::Edge`])
//! - **Categories**: The closed set of node categories and their tier policy ([`category`] module)
//! - **Identifiers**: Document identifiers and their allocator ([`identifier`] module)
//! - **Geometry**: Basic geometric types ([`geometry`] module)

pub mod category;
pub mod geometry;
pub mod graph;
pub mod identifier;
