//! rstviz Core Types and Definitions
//!
//! This crate provides the foundational types shared by the rstviz crates.
//! It includes:
//!
//! - **Semantic model**: content units, segments and relation spans ([`semantic`] module)
//! - **Text**: label wrapping and quote substitution ([`text`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Theme**: Graphviz style attributes for every node style ([`theme`] module)
//! - **Graph**: The DOT graph model and writer ([`graph`] module)

pub mod color;
pub mod graph;
pub mod semantic;
pub mod text;
pub mod theme;
