//! Edgewalk Core Library
//!
//! Breadth-first traversal whose unit of visitation is the edge. Every edge of
//! a directed, undirected or multi graph is reported exactly once, in
//! breadth-first order, even when reaching it revisits an explored node.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod request;
