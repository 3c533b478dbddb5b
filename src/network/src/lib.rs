//! Circuit topology as a labeled multigraph.
//!
//! The [`Network`] collects the elements of a circuit as edges between
//! labeled nodes and answers the queries an equation generator needs:
//! the ordered nodes, the ground node and the incident edges of a node.
mod edge;
mod element;
mod error;
mod network;
mod symbol;

pub use {
    edge::{Edge, Node},
    element::{symbol_of, Element, ElementKind, Quantity},
    error::Error,
    self::network::Network,
    symbol::Symbol,
};
