//! Circuit topology for symbolic network analysis.
//!
//! # Example:
//!
//! ```
//! use circuit_network::{Network, Quantity, Symbol};
//!
//! let mut network: Network<&str> = Network::new();
//! network.add_resistor("1", "0", "R1").unwrap();
//! network
//!     .add_dependent_current_source("1", "2", "F1", Quantity::Current, "R1", 2.5)
//!     .unwrap();
//! let edge = network.find_edge_by_symbol(&Symbol::new("F1")).unwrap();
//! assert_eq!(Some("R1"), edge.element().controlling_reference());
//! assert_eq!(vec![&"1", &"2"], network.nonground_nodes().collect::<Vec<_>>());
//! ```
pub use network::{symbol_of, Edge, Element, ElementKind, Error, Network, Node, Quantity, Symbol};
