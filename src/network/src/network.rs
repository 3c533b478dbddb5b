use std::collections::{BTreeSet, HashMap};

use indexmap::{IndexMap, IndexSet};
use log::{debug, trace, warn};

use crate::{
    edge::{Edge, Node},
    element::{Element, Quantity},
    error::Error,
    symbol::Symbol,
};

/// The Network struct
///
/// The topology of a circuit as a multigraph. Nodes are discovered from the
/// edges, the network only grows.
///
/// # Example:
///
/// ```
/// use network::Network;
///
/// let mut network: Network<&str> = Network::new();
/// network.add_resistor("1", "0", "R1").unwrap();
/// network.add_voltage_source("1", "0", "V1").unwrap();
/// assert_eq!(vec![&"0", &"1"], network.nodes().collect::<Vec<_>>());
/// assert_eq!(Ok(&"0"), network.ground_node());
/// ```
#[derive(Clone, Debug)]
pub struct Network<N: Node> {
    ground: N,
    //keyed by the text of the node, like a sorted netlist.
    nodes: BTreeSet<(String, N)>,
    edges: IndexSet<Edge<N>>,
    //symbol -> index of the first edge with this symbol.
    symbols: HashMap<Symbol, usize>,
    //absent key means no incident edges.
    incident_edges_of_node: HashMap<N, Vec<usize>>,
    consts: IndexSet<Symbol>,
    vars: IndexMap<Element, (N, N)>,
}

impl<N: Node> Default for Network<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> Network<N> {
    ///Create an empty network with the default ground label of the node type.
    pub fn new() -> Self {
        Self::with_ground(N::ground())
    }

    ///Create an empty network with `ground` as reference node label.
    pub fn with_ground(ground: N) -> Self {
        Self {
            ground,
            nodes: BTreeSet::new(),
            edges: IndexSet::new(),
            symbols: HashMap::new(),
            incident_edges_of_node: HashMap::new(),
            consts: IndexSet::new(),
            vars: IndexMap::new(),
        }
    }

    /// Add an edge to the network.
    ///
    /// Adding an edge which is already in the network does nothing. The
    /// edge is rejected before any index is touched when its symbol is used
    /// by another element or by a constant.
    pub fn add_edge(&mut self, edge: Edge<N>) -> Result<(), Error> {
        if self.edges.contains(&edge) {
            trace!("edge already in network: {}", edge);
            return Ok(());
        }

        let symbol = edge.element().symbol();
        if let Some(index) = self.symbols.get(symbol) {
            if let Some(existing) = self.edges.get_index(*index) {
                if existing.element() != edge.element() {
                    return Err(Error::SymbolCollision {
                        symbol: symbol.to_string(),
                        existing: existing.element().to_string(),
                    });
                }
            }
        }
        if self.consts.contains(symbol) {
            return Err(Error::SymbolCollision {
                symbol: symbol.to_string(),
                existing: String::from("constant"),
            });
        }

        if edge.is_self_loop() {
            warn!("self loop at node {}: {}", edge.endpoint_a(), edge);
        }
        debug!("add edge: {}", edge);

        let index = self.edges.len();
        let (a, b) = edge.endpoints();
        self.nodes.insert(node_key(a));
        self.nodes.insert(node_key(b));
        self.incident_edges_of_node
            .entry(a.clone())
            .or_default()
            .push(index);
        if !edge.is_self_loop() {
            self.incident_edges_of_node
                .entry(b.clone())
                .or_default()
                .push(index);
        }
        self.symbols.entry(symbol.clone()).or_insert(index);
        self.edges.insert(edge);
        Ok(())
    }

    fn add_element(&mut self, n1: N, n2: N, element: Element) -> Result<(), Error> {
        self.add_edge(Edge::new(n1, n2, element))
    }

    pub fn add_resistor(&mut self, n1: N, n2: N, name: &str) -> Result<(), Error> {
        self.add_element(n1, n2, Element::resistor(name)?)
    }

    pub fn add_capacitor(&mut self, n1: N, n2: N, name: &str) -> Result<(), Error> {
        self.add_element(n1, n2, Element::capacitor(name)?)
    }

    pub fn add_inductor(&mut self, n1: N, n2: N, name: &str) -> Result<(), Error> {
        self.add_element(n1, n2, Element::inductor(name)?)
    }

    pub fn add_voltage_source(&mut self, n1: N, n2: N, name: &str) -> Result<(), Error> {
        self.add_element(n1, n2, Element::voltage_source(name)?)
    }

    pub fn add_current_source(&mut self, n1: N, n2: N, name: &str) -> Result<(), Error> {
        self.add_element(n1, n2, Element::current_source(name)?)
    }

    /// Add a dependent current source.
    ///
    /// # Arguments
    ///
    /// * `n1`, `n2`              - The nodes.
    /// * `name`                  - Element name.
    /// * `quantity`              - Current or voltage of the controlling element.
    /// * `controlling_reference` - Name of the controlling element, not validated here.
    /// * `scaling_factor`        - Finite factor, use 1.0 for unity.
    pub fn add_dependent_current_source(
        &mut self,
        n1: N,
        n2: N,
        name: &str,
        quantity: Quantity,
        controlling_reference: &str,
        scaling_factor: f64,
    ) -> Result<(), Error> {
        let element =
            Element::dependent_current_source(name, quantity, controlling_reference, scaling_factor)?;
        self.add_element(n1, n2, element)
    }

    ///Register a constant symbol, distinct from all element symbols.
    pub fn add_const(&mut self, constant: Symbol) -> Result<(), Error> {
        if let Some(edge) = self
            .symbols
            .get(&constant)
            .and_then(|index| self.edges.get_index(*index))
        {
            return Err(Error::SymbolCollision {
                symbol: constant.to_string(),
                existing: edge.element().to_string(),
            });
        }
        if self.consts.contains(&constant) {
            return Err(Error::DuplicateDefinition(format!("constant {}", constant)));
        }
        debug!("add constant: {}", constant);
        self.consts.insert(constant);
        Ok(())
    }

    ///Register `element` as named variable between `n1` and `n2`.
    pub fn add_var(&mut self, element: Element, n1: N, n2: N) -> Result<(), Error> {
        if self.vars.contains_key(&element) {
            return Err(Error::DuplicateDefinition(format!("variable {}", element)));
        }
        debug!("add variable: {} {} {}", element, n1, n2);
        self.vars.insert(element, (n1, n2));
        Ok(())
    }

    ///All nodes ordered by their text, `10` comes before `2`.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + Clone {
        self.nodes.iter().map(|(_, node)| node)
    }

    ///All edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<N>> + Clone {
        self.edges.iter()
    }

    ///The nodes without the ground node, in the order of `nodes`.
    pub fn nonground_nodes(&self) -> impl Iterator<Item = &N> + Clone {
        let ground = &self.ground;
        self.nodes().filter(move |node| *node != ground)
    }

    /// The reference node.
    ///
    /// Fails with `EmptyNetwork` when no edge was added and with
    /// `NoGroundNode` when the ground label is not a node of the network.
    pub fn ground_node(&self) -> Result<&N, Error> {
        if self.edges.is_empty() {
            return Err(Error::EmptyNetwork);
        }
        self.nodes
            .get(&node_key(&self.ground))
            .map(|(_, node)| node)
            .ok_or_else(|| Error::NoGroundNode(self.ground.to_string()))
    }

    ///The configured ground label, whether or not it is part of the network.
    pub fn ground_label(&self) -> &N {
        &self.ground
    }

    ///Edges touching `node` in insertion order, empty for an unknown node.
    pub fn incident_edges(&self, node: &N) -> Vec<&Edge<N>> {
        match self.incident_edges_of_node.get(node) {
            Some(indices) => indices
                .iter()
                .filter_map(|index| self.edges.get_index(*index))
                .collect(),
            None => Vec::new(),
        }
    }

    ///The first edge whose element has `symbol`.
    pub fn find_edge_by_symbol(&self, symbol: &Symbol) -> Option<&Edge<N>> {
        trace!("find edge for symbol {}", symbol);
        self.edges
            .iter()
            .find(|edge| edge.element().symbol() == symbol)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.keys()
    }

    pub fn consts(&self) -> impl Iterator<Item = &Symbol> {
        self.consts.iter()
    }

    pub fn vars(&self) -> impl Iterator<Item = (&Element, (&N, &N))> {
        self.vars.iter().map(|(element, (a, b))| (element, (a, b)))
    }

    pub fn var(&self, element: &Element) -> Option<(&N, &N)> {
        self.vars.get(element).map(|(a, b)| (a, b))
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains(&node_key(node))
    }

    pub fn contains_edge(&self, edge: &Edge<N>) -> bool {
        self.edges.contains(edge)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    ///Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

fn node_key<N: Node>(node: &N) -> (String, N) {
    (node.to_string(), node.clone())
}
