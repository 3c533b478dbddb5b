use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::element::Element;

/// A node label in the network.
///
/// Labels need a total order for deterministic iteration and a canonical
/// ground label used as the default reference node.
pub trait Node: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {
    fn ground() -> Self;
}

impl Node for String {
    fn ground() -> Self {
        String::from("0")
    }
}

impl<'a> Node for &'a str {
    fn ground() -> Self {
        "0"
    }
}

macro_rules! integer_node {
    ($($t:ty),*) => {
        $(impl Node for $t {
            fn ground() -> Self {
                0
            }
        })*
    };
}

integer_node!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// The placement of one element between two nodes.
///
/// The endpoints are an unordered pair, `Edge(a, b, e) == Edge(b, a, e)`.
#[derive(Clone, Debug)]
pub struct Edge<N> {
    endpoint_a: N,
    endpoint_b: N,
    element: Element,
}

impl<N: Node> Edge<N> {
    pub fn new(endpoint_a: N, endpoint_b: N, element: Element) -> Self {
        Self {
            endpoint_a,
            endpoint_b,
            element,
        }
    }

    pub fn endpoint_a(&self) -> &N {
        &self.endpoint_a
    }

    pub fn endpoint_b(&self) -> &N {
        &self.endpoint_b
    }

    pub fn endpoints(&self) -> (&N, &N) {
        (&self.endpoint_a, &self.endpoint_b)
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn is_incident(&self, node: &N) -> bool {
        &self.endpoint_a == node || &self.endpoint_b == node
    }

    ///Both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.endpoint_a == self.endpoint_b
    }

    ///The endpoint at the other side of `node`, None when `node` is not an endpoint.
    pub fn opposite(&self, node: &N) -> Option<&N> {
        if &self.endpoint_a == node {
            Some(&self.endpoint_b)
        } else if &self.endpoint_b == node {
            Some(&self.endpoint_a)
        } else {
            None
        }
    }

    fn ordered(&self) -> (&N, &N) {
        if self.endpoint_a <= self.endpoint_b {
            (&self.endpoint_a, &self.endpoint_b)
        } else {
            (&self.endpoint_b, &self.endpoint_a)
        }
    }
}

impl<N: Node> PartialEq for Edge<N> {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element && self.ordered() == other.ordered()
    }
}
impl<N: Node> Eq for Edge<N> {}
impl<N: Node> Hash for Edge<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered().hash(state);
        self.element.hash(state);
    }
}

impl<N: Node> fmt::Display for Edge<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.element, self.endpoint_a, self.endpoint_b)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{Edge, Node};
    use crate::element::Element;

    #[test]
    fn unordered_endpoints() {
        let r1 = Element::resistor("R1").unwrap();
        let a = Edge::new("1", "0", r1.clone());
        let b = Edge::new("0", "1", r1);
        assert_eq!(a, b);
        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(1, set.len());
    }

    #[test]
    fn element_is_part_of_identity() {
        let a = Edge::new(1, 0, Element::resistor("R1").unwrap());
        let b = Edge::new(1, 0, Element::resistor("R2").unwrap());
        assert_ne!(a, b);
    }

    #[test]
    fn self_loop() {
        let e = Edge::new(3u32, 3, Element::inductor("L1").unwrap());
        assert!(e.is_self_loop());
        assert!(e.is_incident(&3));
        assert_eq!(Some(&3), e.opposite(&3));
    }

    #[test]
    fn opposite_endpoint() {
        let e = Edge::new(String::from("in"), String::from("out"), Element::capacitor("C1").unwrap());
        assert_eq!(Some(&String::from("out")), e.opposite(&String::from("in")));
        assert_eq!(None, e.opposite(&String::from("0")));
        assert_eq!("Capacitor(C1) in out", e.to_string());
    }

    #[test]
    fn borrowed_labels() {
        let labels = vec![String::from("in"), String::from("out")];
        let e = Edge::new(labels[0].as_str(), labels[1].as_str(), Element::resistor("R1").unwrap());
        assert!(e.is_incident(&"out"));
        assert_eq!("0", <&str as Node>::ground());
    }

    #[test]
    fn ground_labels() {
        assert_eq!("0", String::ground());
        assert_eq!("0", <&str>::ground());
        assert_eq!(0, i64::ground());
    }
}
