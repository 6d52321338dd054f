use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

pub type NodeId = u32;
pub type Weight = i64;

/// Anything that can identify a node: ids from files and generators, but also labels in tests.
pub trait Node: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> Node for T {}

/// A directed, weighted arc to `node`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link<N = NodeId> {
    pub node: N,
    pub weight: Weight,
}

/// Adjacency representation of a directed graph.
///
/// Every node referenced by an arc is part of the node set, even when it has no outgoing arcs.
/// Nodes can additionally be declared without any arcs at all.
/// The graph cannot be modified once it has been built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph<N: Node = NodeId> {
    adjacency: HashMap<N, Vec<Link<N>>>,
    num_arcs: usize,
}

impl<N: Node> AdjacencyGraph<N> {
    /// Build a graph from an (unordered) list of `(from, to, weight)` triples.
    /// Parallel arcs are kept.
    pub fn from_edges(edges: impl IntoIterator<Item = (N, N, Weight)>) -> Self {
        Self::with_nodes(std::iter::empty(), edges)
    }

    /// Build a graph from explicitly declared nodes and a list of arcs.
    /// The node set is the union of `nodes` and all arc endpoints.
    pub fn with_nodes(nodes: impl IntoIterator<Item = N>, edges: impl IntoIterator<Item = (N, N, Weight)>) -> Self {
        let mut adjacency: HashMap<N, Vec<Link<N>>> = HashMap::new();
        let mut num_arcs = 0;

        for node in nodes {
            adjacency.entry(node).or_default();
        }

        for (from, to, weight) in edges {
            adjacency.entry(to.clone()).or_default();
            adjacency.entry(from).or_default().push(Link { node: to, weight });
            num_arcs += 1;
        }

        Self { adjacency, num_arcs }
    }

    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_arcs(&self) -> usize {
        self.num_arcs
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// All nodes in arbitrary order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.adjacency.keys()
    }

    /// All nodes in ascending order.
    pub fn sorted_nodes(&self) -> Vec<N> {
        let mut nodes = self.adjacency.keys().cloned().collect::<Vec<N>>();
        nodes.sort();
        nodes
    }

    /// Outgoing arcs of `node`; empty for nodes that are not part of the graph.
    pub fn neighbors(&self, node: &N) -> &[Link<N>] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn degree(&self, node: &N) -> usize {
        self.neighbors(node).len()
    }

    /// All arcs as `(tail, link)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &Link<N>)> + '_ {
        self.adjacency.iter().flat_map(|(from, links)| links.iter().map(move |link| (from, link)))
    }

    pub fn min_weight(&self) -> Option<Weight> {
        self.edges().map(|(_, link)| link.weight).min()
    }

    pub fn has_negative_weights(&self) -> bool {
        self.min_weight().map_or(false, |weight| weight < 0)
    }
}

/// Tentative or final distance of a node.
/// `Unreached` plays the role of infinity and compares greater than every reached distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distance {
    Reached(Weight),
    Unreached,
}

impl Distance {
    pub fn is_reached(&self) -> bool {
        matches!(self, Distance::Reached(_))
    }

    pub fn value(&self) -> Option<Weight> {
        match *self {
            Distance::Reached(value) => Some(value),
            Distance::Unreached => None,
        }
    }

    /// Distance after additionally traversing an arc of the given weight.
    /// `None` if the sum leaves the range of `Weight`.
    #[inline(always)]
    pub fn link(&self, weight: Weight) -> Option<Distance> {
        match *self {
            Distance::Reached(value) => value.checked_add(weight).map(Distance::Reached),
            Distance::Unreached => Some(Distance::Unreached),
        }
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Distance::Reached(a), Distance::Reached(b)) => a.cmp(b),
            (Distance::Reached(_), Distance::Unreached) => Ordering::Less,
            (Distance::Unreached, Distance::Reached(_)) => Ordering::Greater,
            (Distance::Unreached, Distance::Unreached) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Distance::Reached(value) => write!(f, "{}", value),
            Distance::Unreached => write!(f, "inf"),
        }
    }
}

/// Result of a single-source shortest path computation: one distance per known node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap<N: Node = NodeId> {
    distances: HashMap<N, Distance>,
}

impl<N: Node> DistanceMap<N> {
    /// All `nodes` start out unreached.
    pub fn unreached<'a>(nodes: impl IntoIterator<Item = &'a N>) -> Self
    where
        N: 'a,
    {
        Self {
            distances: nodes.into_iter().map(|node| (node.clone(), Distance::Unreached)).collect(),
        }
    }

    /// Distance of `node`; nodes unknown to the mapping are unreached.
    pub fn get(&self, node: &N) -> Distance {
        self.distances.get(node).copied().unwrap_or(Distance::Unreached)
    }

    pub fn contains(&self, node: &N) -> bool {
        self.distances.contains_key(node)
    }

    pub(crate) fn set(&mut self, node: N, distance: Distance) {
        self.distances.insert(node, distance);
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn num_reached(&self) -> usize {
        self.distances.values().filter(|distance| distance.is_reached()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&N, &Distance)> + '_ {
        self.distances.iter()
    }

    /// All entries ordered by node.
    pub fn to_sorted_vec(&self) -> Vec<(N, Distance)> {
        let mut entries = self.distances.iter().map(|(node, &distance)| (node.clone(), distance)).collect::<Vec<_>>();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

impl<N: Node> FromIterator<(N, Distance)> for DistanceMap<N> {
    fn from_iter<I: IntoIterator<Item = (N, Distance)>>(iter: I) -> Self {
        Self {
            distances: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_without_outgoing_arcs_are_nodes() {
        let graph = AdjacencyGraph::from_edges(vec![(0, 1, 3), (1, 2, -1), (0, 1, 5)]);

        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_arcs(), 3);
        assert!(graph.contains_node(&2));
        assert_eq!(graph.degree(&0), 2);
        assert!(graph.neighbors(&2).is_empty());
        assert_eq!(graph.min_weight(), Some(-1));
        assert!(graph.has_negative_weights());
    }

    #[test]
    fn declared_nodes_without_arcs() {
        let graph: AdjacencyGraph<&str> = AdjacencyGraph::with_nodes(vec!["a", "u"], vec![("a", "b", 2)]);

        assert_eq!(graph.sorted_nodes(), vec!["a", "b", "u"]);
        assert_eq!(graph.min_weight(), Some(2));
        assert!(!graph.has_negative_weights());
        assert!(graph.neighbors(&"missing").is_empty());
    }

    #[test]
    fn unreached_is_greater_than_any_distance() {
        assert!(Distance::Reached(Weight::MAX) < Distance::Unreached);
        assert!(Distance::Reached(-5) < Distance::Reached(3));
        assert_eq!(Distance::Unreached.link(-10), Some(Distance::Unreached));
        assert_eq!(Distance::Reached(4).link(-10), Some(Distance::Reached(-6)));
        assert_eq!(Distance::Unreached.to_string(), "inf");
    }

    #[test]
    fn linking_outside_the_weight_range_fails() {
        assert_eq!(Distance::Reached(Weight::MAX).link(1), None);
        assert_eq!(Distance::Reached(Weight::MIN).link(-1), None);
        assert_eq!(Distance::Reached(Weight::MAX).link(0), Some(Distance::Reached(Weight::MAX)));
        assert_eq!(Distance::Unreached.link(Weight::MAX), Some(Distance::Unreached));
    }
}
