//! Derived rate resolution over a [`RateGraph`].

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

use curconv_common::{Currency, Hop};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{FxError, FxResult};
use crate::graph::{Edge, RateGraph};

/// How the resolver picks a path between two currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathStrategy {
    /// Depth-first search where the last inserted edge of each currency is
    /// tried first. Returns whichever path the walk reaches first.
    #[default]
    DepthFirst,
    /// Breadth-first search returning a path with the fewest hops. Ties go to
    /// the earliest inserted edge.
    ShortestHop,
}

impl fmt::Display for PathStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStrategy::DepthFirst => write!(f, "dfs"),
            PathStrategy::ShortestHop => write!(f, "shortest"),
        }
    }
}

impl FromStr for PathStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(PathStrategy::DepthFirst),
            "shortest" | "bfs" | "shortest-hop" => Ok(PathStrategy::ShortestHop),
            other => Err(format!("unknown path strategy '{}'", other)),
        }
    }
}

/// A derived rate between two currencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub from: Currency,
    pub to: Currency,
    /// Units of `to` per unit of `from`.
    pub rate: f64,
    /// Hops taken, in order from `from` to `to`. Only present when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<Hop>>,
}

impl Resolution {
    /// Number of hops in the trace, if one was recorded.
    pub fn hop_count(&self) -> Option<usize> {
        self.trace.as_ref().map(Vec::len)
    }
}

/// Borrowed path: each step is the currency left and the edge taken.
type Path<'a> = Vec<(&'a Currency, &'a Edge)>;

/// Resolves derived rates using a fixed [`PathStrategy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RateResolver {
    strategy: PathStrategy,
}

impl RateResolver {
    pub fn new(strategy: PathStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> PathStrategy {
        self.strategy
    }

    /// Find a path from `from` to `to` and multiply the rates along it.
    ///
    /// Both currencies must be present in the graph. Resolving a currency
    /// against itself yields `1.0` without traversal. When `trace_steps` is
    /// set the hops are returned in travel order.
    pub fn resolve(
        &self,
        graph: &RateGraph,
        from: &Currency,
        to: &Currency,
        trace_steps: bool,
    ) -> FxResult<Resolution> {
        if !graph.contains(from) {
            return Err(FxError::UnknownCurrency(from.clone()));
        }
        if !graph.contains(to) {
            return Err(FxError::UnknownCurrency(to.clone()));
        }

        if from == to {
            debug!(currency = %from, "Identity conversion");
            return Ok(Resolution {
                from: from.clone(),
                to: to.clone(),
                rate: 1.0,
                trace: trace_steps.then(Vec::new),
            });
        }

        let path = match self.strategy {
            PathStrategy::DepthFirst => depth_first_path(graph, from, to),
            PathStrategy::ShortestHop => shortest_hop_path(graph, from, to),
        }
        .ok_or_else(|| FxError::NoPath {
            from: from.clone(),
            to: to.clone(),
        })?;

        let mut rate = 1.0;
        let mut trace = trace_steps.then(|| Vec::with_capacity(path.len()));
        for (step_from, edge) in &path {
            rate *= edge.rate;
            if let Some(trace) = trace.as_mut() {
                trace.push(Hop::new((*step_from).clone(), edge.to.clone(), edge.rate));
            }
        }

        info!(
            from = %from,
            to = %to,
            rate,
            hops = path.len(),
            strategy = %self.strategy,
            "Resolved exchange rate"
        );

        Ok(Resolution {
            from: from.clone(),
            to: to.clone(),
            rate,
            trace,
        })
    }
}

/// Resolve with the default depth-first strategy.
pub fn resolve(
    graph: &RateGraph,
    from: &Currency,
    to: &Currency,
    trace_steps: bool,
) -> FxResult<Resolution> {
    RateResolver::default().resolve(graph, from, to, trace_steps)
}

/// Depth-first walk with an explicit stack of (currency, remaining edges).
///
/// The successor table holds, for every currency on the walk, the edge most
/// recently examined from it. Edges are examined last-inserted first. A dead
/// end pops its frame and the parent overwrites its successor with the next
/// edge it examines, so entries left behind by abandoned branches are never
/// reached from `from`.
fn depth_first_path<'a>(graph: &'a RateGraph, from: &'a Currency, to: &Currency) -> Option<Path<'a>> {
    let mut visited: HashSet<&Currency> = HashSet::from([from]);
    let mut successor: HashMap<&Currency, &Edge> = HashMap::new();
    let mut stack = vec![(from, graph.edges(from).iter().rev())];
    let mut found = false;

    while let Some((top, edges)) = stack.last_mut() {
        let top = *top;
        match edges.find(|e| !visited.contains(&e.to)) {
            Some(edge) => {
                successor.insert(top, edge);
                if &edge.to == to {
                    found = true;
                    break;
                }
                visited.insert(&edge.to);
                stack.push((&edge.to, graph.edges(&edge.to).iter().rev()));
            }
            None => {
                stack.pop();
            }
        }
    }

    debug!(successors = ?successor, found, "Done traversing currency pairs");

    if !found {
        return None;
    }

    let mut path = Vec::new();
    let mut current = from;
    while current != to {
        let edge = *successor.get(current)?;
        path.push((current, edge));
        current = &edge.to;
    }
    Some(path)
}

/// Breadth-first walk keeping the first edge that reaches each currency.
fn shortest_hop_path<'a>(graph: &'a RateGraph, from: &'a Currency, to: &Currency) -> Option<Path<'a>> {
    let mut visited: HashSet<&Currency> = HashSet::from([from]);
    let mut predecessor: HashMap<&Currency, (&Currency, &Edge)> = HashMap::new();
    let mut queue = VecDeque::from([from]);

    while let Some(node) = queue.pop_front() {
        if node == to {
            break;
        }
        for edge in graph.edges(node) {
            if visited.insert(&edge.to) {
                predecessor.insert(&edge.to, (node, edge));
                queue.push_back(&edge.to);
            }
        }
    }

    debug!(predecessors = ?predecessor, "Done traversing currency pairs");

    if !visited.contains(to) {
        return None;
    }

    let mut path = Vec::new();
    let mut current = to;
    while current != from {
        let (prev, edge) = *predecessor.get(current)?;
        path.push((prev, edge));
        current = prev;
    }
    path.reverse();
    Some(path)
}
