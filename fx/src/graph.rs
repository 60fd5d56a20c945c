//! Bidirectional rate graph built from observed currency pairs.

use std::collections::HashMap;

use curconv_common::{is_valid_rate, Currency, CurrencyPair};
use tracing::{debug, info, warn};

use crate::error::{FxError, FxResult};

/// Outgoing edge: one unit of the owning currency buys `rate` units of `to`.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub to: Currency,
    pub rate: f64,
}

/// Adjacency structure mapping every seen currency to its outgoing edges.
///
/// Each observed pair contributes a forward edge and its reciprocal. Edges are
/// kept in insertion order and never deduplicated, so repeated pairs produce
/// parallel edges. Edge order decides which path a depth-first resolution
/// discovers.
#[derive(Debug, Clone, Default)]
pub struct RateGraph {
    adjacency: HashMap<Currency, Vec<Edge>>,
    edge_count: usize,
}

impl RateGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a sequence of pairs.
    pub fn build<'a, I>(pairs: I) -> FxResult<Self>
    where
        I: IntoIterator<Item = &'a CurrencyPair>,
    {
        let mut graph = Self::new();
        for pair in pairs {
            graph.add_pair(pair)?;
        }

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Rate graph built"
        );
        debug!(adjacency = ?graph.adjacency, "Adjacency list");

        Ok(graph)
    }

    /// Add one pair as a forward edge and its reciprocal.
    pub fn add_pair(&mut self, pair: &CurrencyPair) -> FxResult<()> {
        if !is_valid_rate(pair.value) {
            return Err(FxError::InvalidRate {
                pair: pair.clone(),
                value: pair.value,
            });
        }

        if self.has_edge(&pair.left, &pair.right) {
            warn!(
                left = %pair.left,
                right = %pair.right,
                "Pair already present; keeping parallel edge"
            );
        }

        self.push_edge(pair.left.clone(), pair.right.clone(), pair.value);
        self.push_edge(pair.right.clone(), pair.left.clone(), 1.0 / pair.value);
        Ok(())
    }

    fn push_edge(&mut self, from: Currency, to: Currency, rate: f64) {
        self.adjacency
            .entry(from)
            .or_default()
            .push(Edge { to, rate });
        self.edge_count += 1;
    }

    /// Outgoing edges of a currency, in insertion order.
    pub fn edges(&self, currency: &Currency) -> &[Edge] {
        self.adjacency
            .get(currency)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Check whether any pair referenced the currency.
    pub fn contains(&self, currency: &Currency) -> bool {
        self.adjacency.contains_key(currency)
    }

    /// Check for a direct edge between two currencies.
    pub fn has_edge(&self, from: &Currency, to: &Currency) -> bool {
        self.edges(from).iter().any(|e| &e.to == to)
    }

    /// All known currencies, sorted by code.
    pub fn currencies(&self) -> Vec<&Currency> {
        let mut currencies: Vec<&Currency> = self.adjacency.keys().collect();
        currencies.sort();
        currencies
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
