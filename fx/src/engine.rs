//! Rate engine: one graph, many queries.

use curconv_common::{Currency, CurrencyPair};
use tracing::{info, instrument};

use crate::error::FxResult;
use crate::graph::RateGraph;
use crate::resolver::{PathStrategy, RateResolver, Resolution};
use crate::source::PairSource;

/// Configuration for the rate engine.
#[derive(Debug, Clone, Default)]
pub struct RateEngineConfig {
    /// Path selection used for every query.
    pub strategy: PathStrategy,
}

/// Holds a rate graph and answers derived rate queries against it.
pub struct RateEngine {
    graph: RateGraph,
    resolver: RateResolver,
}

impl RateEngine {
    /// Create an engine over an already built graph.
    pub fn new(graph: RateGraph, config: RateEngineConfig) -> Self {
        Self {
            graph,
            resolver: RateResolver::new(config.strategy),
        }
    }

    /// Read every pair from `source` and build the graph.
    #[instrument(skip(source, config), fields(source = source.name()))]
    pub fn from_source(source: &mut dyn PairSource, config: RateEngineConfig) -> FxResult<Self> {
        let pairs = source.read_pairs()?;
        let engine = Self::from_pairs(&pairs, config)?;

        info!(pairs = pairs.len(), "Loaded currency pairs");
        Ok(engine)
    }

    /// Build the graph from a slice of pairs.
    pub fn from_pairs(pairs: &[CurrencyPair], config: RateEngineConfig) -> FxResult<Self> {
        Ok(Self::new(RateGraph::build(pairs)?, config))
    }

    /// Resolve the rate from one currency to another.
    #[instrument(skip(self), fields(strategy = %self.resolver.strategy()))]
    pub fn resolve(&self, from: &Currency, to: &Currency, trace_steps: bool) -> FxResult<Resolution> {
        self.resolver.resolve(&self.graph, from, to, trace_steps)
    }

    /// Get the underlying graph.
    pub fn graph(&self) -> &RateGraph {
        &self.graph
    }

    /// Get engine statistics.
    pub fn stats(&self) -> RateEngineStats {
        RateEngineStats {
            currencies: self.graph.node_count(),
            edges: self.graph.edge_count(),
            strategy: self.resolver.strategy(),
        }
    }
}

/// Engine statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct RateEngineStats {
    pub currencies: usize,
    pub edges: usize,
    pub strategy: PathStrategy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FxError;
    use crate::source::{CsvPairReader, StaticPairSource};
    use std::io::Cursor;

    fn setup_engine(strategy: PathStrategy) -> RateEngine {
        let mut source = StaticPairSource::default()
            .with_pair("USD", "CAD", 1.35)
            .with_pair("CHF", "CAD", 1.53)
            .with_pair("EUR", "USD", 1.08);

        RateEngine::from_source(&mut source, RateEngineConfig { strategy }).unwrap()
    }

    #[test]
    fn test_engine_answers_repeated_queries() {
        let engine = setup_engine(PathStrategy::DepthFirst);

        let usd_chf = engine.resolve(&Currency::usd(), &Currency::chf(), false).unwrap();
        let eur_chf = engine.resolve(&Currency::eur(), &Currency::chf(), true).unwrap();

        assert!((usd_chf.rate - 1.35 / 1.53).abs() < 1e-9);
        assert!((eur_chf.rate - 1.08 * 1.35 / 1.53).abs() < 1e-9);
        assert_eq!(eur_chf.hop_count(), Some(3));
    }

    #[test]
    fn test_engine_stats() {
        let engine = setup_engine(PathStrategy::ShortestHop);

        assert_eq!(
            engine.stats(),
            RateEngineStats {
                currencies: 4,
                edges: 6,
                strategy: PathStrategy::ShortestHop,
            }
        );
    }

    #[test]
    fn test_malformed_input_builds_nothing() {
        let mut source = CsvPairReader::new("test", Cursor::new("USD,CAD,1.35\nUSD,CAD\n"));

        let result = RateEngine::from_source(&mut source, RateEngineConfig::default());

        assert!(matches!(result, Err(FxError::InvalidInput { line: 2, .. })));
    }

    #[test]
    fn test_unknown_currency_from_engine() {
        let engine = setup_engine(PathStrategy::DepthFirst);

        let result = engine.resolve(&Currency::gbp(), &Currency::usd(), false);

        assert!(matches!(result, Err(FxError::UnknownCurrency(_))));
    }
}
