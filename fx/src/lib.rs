//! Curconv FX Engine
//!
//! Derives an exchange rate between two currencies from a sparse set of
//! directly known pair rates.
//!
//! # Features
//!
//! - Bidirectional rate graph built from observed pairs
//! - Depth-first or fewest-hop path selection
//! - Optional hop-by-hop trace of the composed rate
//! - Line-checked reader for `left, right, rate` input
//!
//! # Example
//!
//! ```rust
//! use curconv_common::Currency;
//! use curconv_fx::{RateEngine, RateEngineConfig, StaticPairSource};
//!
//! let mut source = StaticPairSource::default()
//!     .with_pair("USD", "CAD", 1.35)
//!     .with_pair("CHF", "CAD", 1.53);
//! let engine = RateEngine::from_source(&mut source, RateEngineConfig::default())?;
//!
//! let resolution = engine.resolve(&Currency::usd(), &Currency::chf(), true)?;
//! assert!((resolution.rate - 1.35 / 1.53).abs() < 1e-9);
//! # Ok::<(), curconv_fx::FxError>(())
//! ```

pub mod engine;
pub mod error;
pub mod graph;
pub mod resolver;
pub mod source;

pub use engine::{RateEngine, RateEngineConfig, RateEngineStats};
pub use error::{FxError, FxResult};
pub use graph::{Edge, RateGraph};
pub use resolver::{resolve, PathStrategy, RateResolver, Resolution};
pub use source::{parse_line, CsvPairReader, PairSource, StaticPairSource};
