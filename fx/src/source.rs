//! Sources of directly observed currency pairs.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use curconv_common::{is_valid_rate, Currency, CurrencyPair};
use tracing::debug;

use crate::error::{FxError, FxResult};

/// Anything that can hand over a batch of currency pairs.
pub trait PairSource {
    /// Get the source name, used in logs.
    fn name(&self) -> &str;

    /// Read every pair. Fails on the first malformed record.
    fn read_pairs(&mut self) -> FxResult<Vec<CurrencyPair>>;
}

/// Reads `left, right, rate` lines from a text stream.
pub struct CsvPairReader<R> {
    name: String,
    reader: R,
}

impl<R: BufRead> CsvPairReader<R> {
    /// Create a reader over any buffered stream.
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader,
        }
    }
}

impl CsvPairReader<BufReader<File>> {
    /// Open a pairs file.
    pub fn open(path: impl AsRef<Path>) -> FxResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Ok(Self::new(path.display().to_string(), BufReader::new(file)))
    }
}

impl<R: BufRead> PairSource for CsvPairReader<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_pairs(&mut self) -> FxResult<Vec<CurrencyPair>> {
        let mut pairs = Vec::new();
        for (idx, line) in (&mut self.reader).lines().enumerate() {
            pairs.push(parse_line(idx + 1, &line?)?);
        }

        debug!(source = %self.name, pairs = pairs.len(), "Read currency pairs");
        Ok(pairs)
    }
}

/// Parse one `left, right, rate` line. `line_no` is 1-based.
pub fn parse_line(line_no: usize, line: &str) -> FxResult<CurrencyPair> {
    let invalid = |reason: &str| FxError::InvalidInput {
        line: line_no,
        content: line.to_string(),
        reason: reason.to_string(),
    };

    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 3 {
        return Err(invalid("must have exactly 3 values between commas"));
    }

    let left: Currency = fields[0]
        .parse()
        .map_err(|_| invalid("left currency is empty"))?;
    let right: Currency = fields[1]
        .parse()
        .map_err(|_| invalid("right currency is empty"))?;
    let value: f64 = fields[2]
        .trim()
        .parse()
        .map_err(|_| invalid("rate is not a number"))?;

    if !is_valid_rate(value) {
        return Err(invalid("rate must be a positive number"));
    }

    Ok(CurrencyPair::new(left, right, value))
}

/// In-memory pair list.
#[derive(Debug, Clone, Default)]
pub struct StaticPairSource {
    name: String,
    pairs: Vec<CurrencyPair>,
}

impl StaticPairSource {
    pub fn new(name: impl Into<String>, pairs: Vec<CurrencyPair>) -> Self {
        Self {
            name: name.into(),
            pairs,
        }
    }

    /// Add a pair.
    pub fn with_pair(mut self, left: &str, right: &str, value: f64) -> Self {
        self.pairs
            .push(CurrencyPair::new(Currency::new(left), Currency::new(right), value));
        self
    }
}

impl PairSource for StaticPairSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_pairs(&mut self) -> FxResult<Vec<CurrencyPair>> {
        Ok(self.pairs.clone())
    }
}
