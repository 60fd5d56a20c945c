//! Curconv Common Types
//!
//! Currency codes, observed pair rates and path hops shared by the rate
//! graph and the command-line front end.

pub mod currency;
pub mod pair;

pub use currency::*;
pub use pair::*;
