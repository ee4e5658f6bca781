//! The EPA algorithm for penetration depth computation.

pub use self::epa::{EpaOptions, EPA};

mod epa;
