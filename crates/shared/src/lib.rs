//! Types shared by the dataset generators, the dashboard session and the front-ends.

pub mod datasets;
pub mod domain;
pub mod error;
