//! Test fixtures shared by the workspace test suites.
//!
//! Nothing here is used by production code paths; the module exists so the
//! crates' test suites agree on how fixture dates are built.

pub mod dates;

pub use dates::ymd;
