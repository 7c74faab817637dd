//! Helpers shared by the in-crate property tests.
