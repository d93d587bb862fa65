//! Typelens CLI library.

pub mod cli;
