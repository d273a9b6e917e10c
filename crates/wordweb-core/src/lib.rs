//! Wordweb Core Library
//!
//! Builds a graph over a dictionary where words are linked when one
//! lexical transformation (substitution, insertion/deletion, anagram)
//! turns one into the other, and analyses it: connected components and
//! an estimate of the diameter.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod export;
pub mod graph;
pub mod logging;
