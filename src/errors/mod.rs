//! Error types and error handling for the analyzer.
//!
//! This module defines the single error type shared by every phase. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing, parsing and semantic analysis
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
