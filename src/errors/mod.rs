//! Error types and error handling for the tokenizer.
//!
//! Every lexing failure is fatal to the current session. Errors carry the
//! line and column where they occurred, a stable name and an optional tip
//! used when rendering diagnostics.

pub mod errors;

#[cfg(test)]
mod tests;
