//! # goldbach-rs-core
//!
//! Deterministic primality testing and minimal symmetric Goldbach pair search
//! for even integers up to 4×10^18.
//!
//! The crate is pure computation: no I/O, no shared state, no `unsafe`. The
//! two leaf components (`primality`, `search`) are total functions of their
//! arguments; `solve` wraps them behind a text boundary for callers that
//! traffic in decimal strings.

#![deny(unsafe_code)]

pub mod arith;
pub mod parse;
pub mod primality;
pub mod search;
pub mod solve;
