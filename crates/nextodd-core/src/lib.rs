//! Core library for nextodd.
//!
//! Computes the smallest odd integer strictly greater than a given value.
//! Two input policies are supported: a strict one that only accepts
//! integers, and a coercing one that converts floats (truncating toward
//! zero) and base-10 integer strings before computing.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod batch;
pub mod coerce;
pub mod config;
pub mod demo;
pub mod error;
pub mod parity;
pub mod policy;

pub use coerce::{ConvertibleToInteger, Input};
pub use config::Config;
pub use error::{Error, Result};
pub use parity::{next_odd_strict, NextOdd};
pub use policy::{next_odd_checked, Policy};
