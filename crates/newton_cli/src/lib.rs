//! # newton_cli: Command-line front end for newton_core
//!
//! As part of the **S**ervice layer, this crate wires configuration,
//! logging and argument parsing around the solver and the polynomial
//! function families.
//!
//! # Commands
//!
//! - `newton solve --coeffs 1,2,-3 --x0 0.5` - Find a root
//! - `newton jacobian --coeffs 1,2,-3 --x 0.5` - Compare Jacobians at a point
//! - `newton check` - Validate and print the effective configuration

#![deny(missing_docs)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod function;

pub use error::{CliError, Result};
