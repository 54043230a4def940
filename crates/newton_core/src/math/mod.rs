//! Numerical building blocks.
//!
//! - `jacobian`: Forward finite-difference Jacobian estimation
//! - `conditioning`: Condition number checks
//! - `solvers`: The Newton-Raphson solver and its configuration

pub mod conditioning;
pub mod jacobian;
pub mod solvers;
