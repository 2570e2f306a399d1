//! Mathematical utilities: least-squares moments for linearized fits.

pub mod ols;

pub use ols::*;
