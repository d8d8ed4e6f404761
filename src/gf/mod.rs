pub mod gf256;
pub mod tables;

pub use gf256::{poly_eval_low, Gf256};
pub use tables::{GfTables, M, N, PRIMITIVE_POLY};
