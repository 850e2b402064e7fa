pub mod shape;

pub use shape::{draw, Shape};
