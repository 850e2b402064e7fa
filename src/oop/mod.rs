pub mod shape;

pub use shape::{Circle, Rect, Shape};
