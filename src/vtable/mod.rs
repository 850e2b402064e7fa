//! Dispatch through an explicit per-variant table of function slots.

pub mod figure;

pub use figure::{Circle, Figure, FigureVTable, Rect, Variant};
