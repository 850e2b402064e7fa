use crate::vtable::Figure;

pub trait Shape {
    fn draw(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    perimeter: i32,
}

impl Rect {
    pub fn new(perimeter: i32) -> Self {
        Rect { perimeter }
    }

    pub fn perimeter(&self) -> i32 {
        self.perimeter
    }
}

impl Shape for Rect {
    fn draw(&self) -> String {
        format!("Drawing Rect with perimeter: {}", self.perimeter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    radius: i32,
}

impl Circle {
    pub fn new(radius: i32) -> Self {
        Circle { radius }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }
}

impl Shape for Circle {
    fn draw(&self) -> String {
        format!("Drawing Circle with radius: {}", self.radius)
    }
}

/// Hand-built figures can sit in the same `dyn Shape` sequence.
impl Shape for Figure {
    fn draw(&self) -> String {
        Figure::draw(self)
    }
}
