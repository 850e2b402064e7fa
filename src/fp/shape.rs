#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rect { perimeter: i32 },
    Circle { radius: i32 },
}

impl Shape {
    pub fn rect(perimeter: i32) -> Self {
        Shape::Rect { perimeter }
    }

    pub fn circle(radius: i32) -> Self {
        Shape::Circle { radius }
    }
}

pub fn draw(shape: &Shape) -> String {
    match shape {
        Shape::Rect { perimeter } => format!("Drawing Rect with perimeter: {}", perimeter),
        Shape::Circle { radius } => format!("Drawing Circle with radius: {}", radius),
    }
}
