use std::io::Write;

use clap::ArgEnum;
use tracing::debug;

use crate::errors::Result;
use crate::{fp, oop, vtable};

pub const RECT_PERIMETER: i32 = 10;
pub const CIRCLE_RADIUS: i32 = 8;

#[derive(ArgEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Hand-built function table per variant
    #[clap(name = "vtable")]
    VTable,
    /// Trait objects
    Oop,
    /// Enum and match
    Fp,
}

impl Default for Dispatch {
    fn default() -> Self {
        Dispatch::VTable
    }
}

/// Draws every shape through the common trait, in sequence order.
pub fn draw_all(shapes: &[Box<dyn oop::Shape>]) -> Vec<String> {
    shapes.iter().map(|shape| shape.draw()).collect()
}

fn call_stuff<W: Write>(out: &mut W, shape: &dyn oop::Shape) -> Result<()> {
    writeln!(out, "{}", shape.draw())?;
    Ok(())
}

/// Draws a rectangle then a circle with the chosen dispatch.
pub fn run<W: Write>(dispatch: Dispatch, out: &mut W) -> Result<()> {
    debug!(?dispatch, "running driver");
    match dispatch {
        Dispatch::VTable => {
            let rect = vtable::Figure::rect(RECT_PERIMETER)?;
            call_stuff(out, &rect)?;

            let circle = vtable::Figure::circle(CIRCLE_RADIUS)?;
            call_stuff(out, &circle)?;
        }
        Dispatch::Oop => {
            let shapes: Vec<Box<dyn oop::Shape>> = vec![
                Box::new(oop::Rect::new(RECT_PERIMETER)),
                Box::new(oop::Circle::new(CIRCLE_RADIUS)),
            ];
            for line in draw_all(&shapes) {
                writeln!(out, "{}", line)?;
            }
        }
        Dispatch::Fp => {
            for shape in [fp::Shape::rect(RECT_PERIMETER), fp::Shape::circle(CIRCLE_RADIUS)] {
                writeln!(out, "{}", fp::draw(&shape))?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use std::io;

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_default() {
        let mut out = Vec::new();
        run(Dispatch::default(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Drawing Rect with perimeter: 10\nDrawing Circle with radius: 8\n"
        );
    }

    #[test]
    fn test_run_closed_output() {
        let err = run(Dispatch::Fp, &mut Closed).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
