use std::alloc::{self, Layout};
use std::fmt;
use std::ptr::{self, NonNull};

use tracing::{debug, trace};

use crate::errors::{Error, Result};

/// A table of function slots shared by every figure of one variant.
///
/// The slots take the type-erased body of the figure they were built for.
pub struct FigureVTable {
    pub name: &'static str,
    pub draw: unsafe fn(NonNull<()>) -> String,
    pub drop: unsafe fn(NonNull<()>),
}

impl FigureVTable {
    /// Builds the table for bodies of type `T`. The `drop` slot is filled in
    /// from `T` so the table and the body layout can never disagree.
    pub const fn new<T: Variant>(name: &'static str, draw: unsafe fn(NonNull<()>) -> String) -> Self {
        FigureVTable {
            name,
            draw,
            drop: drop_body::<T>,
        }
    }
}

/// A concrete figure body with its own dispatch table.
///
/// # Safety
///
/// `vtable()` must return a `'static` table whose slots expect a body of
/// type `Self`, and no other type may return the same table.
pub unsafe trait Variant: Sized + 'static {
    fn vtable() -> &'static FigureVTable;
}

/// A figure known only through its dispatch table.
pub struct Figure {
    vtable: &'static FigureVTable,
    body: NonNull<()>,
}

impl Figure {
    /// Moves `body` to the heap and pairs it with its variant's table (upcast).
    pub fn new<T: Variant>(body: T) -> Result<Figure> {
        let layout = Layout::new::<T>();
        let ptr = if layout.size() == 0 {
            NonNull::<T>::dangling()
        } else {
            allocate(layout)?.cast::<T>()
        };
        // SAFETY: `ptr` is freshly allocated for `layout`, or dangling and
        // well aligned when `T` is zero sized.
        unsafe { ptr.as_ptr().write(body) };

        let vtable = T::vtable();
        debug!(variant = vtable.name, size = layout.size(), "constructed figure");
        Ok(Figure {
            vtable,
            body: ptr.cast(),
        })
    }

    pub fn rect(perimeter: i32) -> Result<Figure> {
        Figure::new(Rect::new(perimeter))
    }

    pub fn circle(radius: i32) -> Result<Figure> {
        Figure::new(Circle::new(radius))
    }

    pub fn name(&self) -> &'static str {
        self.vtable.name
    }

    pub fn draw(&self) -> String {
        trace!(variant = self.vtable.name, "dispatching draw");
        // SAFETY: `body` was built for this table in `Figure::new` and stays
        // alive until `drop`.
        unsafe { (self.vtable.draw)(self.body) }
    }

    /// Recovers the concrete body when this figure was built from a `T`.
    pub fn downcast_ref<T: Variant>(&self) -> Option<&T> {
        if ptr::eq(self.vtable, T::vtable()) {
            // SAFETY: the table is unique to `T`, so the body is a `T`.
            Some(unsafe { self.body.cast::<T>().as_ref() })
        } else {
            None
        }
    }
}

impl Drop for Figure {
    fn drop(&mut self) {
        trace!(variant = self.vtable.name, "dropping figure");
        // SAFETY: the body is live and is never touched again.
        unsafe { (self.vtable.drop)(self.body) }
    }
}

impl fmt::Debug for Figure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Figure({})", self.vtable.name)
    }
}

fn allocate(layout: Layout) -> Result<NonNull<u8>> {
    // SAFETY: callers only pass layouts with a non-zero size.
    let raw = unsafe { alloc::alloc(layout) };
    NonNull::new(raw).ok_or(Error::Allocation {
        size: layout.size(),
        align: layout.align(),
    })
}

unsafe fn drop_body<T>(body: NonNull<()>) {
    let ptr = body.cast::<T>().as_ptr();
    ptr::drop_in_place(ptr);
    let layout = Layout::new::<T>();
    if layout.size() != 0 {
        alloc::dealloc(ptr.cast::<u8>(), layout);
    }
}

/* -- -- -- Variants -- -- -- */

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

unsafe fn draw_rect(body: NonNull<()>) -> String {
    // Downcast
    let rect = body.cast::<Rect>().as_ref();
    format!("Drawing Rect with perimeter: {}", rect.perimeter)
}

unsafe fn draw_circle(body: NonNull<()>) -> String {
    let circle = body.cast::<Circle>().as_ref();
    format!("Drawing Circle with radius: {}", circle.radius)
}

static RECT_VTABLE: FigureVTable = FigureVTable::new::<Rect>("Rect", draw_rect);
static CIRCLE_VTABLE: FigureVTable = FigureVTable::new::<Circle>("Circle", draw_circle);

unsafe impl Variant for Rect {
    fn vtable() -> &'static FigureVTable {
        &RECT_VTABLE
    }
}

unsafe impl Variant for Circle {
    fn vtable() -> &'static FigureVTable {
        &CIRCLE_VTABLE
    }
}
