pub mod cli;
pub mod driver;
pub mod errors;
pub mod fp;
pub mod logging;
pub mod oop;
pub mod vtable;

pub use driver::{run, Dispatch};
pub use errors::{Error, Result};
