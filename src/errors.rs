use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The global allocator returned null for a figure body.
    #[error("Failed to allocate {size} bytes (align {align}) for a figure")]
    Allocation { size: usize, align: usize },

    #[error("Failed to write drawing")]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_message() {
        let err = Error::Allocation { size: 8, align: 4 };
        assert_eq!(err.to_string(), "Failed to allocate 8 bytes (align 4) for a figure");
    }

    #[test]
    fn test_io_from() {
        let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
