// invert/mod.rs
pub mod group;

pub use group::{invert, invert_by, invert_by_fn, invert_fn, Inverted};

/// Threads a value through a function, so data-last helpers read left to right.
pub trait Pipe: Sized {
    fn pipe<R, F>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }
}

impl<T> Pipe for T {}
