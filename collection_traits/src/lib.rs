#![forbid(clippy::unconditional_recursion)]

pub mod error;
pub mod slice;
pub mod vec;

pub use error::{IndexOutOfRange, Operation};

pub trait HasLength {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// Collections that allocate storage ahead of their length
pub trait HasCapacity: HasLength {
    fn capacity(&self) -> usize;

    /// Number of allocated slots not holding a live element
    fn spare_capacity(&self) -> usize {
        self.capacity() - self.len()
    }
}

/// Positional editing of an ordered collection.
///
/// Fallible operations validate their indices before touching the
/// collection, so an `Err` always leaves it exactly as it was.
pub trait Resizable {
    type Item;
    fn push(&mut self, item: Self::Item);
    /// Appends a whole batch, keeping its order
    fn push_all(&mut self, items: Vec<Self::Item>) {
        for item in items {
            self.push(item);
        }
    }
    fn insert(&mut self, index: usize, item: Self::Item) -> Result<(), IndexOutOfRange>;
    fn remove(&mut self, index: usize) -> Result<Self::Item, IndexOutOfRange>;
    fn replace(&mut self, index: usize, item: Self::Item) -> Result<Self::Item, IndexOutOfRange>;
    fn swap(&mut self, a: usize, b: usize) -> Result<(), IndexOutOfRange>;
    fn clear(&mut self);
}
