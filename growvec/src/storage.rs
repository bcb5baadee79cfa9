use crate::growth::{grown_capacity, DEFAULT_CAPACITY};
use collection_traits::{HasCapacity, HasLength, IndexOutOfRange, Operation, Resizable};
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::iter::{Flatten, Take};
use std::ops::{Index, IndexMut};
use tracing::{debug, trace};

pub type Iter<'a, T> = Flatten<std::slice::Iter<'a, Option<T>>>;
pub type IterMut<'a, T> = Flatten<std::slice::IterMut<'a, Option<T>>>;
pub type IntoIter<T> = Flatten<Take<std::vec::IntoIter<Option<T>>>>;

/// Growable, indexable sequence backed by a contiguous buffer.
///
/// The buffer always holds `capacity` slots. Slots `[0, count)` are
/// occupied, everything after them is empty.
#[derive(Clone)]
pub struct Collection<T> {
    buffer: Box<[Option<T>]>,
    count: usize,
}

impl<T> Collection<T> {
    /// Creates an empty collection with [DEFAULT_CAPACITY] slots
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty collection with at least `capacity` slots.
    ///
    /// Capacity never goes below [DEFAULT_CAPACITY].
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: allocate(capacity.max(DEFAULT_CAPACITY)),
            count: 0,
        }
    }

    /// Creates a collection holding `items` in the given order
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let mut collection = Self::with_capacity(items.len());
        for item in items {
            collection.add(item);
        }
        collection
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        self.buffer[..self.count]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or_else(|| IndexOutOfRange::new(Operation::Get, index, self.count))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange> {
        let count = self.count;
        self.buffer[..count]
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or_else(|| IndexOutOfRange::new(Operation::Set, index, count))
    }

    /// Overwrites the element at `index`, returning the previous one
    pub fn set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfRange> {
        let count = self.count;
        let slot = self.buffer[..count]
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or_else(|| IndexOutOfRange::new(Operation::Set, index, count))?;
        Ok(std::mem::replace(slot, value))
    }

    /// Appends `value`, doubling the buffer first if it is full
    pub fn add(&mut self, value: T) {
        self.ensure_capacity(self.count + 1);
        self.buffer[self.count] = Some(value);
        self.count += 1;
    }

    /// Appends all `values` in order.
    ///
    /// The buffer is grown at most once, sized for the whole batch.
    pub fn add_range<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        self.ensure_capacity(self.count.saturating_add(values.len()));
        for value in values {
            self.add(value);
        }
    }

    /// Inserts `value` at `index`, shifting everything after it to the
    /// right. `index == count` appends.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), IndexOutOfRange> {
        IndexOutOfRange::check_insertion(Operation::InsertAt, index, self.count)?;
        self.ensure_capacity(self.count + 1);
        // slot `count` is empty, rotating moves it to `index`
        self.buffer[index..=self.count].rotate_right(1);
        self.buffer[index] = Some(value);
        self.count += 1;
        Ok(())
    }

    /// Removes the element at `index`, shifting everything after it to the
    /// left. Removing the last element does not move anything.
    pub fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfRange> {
        let count = self.count;
        let value = self.buffer[..count]
            .get_mut(index)
            .and_then(Option::take)
            .ok_or_else(|| IndexOutOfRange::new(Operation::RemoveAt, index, count))?;
        // the emptied slot travels to the end of the occupied range
        self.buffer[index..count].rotate_left(1);
        self.count -= 1;
        Ok(value)
    }

    pub fn pop(&mut self) -> Option<T> {
        let last = self.count.checked_sub(1)?;
        self.remove_at(last).ok()
    }

    /// Swaps the elements at `a` and `b`
    pub fn exchange(&mut self, a: usize, b: usize) -> Result<(), IndexOutOfRange> {
        IndexOutOfRange::check_occupied(Operation::Exchange, a, self.count)?;
        IndexOutOfRange::check_occupied(Operation::Exchange, b, self.count)?;
        self.buffer.swap(a, b);
        Ok(())
    }

    /// Drops all elements. Capacity is retained.
    pub fn clear(&mut self) {
        for slot in &mut self.buffer[..self.count] {
            *slot = None;
        }
        debug!(
            count = self.count,
            capacity = self.capacity(),
            "cleared collection"
        );
        self.count = 0;
    }

    /// Makes room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.ensure_capacity(self.count.saturating_add(additional));
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.buffer[..self.count].iter().flatten()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.buffer[..self.count].iter_mut().flatten()
    }

    fn ensure_capacity(&mut self, required: usize) {
        let capacity = grown_capacity(self.capacity(), required);
        if capacity > self.capacity() {
            self.reallocate(capacity);
        }
    }

    fn reallocate(&mut self, capacity: usize) {
        trace!(
            from = self.capacity(),
            to = capacity,
            count = self.count,
            "growing collection"
        );
        let mut buffer = allocate(capacity);
        for (new, old) in buffer.iter_mut().zip(&mut self.buffer[..self.count]) {
            *new = old.take();
        }
        self.buffer = buffer;
    }
}

fn allocate<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Collection<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Collection<T> {}

impl<T> Index<usize> for Collection<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T> IndexMut<usize> for Collection<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T, const N: usize> From<[T; N]> for Collection<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_items(items)
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_items(items)
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffer
            .into_vec()
            .into_iter()
            .take(self.count)
            .flatten()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Collection<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> HasLength for Collection<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> HasCapacity for Collection<T> {
    fn capacity(&self) -> usize {
        self.capacity()
    }
}

impl<T> Resizable for Collection<T> {
    type Item = T;

    fn push(&mut self, item: Self::Item) {
        self.add(item)
    }

    fn push_all(&mut self, items: Vec<Self::Item>) {
        self.add_range(items)
    }

    fn insert(&mut self, index: usize, item: Self::Item) -> Result<(), IndexOutOfRange> {
        self.insert_at(index, item)
    }

    fn remove(&mut self, index: usize) -> Result<Self::Item, IndexOutOfRange> {
        self.remove_at(index)
    }

    fn replace(&mut self, index: usize, item: Self::Item) -> Result<Self::Item, IndexOutOfRange> {
        self.set(index, item)
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<(), IndexOutOfRange> {
        self.exchange(a, b)
    }

    fn clear(&mut self) {
        self.clear()
    }
}
