use crate::{HasCapacity, HasLength, IndexOutOfRange, Operation, Resizable};

impl<T> HasLength for Vec<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> HasCapacity for Vec<T> {
    fn capacity(&self) -> usize {
        self.capacity()
    }
}

impl<T> Resizable for Vec<T> {
    type Item = T;

    fn push(&mut self, item: Self::Item) {
        self.push(item)
    }

    fn push_all(&mut self, items: Vec<Self::Item>) {
        self.extend(items)
    }

    fn insert(&mut self, index: usize, item: Self::Item) -> Result<(), IndexOutOfRange> {
        IndexOutOfRange::check_insertion(Operation::InsertAt, index, self.len())?;
        self.insert(index, item);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<Self::Item, IndexOutOfRange> {
        IndexOutOfRange::check_occupied(Operation::RemoveAt, index, self.len())?;
        Ok(self.remove(index))
    }

    fn replace(&mut self, index: usize, item: Self::Item) -> Result<Self::Item, IndexOutOfRange> {
        let count = self.len();
        let slot = self
            .get_mut(index)
            .ok_or_else(|| IndexOutOfRange::new(Operation::Set, index, count))?;
        Ok(std::mem::replace(slot, item))
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<(), IndexOutOfRange> {
        IndexOutOfRange::check_occupied(Operation::Exchange, a, self.len())?;
        IndexOutOfRange::check_occupied(Operation::Exchange, b, self.len())?;
        self.as_mut_slice().swap(a, b);
        Ok(())
    }

    fn clear(&mut self) {
        self.clear()
    }
}
