//! Borrowing iteration over flagged and erased lists.

use crate::AnyList;

/// Iterator over the elements of a [`List`](crate::List) or [`AnyList`],
/// front to back.
#[derive(Debug)]
pub struct Iter<'a, T> {
    next: Option<(&'a T, &'a AnyList<T>)>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(first: Option<(&'a T, &'a AnyList<T>)>) -> Self {
        Self { next: first }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let (head, tail) = self.next.take()?;
        self.next = tail.split_first();
        Some(head)
    }
}

impl<T> core::iter::FusedIterator for Iter<'_, T> {}
