//! Lists whose emptiness flag has been erased.

use alloc::vec::Vec;
use core::fmt;

use crate::{Empty, Flag, Iter, List, NonEmpty};

/// A [`List`] whose flag is only known at runtime.
///
/// This is the result of operations like [`List::filter`], where the flag
/// depends on the data. Match on the variant, or call
/// [`to_non_empty`](AnyList::to_non_empty), to get a statically flagged list
/// back.
#[derive(Clone)]
pub enum AnyList<T> {
    Empty(List<T, Empty>),
    NonEmpty(List<T, NonEmpty>),
}

impl<T> AnyList<T> {
    pub const fn empty() -> Self {
        AnyList::Empty(List::nil())
    }

    /// Recover a `NonEmpty` list, or `None` if the list is empty.
    pub fn to_non_empty(self) -> Option<List<T, NonEmpty>> {
        match self {
            AnyList::Empty(_) => None,
            AnyList::NonEmpty(list) => Some(list),
        }
    }

    /// Borrowing version of [`to_non_empty`](AnyList::to_non_empty).
    pub fn as_non_empty(&self) -> Option<&List<T, NonEmpty>> {
        match self {
            AnyList::Empty(_) => None,
            AnyList::NonEmpty(list) => Some(list),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, AnyList::Empty(_))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.split_first())
    }

    pub fn split_first(&self) -> Option<(&T, &AnyList<T>)> {
        match self {
            AnyList::Empty(list) => list.split_first(),
            AnyList::NonEmpty(list) => list.split_first(),
        }
    }

    /// Right fold, see [`List::fold`].
    pub fn fold<B, G>(&self, init: B, f: G) -> B
    where
        G: FnMut(&T, B) -> B,
    {
        match self {
            AnyList::Empty(list) => list.fold(init, f),
            AnyList::NonEmpty(list) => list.fold(init, f),
        }
    }

    /// Apply `f` to every element; the hidden flag is preserved.
    pub fn map<U, G>(&self, f: G) -> AnyList<U>
    where
        G: FnMut(&T) -> U,
    {
        match self {
            AnyList::Empty(list) => AnyList::Empty(list.map(f)),
            AnyList::NonEmpty(list) => AnyList::NonEmpty(list.map(f)),
        }
    }

    /// Keep the elements satisfying `predicate`, see [`List::filter`].
    pub fn filter<P>(&self, predicate: P) -> AnyList<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        match self {
            AnyList::Empty(list) => list.filter(predicate),
            AnyList::NonEmpty(list) => list.filter(predicate),
        }
    }

    /// Build a list holding `items` in order.
    pub(crate) fn from_vec(items: Vec<T>) -> Self {
        items.into_iter().rev().fold(AnyList::empty(), |tail, item| {
            AnyList::NonEmpty(List::cons_any(item, tail))
        })
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Default for AnyList<T> {
    fn default() -> Self {
        AnyList::empty()
    }
}

impl<T, F: Flag> From<List<T, F>> for AnyList<T> {
    fn from(list: List<T, F>) -> Self {
        list.erase()
    }
}

impl<T> FromIterator<T> for AnyList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        AnyList::from_vec(iter.into_iter().collect())
    }
}

impl<T: PartialEq> PartialEq for AnyList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for AnyList<T> {}

impl<'a, T> IntoIterator for &'a AnyList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for AnyList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyList::Empty(list) => write!(f, "{list:?}"),
            AnyList::NonEmpty(list) => write!(f, "{list:?}"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for AnyList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyList::Empty(list) => write!(f, "{list}"),
            AnyList::NonEmpty(list) => write!(f, "{list}"),
        }
    }
}
