//! The flagged list type and its operations.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;
use core::mem;
use core::ops::Deref;

use crate::{AnyList, Empty, Flag, Iter, NonEmpty};

/// Singly linked list whose emptiness is tracked by the flag `F`.
///
/// `Nil` carries an `F::IfEmpty` witness and `Cons` an `F::IfNonEmpty`
/// witness. Exactly one of them is inhabited for each flag, so a
/// `List<T, Empty>` is always `Nil` and a `List<T, NonEmpty>` is always
/// `Cons`. The tail of a `Cons` may have either flag and is stored erased.
///
/// Tails are reference counted, so cloning a list or consing onto an existing
/// one shares structure instead of copying it.
///
/// Every operation walks the list in a loop, dropping included, so list
/// length is not limited by stack depth.
#[derive(Clone)]
pub enum List<T, F: Flag> {
    Nil(F::IfEmpty),
    Cons(F::IfNonEmpty, T, Tail<T>),
}

/// Shared, erased tail of a [`List::Cons`].
pub struct Tail<T>(Rc<AnyList<T>>);

impl<T> Tail<T> {
    pub fn new(list: AnyList<T>) -> Self {
        Tail(Rc::new(list))
    }

    /// Detach the next tail if this one is the only owner of it.
    fn take_unique(&mut self) -> Option<AnyList<T>> {
        let list = Rc::get_mut(&mut self.0)?;
        match list {
            AnyList::NonEmpty(List::Cons(_, _, next)) => Rc::get_mut(&mut next.0).map(mem::take),
            _ => None,
        }
    }
}

impl<T> Deref for Tail<T> {
    type Target = AnyList<T>;

    fn deref(&self) -> &AnyList<T> {
        &self.0
    }
}

impl<T> Clone for Tail<T> {
    fn clone(&self) -> Self {
        Tail(Rc::clone(&self.0))
    }
}

impl<T> Drop for Tail<T> {
    // Unlink uniquely owned nodes one at a time. Each node is dropped after
    // its own tail has been emptied, so no drop recurses more than one level.
    // Stops at the first node shared with another list.
    fn drop(&mut self) {
        while let Some(rest) = self.take_unique() {
            if let Some(list) = Rc::get_mut(&mut self.0) {
                *list = rest;
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tail<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl<T> List<T, Empty> {
    /// The empty list.
    pub const fn nil() -> Self {
        List::Nil(())
    }
}

impl<T> Default for List<T, Empty> {
    fn default() -> Self {
        List::nil()
    }
}

impl<T> List<T, NonEmpty> {
    /// Prepend `head` to a tail of any flag.
    pub fn cons<G: Flag>(head: T, tail: List<T, G>) -> Self {
        List::cons_any(head, tail.erase())
    }

    /// Prepend `head` to a tail whose flag has been erased.
    pub fn cons_any(head: T, tail: AnyList<T>) -> Self {
        List::Cons((), head, Tail::new(tail))
    }

    pub fn singleton(value: T) -> Self {
        List::cons(value, List::<T, Empty>::nil())
    }

    /// First element. Total: a `NonEmpty` list always has one.
    pub fn head(&self) -> &T {
        match self {
            List::Cons(_, head, _) => head,
            List::Nil(never) => match *never {},
        }
    }

    /// Everything after the first element, with its flag erased.
    pub fn tail(&self) -> &AnyList<T> {
        match self {
            List::Cons(_, _, tail) => tail,
            List::Nil(never) => match *never {},
        }
    }

    /// Right fold without a base accumulator (`foldr1`).
    ///
    /// The last element seeds the fold, so `fold1(f)` over `[a, b, c]` is
    /// `f(a, f(b, c))`.
    pub fn fold1<G>(&self, mut f: G) -> T
    where
        T: Clone,
        G: FnMut(&T, T) -> T,
    {
        let rest: Vec<&T> = self.tail().iter().collect();
        match rest.split_last() {
            None => self.head().clone(),
            Some((last, init)) => {
                let acc = init
                    .iter()
                    .rev()
                    .fold((*last).clone(), |acc, item| f(item, acc));
                f(self.head(), acc)
            }
        }
    }
}

impl<T, F: Flag> List<T, F> {
    pub fn is_empty(&self) -> bool {
        matches!(self, List::Nil(_))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.split_first())
    }

    /// First element and the rest, or `None` for `Nil`.
    pub fn split_first(&self) -> Option<(&T, &AnyList<T>)> {
        match self {
            List::Nil(_) => None,
            List::Cons(_, head, tail) => Some((head, &**tail)),
        }
    }

    /// Right fold (`foldr`): `fold(z, f)` over `[a, b]` is `f(a, f(b, z))`.
    pub fn fold<B, G>(&self, init: B, mut f: G) -> B
    where
        G: FnMut(&T, B) -> B,
    {
        let items: Vec<&T> = self.iter().collect();
        items.into_iter().rev().fold(init, |acc, item| f(item, acc))
    }

    /// Apply `f` to every element, front to back. The result has the same
    /// flag.
    pub fn map<U, G>(&self, mut f: G) -> List<U, F>
    where
        G: FnMut(&T) -> U,
    {
        match self {
            List::Nil(witness) => List::Nil(*witness),
            List::Cons(witness, head, tail) => {
                let head = f(head);
                let rest: Vec<U> = tail.iter().map(f).collect();
                List::Cons(*witness, head, Tail::new(AnyList::from_vec(rest)))
            }
        }
    }

    /// Keep the elements satisfying `predicate`.
    ///
    /// Even a `NonEmpty` input can filter down to nothing, so the flag of the
    /// result is only known at runtime. The result is built from the back, so
    /// the predicate visits elements last to first.
    pub fn filter<P>(&self, mut predicate: P) -> AnyList<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        let items: Vec<&T> = self.iter().collect();
        items
            .into_iter()
            .rev()
            .fold(AnyList::empty(), |rest, item| {
                if predicate(item) {
                    AnyList::NonEmpty(List::cons_any(item.clone(), rest))
                } else {
                    rest
                }
            })
    }

    /// Forget the flag.
    pub fn erase(self) -> AnyList<T> {
        match self {
            List::Nil(_) => AnyList::Empty(List::Nil(())),
            List::Cons(_, head, tail) => AnyList::NonEmpty(List::Cons((), head, tail)),
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq, F: Flag> PartialEq for List<T, F> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq, F: Flag> Eq for List<T, F> {}

impl<'a, T, F: Flag> IntoIterator for &'a List<T, F> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug, F: Flag> fmt::Debug for List<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", F::NAME)?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, F: Flag> fmt::Display for List<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
