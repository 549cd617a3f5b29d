//! Operations on plain sequences that carry no emptiness information.

/// First element of a slice.
///
/// Unlike [`List::head`](crate::List::head), nothing in the type of `xs`
/// says whether an element exists, so this can only check at the point of
/// use.
///
/// # Panics
///
/// Panics if `xs` is empty.
pub fn partial_head<T>(xs: &[T]) -> &T {
    match xs.first() {
        Some(head) => head,
        None => panic!("partial_head: empty list"),
    }
}
