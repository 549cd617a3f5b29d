/// Build a statically flagged list from its elements.
///
/// `list![]` is a `List<T, Empty>`; any other form is a `List<T, NonEmpty>`.
///
/// ```
/// use kinded_list::{Empty, List, NonEmpty, list};
///
/// let xs: List<u8, NonEmpty> = list![1, 2, 3];
/// let none: List<u8, Empty> = list![];
/// assert_eq!(xs.len(), 3);
/// assert!(none.is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::List::nil()
    };
    ($head:expr $(, $tail:expr)*) => {
        $crate::List::cons($head, $crate::list![$($tail),*])
    };
}
