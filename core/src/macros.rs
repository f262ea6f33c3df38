/// Builds a [`GrowableArray`](crate::GrowableArray) from a literal list.
///
/// - `growable![]` is an empty array with no allocation.
/// - `growable![a, b, c]` holds exactly the listed elements, with capacity equal to
///   their count.
/// - `growable![value; n]` holds `n` clones of `value`.
///
/// ```
/// use elastic_core::growable;
///
/// let array = growable![1, 2, 3];
/// assert_eq!(array.len(), 3);
/// assert_eq!(array.capacity(), 3);
///
/// let zeros = growable![0u8; 4];
/// assert_eq!(zeros.as_slice(), &[0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! growable {
    () => {
        $crate::GrowableArray::new()
    };
    ($value:expr; $count:expr) => {{
        let mut array = $crate::GrowableArray::new();
        array.assign($count, $value);
        array
    }};
    ($($value:expr),+ $(,)?) => {
        $crate::GrowableArray::from([$($value),+])
    };
}
