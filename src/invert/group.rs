// invert/group.rs
use indexmap::IndexMap;
use std::hash::Hash;

/// Values mapped to every key that held them, in encounter order.
pub type Inverted<V, K> = IndexMap<V, Vec<K>>;

/// Groups the keys of `mapping` under the value each one maps to.
///
/// The mapping is enumerated once. A value seen for the first time opens a
/// new group; later keys with an equal value are appended to it, so every
/// group lists its keys in the order they were encountered. Groups themselves
/// are ordered by the first appearance of their value.
///
/// Passing `&map` instead of `map` leaves the input untouched and yields a
/// result of borrowed keys and values.
///
/// ```
/// use invert_by::invert_by;
///
/// let inverted = invert_by([("a", "x"), ("b", "x"), ("c", "y")]);
/// assert_eq!(inverted["x"], vec!["a", "b"]);
/// assert_eq!(inverted["y"], vec!["c"]);
/// ```
pub fn invert_by<M, K, V>(mapping: M) -> Inverted<V, K>
where
    M: IntoIterator<Item = (K, V)>,
    V: Hash + Eq,
{
    let mut inverted: Inverted<V, K> = IndexMap::new();
    for (key, value) in mapping {
        inverted.entry(value).or_default().push(key);
    }
    inverted
}

/// Data-last form of [`invert_by`], for use with [`Pipe`](super::Pipe).
///
/// ```
/// use invert_by::{invert_by_fn, Pipe};
///
/// let inverted = vec![("a", 1), ("b", 1)].pipe(invert_by_fn());
/// assert_eq!(inverted[&1], vec!["a", "b"]);
/// ```
pub fn invert_by_fn<M, K, V>() -> impl Fn(M) -> Inverted<V, K>
where
    M: IntoIterator<Item = (K, V)>,
    V: Hash + Eq,
{
    invert_by::<M, K, V>
}

/// Swaps keys and values. When several keys share a value the last one wins,
/// while the value keeps the position of its first appearance.
pub fn invert<M, K, V>(mapping: M) -> IndexMap<V, K>
where
    M: IntoIterator<Item = (K, V)>,
    V: Hash + Eq,
{
    mapping.into_iter().map(|(key, value)| (value, key)).collect()
}

/// Data-last form of [`invert`].
pub fn invert_fn<M, K, V>() -> impl Fn(M) -> IndexMap<V, K>
where
    M: IntoIterator<Item = (K, V)>,
    V: Hash + Eq,
{
    invert::<M, K, V>
}
