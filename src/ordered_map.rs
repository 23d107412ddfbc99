//! A map ordered by an explicit [`Compare`] comparator.
//!
//! [`OrderedMap`] is like [`BTreeMap`][`btree_map`], except that its keys are ordered by a
//! comparator value rather than by their [`Ord`] implementation, so keys need not implement `Ord`
//! at all. Entries are kept in a sorted `Vec`, so lookups are logarithmic in the number of keys.
//!
//! [`btree_map`]: alloc::collections::btree_map

#![cfg(feature = "alloc")]
#![cfg_attr(docsrs, doc(cfg(feature = "alloc")))]

use alloc::vec::{self, Vec};
use core::convert;
use core::fmt::{self, Debug, Formatter};
use core::iter::Map;
use core::mem;
use core::slice;
#[cfg(feature = "serde")]
use ::serde::{ser::SerializeMap as _, Serialize, Serializer};

use crate::cmp::{Compare, Natural};

pub type Iter<'a, K, V> = Map<slice::Iter<'a, (K, V)>, fn(&(K, V)) -> (&K, &V)>;

pub type Keys<'a, K, V> = Map<slice::Iter<'a, (K, V)>, fn(&(K, V)) -> &K>;

pub type Values<'a, K, V> = Map<slice::Iter<'a, (K, V)>, fn(&(K, V)) -> &V>;

fn entry_key_value<K, V>(entry: &(K, V)) -> (&K, &V) {
    (&entry.0, &entry.1)
}

fn entry_key<K, V>(entry: &(K, V)) -> &K {
    &entry.0
}

fn entry_value<K, V>(entry: &(K, V)) -> &V {
    &entry.1
}

/// A map from keys to values, iterated in ascending key order under the comparator `C`.
///
/// Two keys are the same key if and only if `C` compares them as
/// [`Equal`][`core::cmp::Ordering::Equal`].
///
/// Lookups are logarithmic in the number of keys. Inserting a key that is not yet present shifts
/// the entries that follow it, so prefer [`from_iter_with`][`OrderedMap::from_iter_with`] when
/// building a map from many entries.
///
/// # Examples
///
/// ```rust
/// use seq1::cmp::Natural;
/// use seq1::ordered_map::OrderedMap;
///
/// let mut map = OrderedMap::new(Natural.reversed());
/// map.insert(1, 'a');
/// map.insert(3, 'c');
/// map.insert(2, 'b');
/// assert!(map.keys().copied().eq([3, 2, 1]));
/// ```
#[derive(Clone)]
pub struct OrderedMap<K, V, C = Natural> {
    entries: Vec<(K, V)>,
    compare: C,
}

impl<K, V, C> OrderedMap<K, V, C> {
    pub const fn new(compare: C) -> Self {
        OrderedMap {
            entries: Vec::new(),
            compare,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.entries.first().map(entry_key_value)
    }

    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.entries.last().map(entry_key_value)
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        self.entries
            .iter()
            .map(entry_key_value as fn(&(K, V)) -> (&K, &V))
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        self.entries.iter().map(entry_key as fn(&(K, V)) -> &K)
    }

    pub fn values(&self) -> Values<'_, K, V> {
        self.entries.iter().map(entry_value as fn(&(K, V)) -> &V)
    }

    pub fn comparator(&self) -> &C {
        &self.compare
    }

    pub fn map_values<U, F>(self, mut f: F) -> OrderedMap<K, U, C>
    where
        F: FnMut(V) -> U,
    {
        OrderedMap {
            entries: self
                .entries
                .into_iter()
                .map(|(key, value)| (key, f(value)))
                .collect(),
            compare: self.compare,
        }
    }

    pub fn into_vec(self) -> Vec<(K, V)> {
        self.entries
    }

    pub fn into_parts(self) -> (Vec<(K, V)>, C) {
        (self.entries, self.compare)
    }
}

impl<K, V, C> OrderedMap<K, V, C>
where
    C: Compare<K>,
{
    /// Constructs a map from key-value pairs.
    ///
    /// As with [`BTreeMap`][`alloc::collections::BTreeMap`], when a key appears more than once
    /// the last value is kept. The key that is kept is the first one encountered.
    pub fn from_iter_with<I>(items: I, compare: C) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        OrderedMap::from_unsorted_entries_with(
            items.into_iter().collect(),
            compare,
            convert::identity,
            |value, next| *value = next,
        )
    }

    /// Sorts `entries` by key and folds each run of equal keys into one entry.
    ///
    /// The sort is stable, so `start` receives the first value of a run and `merge` receives the
    /// remaining values of that run in their original order. The first key of each run is kept.
    pub(crate) fn from_unsorted_entries_with<T, S, M>(
        mut entries: Vec<(K, T)>,
        compare: C,
        mut start: S,
        mut merge: M,
    ) -> Self
    where
        S: FnMut(T) -> V,
        M: FnMut(&mut V, T),
    {
        entries.sort_by(|(lhs, _), (rhs, _)| compare.compare(lhs, rhs));
        let mut runs: Vec<(K, V)> = Vec::new();
        for (key, value) in entries {
            match runs.last_mut() {
                Some((first, run)) if compare.compare(first, &key).is_eq() => merge(run, value),
                _ => runs.push((key, start(value))),
            }
        }
        OrderedMap {
            entries: runs,
            compare,
        }
    }

    fn search(&self, query: &K) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|(key, _)| self.compare.compare(key, query))
    }

    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        match self.search(&key) {
            Ok(index) => Entry::Occupied(OccupiedEntry {
                entries: &mut self.entries,
                index,
            }),
            Err(index) => Entry::Vacant(VacantEntry {
                entries: &mut self.entries,
                index,
                key,
            }),
        }
    }

    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.entry(key) {
            Entry::Occupied(mut occupied) => Some(occupied.insert(value)),
            Entry::Vacant(vacant) => {
                vacant.insert(value);
                None
            },
        }
    }

    pub fn remove(&mut self, query: &K) -> Option<V> {
        self.search(query)
            .ok()
            .map(|index| self.entries.remove(index).1)
    }

    pub fn get(&self, query: &K) -> Option<&V> {
        self.search(query).ok().map(|index| &self.entries[index].1)
    }

    pub fn get_mut(&mut self, query: &K) -> Option<&mut V> {
        self.search(query)
            .ok()
            .map(move |index| &mut self.entries[index].1)
    }

    pub fn contains_key(&self, query: &K) -> bool {
        self.search(query).is_ok()
    }
}

impl<K, V, C> Debug for OrderedMap<K, V, C>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C> Default for OrderedMap<K, V, C>
where
    C: Default,
{
    fn default() -> Self {
        OrderedMap::new(C::default())
    }
}

impl<K, V, C> Eq for OrderedMap<K, V, C>
where
    K: Eq,
    V: Eq,
{
}

impl<K, V, C> IntoIterator for OrderedMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V, C> IntoIterator for &'a OrderedMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Maps are compared by their entries. Comparators are not compared, so maps built with different
// comparators are equal if they hold the same entries in the same order.
impl<K, V, C, D> PartialEq<OrderedMap<K, V, D>> for OrderedMap<K, V, C>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &OrderedMap<K, V, D>) -> bool {
        self.entries == other.entries
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<K, V, C> Serialize for OrderedMap<K, V, C>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

pub enum Entry<'a, K, V> {
    Occupied(OccupiedEntry<'a, K, V>),
    Vacant(VacantEntry<'a, K, V>),
}

impl<'a, K, V> Entry<'a, K, V> {
    pub fn and_modify<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        if let Entry::Occupied(ref mut occupied) = self {
            f(occupied.get_mut());
        }
        self
    }

    pub fn or_insert(self, default: V) -> &'a mut V {
        self.or_insert_with(move || default)
    }

    pub fn or_insert_with<F>(self, f: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(occupied) => occupied.into_mut(),
            Entry::Vacant(vacant) => vacant.insert(f()),
        }
    }

    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(ref occupied) => occupied.key(),
            Entry::Vacant(ref vacant) => vacant.key(),
        }
    }
}

impl<K, V> Debug for Entry<'_, K, V>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Occupied(ref occupied) => formatter
                .debug_tuple("Occupied")
                .field(occupied.key())
                .field(occupied.get())
                .finish(),
            Entry::Vacant(ref vacant) => {
                formatter.debug_tuple("Vacant").field(vacant.key()).finish()
            },
        }
    }
}

pub struct OccupiedEntry<'a, K, V> {
    entries: &'a mut Vec<(K, V)>,
    index: usize,
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    pub fn key(&self) -> &K {
        &self.entries[self.index].0
    }

    pub fn get(&self) -> &V {
        &self.entries[self.index].1
    }

    pub fn get_mut(&mut self) -> &mut V {
        &mut self.entries[self.index].1
    }

    pub fn into_mut(self) -> &'a mut V {
        &mut self.entries[self.index].1
    }

    pub fn insert(&mut self, value: V) -> V {
        mem::replace(self.get_mut(), value)
    }

    pub fn remove_entry(self) -> (K, V) {
        self.entries.remove(self.index)
    }
}

pub struct VacantEntry<'a, K, V> {
    entries: &'a mut Vec<(K, V)>,
    index: usize,
    key: K,
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn into_key(self) -> K {
        self.key
    }

    pub fn insert(self, value: V) -> &'a mut V {
        self.entries.insert(self.index, (self.key, value));
        &mut self.entries[self.index].1
    }
}

#[cfg(test)]
pub mod harness {
    use rstest::fixture;

    use crate::cmp::Natural;
    use crate::ordered_map::OrderedMap;

    pub const VALUE: char = 'x';

    #[fixture]
    pub fn xs(#[default(4)] end: u8) -> OrderedMap<u8, char, Natural> {
        OrderedMap::from_iter_with((0..=end).rev().map(|x| (x, VALUE)), Natural)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::cell::Cell;
    use core::cmp::Ordering;
    use rstest::rstest;
    #[cfg(feature = "serde")]
    use serde_test::Token;

    use crate::cmp::{Natural, Reversed};
    use crate::ordered_map::harness::{self, xs, VALUE};
    use crate::ordered_map::{Entry, OrderedMap};

    #[rstest]
    fn from_iter_with_unordered_then_keys_ascending(xs: OrderedMap<u8, char, Natural>) {
        assert!(xs.keys().copied().eq(0..=4));
        assert_eq!(xs.len(), 5);
    }

    #[rstest]
    fn from_iter_with_duplicate_keys_then_last_value_kept() {
        let xs = OrderedMap::from_iter_with([(1u8, 'a'), (0, 'b'), (1, 'c')], Natural);
        assert_eq!(xs.into_vec(), [(0, 'b'), (1, 'c')]);
    }

    #[rstest]
    #[case::absent(9, None)]
    #[case::present(2, Some(VALUE))]
    fn get_from_map_then_value_eq(
        #[from(xs)] xs: OrderedMap<u8, char, Natural>,
        #[case] key: u8,
        #[case] expected: Option<char>,
    ) {
        assert_eq!(xs.get(&key).copied(), expected);
        assert_eq!(xs.contains_key(&key), expected.is_some());
    }

    #[rstest]
    fn insert_into_reversed_map_then_keys_descending() {
        let mut xs = OrderedMap::new(Reversed(Natural));
        for key in [2u8, 7, 1, 7] {
            xs.insert(key, ());
        }
        assert!(xs.keys().copied().eq([7, 2, 1]));
    }

    #[rstest]
    fn insert_with_closure_comparator_then_equal_keys_merge() {
        let by_len = |lhs: &&str, rhs: &&str| lhs.len().cmp(&rhs.len());
        let mut xs = OrderedMap::new(by_len);
        assert_eq!(xs.insert("ab", 0), None);
        assert_eq!(xs.insert("xy", 1), Some(0));
        assert_eq!(xs.insert("c", 2), None);
        assert_eq!(xs.into_vec(), [("c", 2), ("ab", 1)]);
    }

    #[rstest]
    fn entry_and_modify_or_insert_then_values_eq() {
        let mut xs = OrderedMap::<u8, usize, _>::new(Natural);
        for key in [3, 1, 3, 3] {
            xs.entry(key).and_modify(|n| *n += 1).or_insert(1);
        }
        assert_eq!(xs.into_vec(), [(1, 1), (3, 3)]);
    }

    #[rstest]
    fn entry_then_occupied_or_vacant(mut xs: OrderedMap<u8, char, Natural>) {
        assert!(matches!(xs.entry(0), Entry::Occupied(_)));
        match xs.entry(9) {
            Entry::Vacant(vacant) => {
                assert_eq!(*vacant.key(), 9);
                vacant.insert('y');
            },
            Entry::Occupied(_) => panic!("unexpected occupied entry"),
        }
        assert_eq!(xs.last_key_value(), Some((&9, &'y')));
        if let Entry::Occupied(occupied) = xs.entry(0) {
            assert_eq!(occupied.remove_entry(), (0, VALUE));
        }
        assert_eq!(xs.first_key_value(), Some((&1, &VALUE)));
    }

    #[rstest]
    fn remove_from_map_then_absent(mut xs: OrderedMap<u8, char, Natural>) {
        assert_eq!(xs.remove(&2), Some(VALUE));
        assert_eq!(xs.remove(&2), None);
        assert!(xs.keys().copied().eq([0, 1, 3, 4]));
    }

    #[rstest]
    fn get_mut_from_map_then_value_modified(mut xs: OrderedMap<u8, char, Natural>) {
        if let Some(value) = xs.get_mut(&3) {
            *value = 'y';
        }
        assert_eq!(xs.get_mut(&9), None);
        assert!(xs.values().copied().eq(['x', 'x', 'x', 'y', 'x']));
    }

    #[rstest]
    fn into_key_of_vacant_entry_then_map_unchanged(mut xs: OrderedMap<u8, char, Natural>) {
        match xs.entry(7) {
            Entry::Vacant(vacant) => assert_eq!(vacant.into_key(), 7),
            Entry::Occupied(_) => panic!("unexpected occupied entry"),
        }
        assert_eq!(xs.len(), 5);
        assert!(!xs.contains_key(&7));
    }

    #[rstest]
    fn into_parts_of_reversed_map_then_entries_descending() {
        let xs = OrderedMap::from_iter_with([(1u8, 'a'), (2, 'b')], Reversed(Natural));
        let (entries, compare) = xs.into_parts();
        assert_eq!(entries, [(2, 'b'), (1, 'a')]);
        assert_eq!(compare, Reversed(Natural));
    }

    #[rstest]
    fn from_iter_with_many_duplicate_keys_then_first_key_and_last_value_kept() {
        let by_abs = |lhs: &i32, rhs: &i32| lhs.abs().cmp(&rhs.abs());
        let xs = OrderedMap::from_iter_with(
            [(2, 'a'), (-1, 'b'), (-2, 'c'), (1, 'd'), (2, 'e')],
            by_abs,
        );
        assert_eq!(xs.into_vec(), [(-1, 'd'), (2, 'e')]);
    }

    #[rstest]
    fn from_iter_with_many_descending_keys_then_comparisons_are_quasilinear() {
        const LOG2_N: usize = 14;
        const N: usize = 1 << LOG2_N;
        let n = Cell::new(0usize);
        let xs = OrderedMap::from_iter_with(
            (0..N).rev().map(|key| (key, ())),
            |lhs: &usize, rhs: &usize| {
                n.set(n.get() + 1);
                lhs.cmp(rhs)
            },
        );
        assert_eq!(xs.len(), N);
        assert!(xs.keys().copied().eq(0..N));
        assert!(n.get() <= 2 * N * (LOG2_N + 1));
    }

    #[rstest]
    fn map_values_then_keys_unchanged(xs: OrderedMap<u8, char, Natural>) {
        let ys = xs.clone().map_values(|value| value.to_ascii_uppercase());
        assert!(ys.keys().eq(xs.keys()));
        assert!(ys.values().all(|value| *value == 'X'));
    }

    #[rstest]
    fn eq_maps_with_different_comparators_then_entries_compared() {
        let xs = OrderedMap::from_iter_with([(0u8, ()), (1, ())], Natural);
        let ys = OrderedMap::from_iter_with(
            [(1u8, ()), (0, ())],
            |lhs: &u8, rhs: &u8| -> Ordering { lhs.cmp(rhs) },
        );
        let zs = OrderedMap::from_iter_with([(0u8, ()), (1, ())], Reversed(Natural));
        assert_eq!(xs, ys);
        assert_ne!(xs, zs);
    }

    #[rstest]
    fn debug_map_then_formatted_as_map() {
        let xs = harness::xs(1);
        assert_eq!(alloc::format!("{:?}", xs), "{0: 'x', 1: 'x'}");
        let empty: Vec<(u8, char)> = OrderedMap::new(Natural).into_vec();
        assert!(empty.is_empty());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialize_map_then_tokens_in_key_order() {
        let xs = OrderedMap::from_iter_with([(2u8, 'b'), (1, 'a')], Natural);
        serde_test::assert_ser_tokens(
            &xs,
            &[
                Token::Map { len: Some(2) },
                Token::U8(1),
                Token::Char('a'),
                Token::U8(2),
                Token::Char('b'),
                Token::MapEnd,
            ],
        );
    }
}
