// SPDX-License-Identifier: Apache-2.0

use crate::SongId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone)]
struct Node {
    value: SongId,
    next: Option<Box<Node>>,
}

/// Ordered, duplicate-tolerant chain of song ids backing a playlist.
///
/// Each node is exclusively owned by its predecessor (or the list head),
/// so the chain can never be shared between two lists and can never form
/// a cycle. There is no tail pointer and no cached length: the chain
/// itself is the single source of truth, and every operation except
/// [`SongList::prepend`] walks from the head.
#[derive(Debug, Clone, Default)]
pub struct SongList {
    head: Option<Box<Node>>,
}

impl SongList {
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Inserts `value` as the new last element. O(n).
    pub fn append(&mut self, value: SongId) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
    }

    /// Inserts `value` as the new first element. O(1).
    pub fn prepend(&mut self, value: SongId) {
        self.head = Some(Box::new(Node {
            value,
            next: self.head.take(),
        }));
    }

    /// Removes the first node from the head whose value equals `value`,
    /// keeping the relative order of the rest. Absent values and the
    /// empty list are silent no-ops; duplicates lose exactly one node.
    /// Returns whether a node was removed.
    pub fn delete_with_value(&mut self, value: SongId) -> bool {
        let mut cursor = &mut self.head;
        while cursor.is_some() {
            if cursor.as_ref().is_some_and(|node| node.value == value) {
                if let Some(node) = cursor.take() {
                    *cursor = node.next;
                }
                return true;
            }
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }
        false
    }

    /// Restartable head-to-tail traversal; does not mutate the list.
    #[must_use]
    pub fn iter(&self) -> SongListIter<'_> {
        SongListIter {
            cursor: self.head.as_deref(),
        }
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<SongId> {
        self.iter().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

pub struct SongListIter<'a> {
    cursor: Option<&'a Node>,
}

impl Iterator for SongListIter<'_> {
    type Item = SongId;

    fn next(&mut self) -> Option<SongId> {
        let node = self.cursor?;
        self.cursor = node.next.as_deref();
        Some(node.value)
    }
}

impl<'a> IntoIterator for &'a SongList {
    type Item = SongId;
    type IntoIter = SongListIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<SongId> for SongList {
    fn from_iter<I: IntoIterator<Item = SongId>>(iter: I) -> Self {
        let mut values: Vec<SongId> = iter.into_iter().collect();
        let mut list = Self::new();
        // Prepending in reverse keeps construction linear.
        while let Some(value) = values.pop() {
            list.prepend(value);
        }
        list
    }
}

// On the wire a list is a plain ordered id array, e.g. `[3, 1, 3]`.
impl Serialize for SongList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for SongList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<SongId>::deserialize(deserializer)?;
        Ok(values.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[i64]) -> Vec<SongId> {
        raw.iter().copied().map(SongId::new).collect()
    }

    #[test]
    fn append_walks_to_the_tail() {
        let mut list = SongList::new();
        list.append(SongId::new(1));
        list.append(SongId::new(2));
        list.append(SongId::new(3));
        assert_eq!(list.to_vec(), ids(&[1, 2, 3]));
    }

    #[test]
    fn prepend_then_append_on_empty() {
        let mut list = SongList::new();
        list.prepend(SongId::new(1));
        list.append(SongId::new(2));
        assert_eq!(list.to_vec(), ids(&[1, 2]));
    }

    #[test]
    fn delete_head_advances_head() {
        let mut list: SongList = ids(&[1, 2, 3]).into_iter().collect();
        assert!(list.delete_with_value(SongId::new(1)));
        assert_eq!(list.to_vec(), ids(&[2, 3]));
    }

    #[test]
    fn delete_splices_interior_node() {
        let mut list: SongList = ids(&[1, 2, 3]).into_iter().collect();
        assert!(list.delete_with_value(SongId::new(2)));
        assert_eq!(list.to_vec(), ids(&[1, 3]));
    }

    #[test]
    fn delete_tail_node() {
        let mut list: SongList = ids(&[1, 2, 3]).into_iter().collect();
        assert!(list.delete_with_value(SongId::new(3)));
        assert_eq!(list.to_vec(), ids(&[1, 2]));
    }

    #[test]
    fn delete_removes_only_first_duplicate() {
        let mut list: SongList = ids(&[7, 5, 7, 7]).into_iter().collect();
        assert!(list.delete_with_value(SongId::new(7)));
        assert_eq!(list.to_vec(), ids(&[5, 7, 7]));
    }

    #[test]
    fn delete_on_empty_or_absent_is_noop() {
        let mut empty = SongList::new();
        assert!(!empty.delete_with_value(SongId::new(1)));
        assert!(empty.is_empty());

        let mut list: SongList = ids(&[1, 2]).into_iter().collect();
        assert!(!list.delete_with_value(SongId::new(99)));
        assert_eq!(list.to_vec(), ids(&[1, 2]));
    }

    #[test]
    fn iter_is_restartable() {
        let list: SongList = ids(&[4, 5, 6]).into_iter().collect();
        assert_eq!(list.iter().collect::<Vec<_>>(), list.iter().collect::<Vec<_>>());
    }

    #[test]
    fn clone_is_deep() {
        let mut list: SongList = ids(&[1, 2]).into_iter().collect();
        let snapshot = list.clone();
        list.delete_with_value(SongId::new(1));
        assert_eq!(snapshot.to_vec(), ids(&[1, 2]));
        assert_eq!(list.to_vec(), ids(&[2]));
    }

    #[test]
    fn serde_round_trips_as_id_array() {
        let list: SongList = ids(&[3, 1, 3]).into_iter().collect();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, "[3,1,3]");
        let back: SongList = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_vec(), ids(&[3, 1, 3]));
    }
}
