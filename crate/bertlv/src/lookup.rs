//! Tag-addressed lookup over a decoded tree: path descent, first-match
//! recursive search, and a flattened multi-map for repeated lookups.

use std::collections::HashMap;

use crate::tlv::Tlv;

/// Find a TLV by a dot-separated path of tags, e.g. `"6F.A5.BF0C.61.4F"`.
///
/// At each level the siblings are scanned for the segment's tag; the first
/// match is committed to. A non-terminal match must be constructed,
/// otherwise the lookup fails.
#[must_use]
pub fn find_by_path<'a>(tlvs: &'a [Tlv], path: &str) -> Option<&'a Tlv> {
    let (segment, rest) = match path.split_once('.') {
        Some((segment, rest)) => (segment, Some(rest)),
        None => (path, None),
    };

    for tlv in tlvs {
        if tlv.tag == segment {
            let Some(rest) = rest else {
                return Some(tlv);
            };

            return find_by_path(tlv.children()?, rest);
        }
    }

    None
}

/// Find the first TLV with the given tag, searching depth-first in
/// pre-order: a node is considered before its children, children before
/// later siblings.
#[must_use]
pub fn find_first<'a>(tlvs: &'a [Tlv], tag: &str) -> Option<&'a Tlv> {
    for tlv in tlvs {
        if tlv.tag == tag {
            return Some(tlv);
        }

        if let Some(children) = tlv.children() {
            if let Some(found) = find_first(children, tag) {
                return Some(found);
            }
        }
    }

    None
}

/// A flattened multi-map from tag to every node carrying that tag anywhere
/// in the tree, in depth-first pre-order.
///
/// Building costs one traversal; afterwards each lookup is O(1) amortized,
/// which pays off when many tags are read from the same structure, as in
/// EMV response processing. The map borrows the tree and is never mutated
/// after construction.
#[derive(Debug)]
pub struct TagMap<'a> {
    map: HashMap<&'a str, Vec<&'a Tlv>>,
}

/// Aggregate statistics of a [`TagMap`], for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagMapStats {
    /// Total number of tag occurrences in the tree.
    pub total_tags: usize,
    /// Number of distinct tags.
    pub distinct_tags: usize,
    /// Occurrences beyond the first of their tag.
    pub duplicate_tags: usize,
    /// Rough memory usage of the map in bytes.
    pub memory_estimate: usize,
}

impl<'a> TagMap<'a> {
    /// Flatten the tree into the map with a single depth-first pass.
    #[must_use]
    pub fn build(tlvs: &'a [Tlv]) -> Self {
        let mut map: HashMap<&'a str, Vec<&'a Tlv>> = HashMap::new();
        flatten(tlvs, &mut map);
        Self { map }
    }

    /// The first occurrence of `tag` in depth-first pre-order.
    #[must_use]
    pub fn first(&self, tag: &str) -> Option<&'a Tlv> {
        self.map.get(tag).and_then(|tlvs| tlvs.first().copied())
    }

    /// All occurrences of `tag`, in encounter order.
    #[must_use]
    pub fn all(&self, tag: &str) -> &[&'a Tlv] {
        self.map.get(tag).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.map.contains_key(tag)
    }

    /// Number of distinct tags in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> TagMapStats {
        let mut stats = TagMapStats {
            total_tags: 0,
            distinct_tags: self.map.len(),
            duplicate_tags: 0,
            memory_estimate: 0,
        };

        for (tag, tlvs) in &self.map {
            stats.total_tags += tlvs.len();
            stats.duplicate_tags += tlvs.len() - 1;
            // tag text + one reference and overhead per occurrence
            stats.memory_estimate += tag.len();
            for tlv in tlvs {
                stats.memory_estimate += tlv.value().map_or(0, <[u8]>::len) + 64;
            }
        }

        stats
    }
}

fn flatten<'a>(tlvs: &'a [Tlv], map: &mut HashMap<&'a str, Vec<&'a Tlv>>) {
    for tlv in tlvs {
        map.entry(tlv.tag.as_str()).or_default().push(tlv);

        if let Some(children) = tlv.children() {
            flatten(children, map);
        }
    }
}
