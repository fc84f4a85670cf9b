//! Key-set difference between two key sequences.
//!
//! Used by structural comparison (declared keys vs declared keys) and by the
//! structure validator (declared keys vs the keys of a concrete array).

use lattix_value::ArrayKey;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Keys typically declared by one structure; spills to the heap beyond this.
const INLINE_KEYS: usize = 8;

/// Keys split by which side declares them.
///
/// Each list keeps the order of the side it was taken from; `shared` follows
/// the left side.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct KeyDiff<'a> {
    pub only_left: SmallVec<[&'a ArrayKey; INLINE_KEYS]>,
    pub only_right: SmallVec<[&'a ArrayKey; INLINE_KEYS]>,
    pub shared: SmallVec<[&'a ArrayKey; INLINE_KEYS]>,
}

impl KeyDiff<'_> {
    /// Both sides hold the same key set.
    #[inline]
    pub fn is_same_key_set(&self) -> bool {
        self.only_left.is_empty() && self.only_right.is_empty()
    }
}

/// Split the keys of `left` and `right` into left-only, right-only and shared.
pub fn key_diff<'a>(
    left: impl IntoIterator<Item = &'a ArrayKey>,
    right: impl IntoIterator<Item = &'a ArrayKey>,
) -> KeyDiff<'a> {
    let left: SmallVec<[&ArrayKey; INLINE_KEYS]> = left.into_iter().collect();
    let right: SmallVec<[&ArrayKey; INLINE_KEYS]> = right.into_iter().collect();
    let left_set: FxHashSet<&ArrayKey> = left.iter().copied().collect();
    let right_set: FxHashSet<&ArrayKey> = right.iter().copied().collect();

    let mut diff = KeyDiff::default();
    for key in left {
        if right_set.contains(key) {
            diff.shared.push(key);
        } else {
            diff.only_left.push(key);
        }
    }
    diff.only_right = right
        .into_iter()
        .filter(|key| !left_set.contains(key))
        .collect();
    diff
}
