//! Fixed-capacity packing of primitive lists for the scene uniforms.

/// Capacity of every primitive array in the shader uniform contract
pub const MAX_SDF: usize = 50;

/// A list padded or truncated to a fixed capacity
#[derive(Debug, Clone, PartialEq)]
pub struct Packed<T> {
    pub entries: Vec<T>,
    /// Number of leading entries taken from the source list
    pub active_count: usize,
}

/// Pad `list` with copies of `dummy` up to `capacity`.
///
/// Lists longer than `capacity` are truncated; the overflow is dropped without error.
/// The input is never modified.
pub fn pack<T: Clone>(list: &[T], dummy: &T, capacity: usize) -> Packed<T> {
    let active_count = list.len().min(capacity);

    let entries = list[..active_count]
        .iter()
        .cloned()
        .chain(std::iter::repeat(dummy.clone()).take(capacity - active_count))
        .collect();

    Packed {
        entries,
        active_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_all_dummies() {
        let packed = pack(&[], &-1, 4);
        assert_eq!(packed.entries, vec![-1, -1, -1, -1]);
        assert_eq!(packed.active_count, 0);
    }

    #[test]
    fn short_list_keeps_order_and_pads() {
        let packed = pack(&[3, 1, 2], &0, 5);
        assert_eq!(packed.entries, vec![3, 1, 2, 0, 0]);
        assert_eq!(packed.active_count, 3);
    }

    #[test]
    fn exact_fit_has_no_dummies() {
        let packed = pack(&[7, 8], &0, 2);
        assert_eq!(packed.entries, vec![7, 8]);
        assert_eq!(packed.active_count, 2);
    }

    #[test]
    fn oversized_list_is_truncated() {
        let list: Vec<u32> = (0..60).collect();
        let packed = pack(&list, &999, MAX_SDF);

        assert_eq!(packed.entries.len(), MAX_SDF);
        assert_eq!(packed.entries[..], list[..MAX_SDF]);
        assert!(!packed.entries.contains(&999));
        assert_eq!(packed.active_count, MAX_SDF);
    }

    #[test]
    fn zero_capacity() {
        let packed = pack(&[1, 2, 3], &0, 0);
        assert!(packed.entries.is_empty());
        assert_eq!(packed.active_count, 0);
    }

    #[test]
    fn input_is_untouched() {
        let list = vec![String::from("a"), String::from("b")];
        let before = list.clone();
        let _ = pack(&list, &String::new(), 8);
        assert_eq!(list, before);
    }
}
