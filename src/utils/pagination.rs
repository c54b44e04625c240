//! Offset/limit slicing over an ordered snapshot

/// Page size used when the caller asks for a non-positive limit
pub const DEFAULT_PAGE_LIMIT: i64 = 50;

/// Return the `[offset, offset + limit)` window of `values`.
///
/// Edge cases are resolved without errors:
/// - a non-positive `limit` falls back to [`DEFAULT_PAGE_LIMIT`]
/// - an `offset` past the end yields an empty page
/// - a negative `offset` yields an empty page (it is never clamped to zero)
///
/// # Examples
/// ```
/// use fact_cache::utils::pagination::slice;
///
/// let values = vec![1, 2, 3];
/// assert_eq!(slice(&values, 2, 0), vec![1, 2]);
/// assert_eq!(slice(&values, 2, 2), vec![3]);
/// assert!(slice(&values, 2, 4).is_empty());
/// assert!(slice(&values, 2, -1).is_empty());
/// ```
pub fn slice<T: Clone>(values: &[T], limit: i64, offset: i64) -> Vec<T> {
    let size = i64::try_from(values.len()).unwrap_or(i64::MAX);

    let start = offset.min(size);
    let page_limit = if limit > 0 { limit } else { DEFAULT_PAGE_LIMIT };
    let end = start.saturating_add(page_limit).min(size);

    if start < 0 || start == size || start == end {
        return Vec::new();
    }

    // 0 <= start < end <= size here
    values[start as usize..end as usize].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(2, 0, vec![1, 2])]
    #[case(2, 2, vec![3])]
    #[case(2, 4, vec![])]
    #[case(2, 3, vec![])]
    #[case(10, 1, vec![2, 3])]
    #[case(0, 0, vec![1, 2, 3])]
    #[case(-5, 1, vec![2, 3])]
    #[case(2, -1, vec![])]
    #[case(0, i64::MIN, vec![])]
    #[case(i64::MAX, 1, vec![2, 3])]
    fn test_slice_edge_cases(#[case] limit: i64, #[case] offset: i64, #[case] expected: Vec<i32>) {
        assert_eq!(slice(&[1, 2, 3], limit, offset), expected);
    }

    #[test]
    fn test_slice_empty_input() {
        let empty: Vec<u8> = Vec::new();
        assert!(slice(&empty, 10, 0).is_empty());
        assert!(slice(&empty, 0, 0).is_empty());
    }

    #[test]
    fn test_default_limit_caps_page_size() {
        let values: Vec<usize> = (0..120).collect();

        let page = slice(&values, 0, 0);
        assert_eq!(page.len(), DEFAULT_PAGE_LIMIT as usize);
        assert_eq!(page.first(), Some(&0));
        assert_eq!(page.last(), Some(&49));
    }

    proptest! {
        #[test]
        fn prop_pages_reconstruct_input(values in prop::collection::vec(any::<u16>(), 0..200), limit in 1i64..64) {
            let mut rebuilt = Vec::with_capacity(values.len());
            let mut offset = 0;
            loop {
                let page = slice(&values, limit, offset);
                if page.is_empty() {
                    break;
                }
                prop_assert!(page.len() as i64 <= limit);
                rebuilt.extend(page);
                offset += limit;
            }
            prop_assert_eq!(rebuilt, values);
        }

        #[test]
        fn prop_negative_offset_is_empty(values in prop::collection::vec(any::<u8>(), 0..50), limit in any::<i64>(), offset in i64::MIN..0) {
            prop_assert!(slice(&values, limit, offset).is_empty());
        }

        #[test]
        fn prop_non_positive_limit_uses_default(values in prop::collection::vec(any::<u8>(), 0..200), limit in i64::MIN..=0, offset in 0i64..220) {
            prop_assert_eq!(slice(&values, limit, offset), slice(&values, DEFAULT_PAGE_LIMIT, offset));
        }
    }
}
