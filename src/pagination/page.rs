//! Pure chunking math for paginated datasets.

/// Display-card field limit imposed by the platform.
pub const MAX_ITEMS_PER_CHUNK: usize = 25;

/// Clamp a requested chunk size into the supported `[1, 25]` range.
pub fn clamp_chunk_size(requested: usize) -> usize {
    requested.clamp(1, MAX_ITEMS_PER_CHUNK)
}

/// Partition items into fixed-size pages, preserving order.
///
/// The final page may be shorter; an empty dataset produces zero pages.
pub fn chunk_items<T>(items: Vec<T>, items_per_chunk: usize) -> Vec<Vec<T>> {
    let size = clamp_chunk_size(items_per_chunk);
    let mut chunks = Vec::with_capacity(items.len().div_ceil(size));
    let mut remaining = items.into_iter();

    loop {
        let chunk: Vec<T> = remaining.by_ref().take(size).collect();
        if chunk.is_empty() {
            break;
        }
        chunks.push(chunk);
    }

    chunks
}

/// Number of pages a dataset occupies. Zero items means zero pages.
pub fn total_pages(item_count: usize, items_per_chunk: usize) -> usize {
    item_count.div_ceil(clamp_chunk_size(items_per_chunk))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_size_is_clamped_to_platform_limits() {
        assert_eq!(clamp_chunk_size(0), 1);
        assert_eq!(clamp_chunk_size(1), 1);
        assert_eq!(clamp_chunk_size(9), 9);
        assert_eq!(clamp_chunk_size(25), 25);
        assert_eq!(clamp_chunk_size(100), 25);
    }

    #[test]
    fn twenty_items_by_nine_chunk_into_nine_nine_two() {
        let chunks = chunk_items((0..20).collect(), 9);
        let sizes: Vec<usize> = chunks.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![9, 9, 2]);
    }

    #[test]
    fn empty_dataset_produces_zero_pages() {
        let chunks = chunk_items(Vec::<u8>::new(), 9);
        assert!(chunks.is_empty());
        assert_eq!(total_pages(0, 9), 0);
    }

    #[test]
    fn chunk_counts_match_ceiling_division() {
        for item_count in 0..60_usize {
            for per_chunk in [0, 1, 3, 9, 25, 40] {
                let chunks = chunk_items((0..item_count).collect::<Vec<_>>(), per_chunk);
                assert_eq!(chunks.len(), total_pages(item_count, per_chunk));
            }
        }
    }

    #[test]
    fn concatenating_chunks_reproduces_the_dataset() {
        let items: Vec<u32> = (0..53).collect();
        let chunks = chunk_items(items.clone(), 7);

        let rebuilt: Vec<u32> = chunks.into_iter().flatten().collect();
        assert_eq!(rebuilt, items);
    }
}
