//! Row chunking for rayon-driven grid passes.

/// Multiplier for number of chunks relative to CPU threads.
const CHUNKS_PER_THREAD: usize = 2;

/// Rows per chunk that splits `height` into roughly `num_threads * 2` chunks.
/// Minimum of 1 row per chunk.
#[inline]
pub fn rows_per_chunk(height: usize) -> usize {
    let num_chunks = rayon::current_num_threads() * CHUNKS_PER_THREAD;
    (height / num_chunks).max(1)
}

/// Number of chunks `rows_per_chunk` produces for `height` rows.
#[inline]
pub fn chunk_count(height: usize, rows_per_chunk: usize) -> usize {
    height.div_ceil(rows_per_chunk)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_per_chunk_at_least_one() {
        assert_eq!(rows_per_chunk(0), 1);
        assert_eq!(rows_per_chunk(1), 1);
        assert!(rows_per_chunk(1_000_000) >= 1);
    }

    #[test]
    fn test_chunk_count_covers_all_rows() {
        assert_eq!(chunk_count(10, 3), 4);
        assert_eq!(chunk_count(9, 3), 3);
        assert_eq!(chunk_count(0, 1), 0);

        for height in 1..100 {
            let rows = rows_per_chunk(height);
            assert!(chunk_count(height, rows) * rows >= height);
        }
    }
}
