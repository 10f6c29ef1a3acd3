//! Row-parallel iteration over interleaved output buffers.
//!
//! With the `parallel` feature rows are distributed over the rayon pool;
//! without it they run in order on the calling thread. Kernels only write
//! their own row, so both paths produce identical bytes.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Calls `f(y, row)` for every `row_len`-sized row of `out`.
///
/// Does nothing when `row_len` is zero.
pub(crate) fn for_each_row<F>(out: &mut [u8], row_len: usize, f: F)
where
    F: Fn(usize, &mut [u8]) + Send + Sync,
{
    if row_len == 0 {
        return;
    }

    #[cfg(feature = "parallel")]
    out.par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| f(y, row));

    #[cfg(not(feature = "parallel"))]
    out.chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| f(y, row));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_see_their_index() {
        let mut buf = vec![0u8; 12];
        for_each_row(&mut buf, 4, |y, row| row.fill(y as u8 + 1));
        assert_eq!(buf, [1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3]);
    }

    #[test]
    fn test_zero_row_len() {
        let mut buf: Vec<u8> = Vec::new();
        for_each_row(&mut buf, 0, |_, _| unreachable!());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_core_follows_parallel_feature() {
        assert_eq!(instafx_core::PARALLEL, cfg!(feature = "parallel"));
    }
}
