//! Compressed-sparse-row storage for a single incidence relation.
//!
//! A [`Connectivity`] packs, for each source entity, the list of connected
//! target indices into two flat arrays: `offsets` (length `N + 1`, monotonic,
//! starting at 0) and `values` (length `offsets[N]`). Row `i` is the slice
//! `values[offsets[i]..offsets[i+1]]`; lookup is O(1) and iteration walks
//! contiguous memory. Once built, a `Connectivity` is never mutated.
//!
//! Out-of-range indices and misshaped inputs are programmer errors and panic.

/// CSR incidence store: for each source entity, the connected target indices.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connectivity {
    offsets: Vec<u32>,
    values: Vec<u32>,
}

impl Default for Connectivity {
    fn default() -> Self {
        Self {
            offsets: vec![0],
            values: Vec::new(),
        }
    }
}

impl Connectivity {
    /// Allocate a store with the given per-row sizes; all values start at 0
    /// and are filled in with [`set`](Self::set).
    pub fn from_sizes(sizes: &[u32]) -> Self {
        let mut offsets = Vec::with_capacity(sizes.len() + 1);
        let mut total = 0u32;
        offsets.push(0);
        for &s in sizes {
            total += s;
            offsets.push(total);
        }
        Self {
            offsets,
            values: vec![0; total as usize],
        }
    }

    /// Lay out an already-materialized ragged structure as CSR.
    pub fn from_ragged<R: AsRef<[u32]>>(rows: &[R]) -> Self {
        let mut offsets = Vec::with_capacity(rows.len() + 1);
        let mut total = 0u32;
        offsets.push(0);
        for row in rows {
            total += row.as_ref().len() as u32;
            offsets.push(total);
        }
        let mut values = Vec::with_capacity(total as usize);
        for row in rows {
            values.extend_from_slice(row.as_ref());
        }
        Self { offsets, values }
    }

    /// Wrap a row-major table of `num_rows` rows of fixed length `row_len`.
    pub fn from_flat(values: Vec<u32>, num_rows: usize, row_len: usize) -> Self {
        assert_eq!(
            values.len(),
            num_rows * row_len,
            "flat table length {} does not match {num_rows} rows of {row_len}",
            values.len(),
        );
        let offsets = (0..=num_rows).map(|i| (i * row_len) as u32).collect();
        Self { offsets, values }
    }

    /// Write target `j` at position `pos` of row `i`. `pos` must lie within
    /// the row allocated by [`from_sizes`](Self::from_sizes).
    #[inline]
    pub fn set(&mut self, i: usize, j: u32, pos: usize) {
        let start = self.offsets[i] as usize;
        let end = self.offsets[i + 1] as usize;
        assert!(pos < end - start, "position {pos} out of range for row {i}");
        self.values[start + pos] = j;
    }

    /// Number of source entities (rows).
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// True when the store holds no connections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Targets connected to source entity `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[u32] {
        &self.values[self.offsets[i] as usize..self.offsets[i + 1] as usize]
    }

    /// Total number of stored connections.
    #[inline]
    pub fn total_connections(&self) -> usize {
        self.values.len()
    }

    /// Iterate over all rows in source-index order.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.offsets
            .windows(2)
            .map(move |w| &self.values[w[0] as usize..w[1] as usize])
    }

    /// The raw offset array (length `len() + 1`).
    #[inline]
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    /// The raw value array.
    #[inline]
    pub fn values(&self) -> &[u32] {
        &self.values
    }
}
