//! Precomputed squared distances
//!
//! The tessellation looks up `dx² + dy²` for every claim it evaluates. The
//! table is filled once per initialization so the inner loop never multiplies.

/// Squared Euclidean distance lookup indexed by absolute offsets
///
/// Covers `|dx|` in `0..=2*width` and `|dy|` in `0..=2*height`.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    columns: usize,
    rows: usize,
    values: Vec<u64>,
}

impl DistanceTable {
    /// Build the table for a `width x height` grid
    pub fn new(width: usize, height: usize) -> Self {
        let columns = 2 * width + 1;
        let rows = 2 * height + 1;

        let mut values = Vec::with_capacity(columns * rows);
        for dx in 0..columns as u64 {
            for dy in 0..rows as u64 {
                values.push(dx * dx + dy * dy);
            }
        }

        Self {
            columns,
            rows,
            values,
        }
    }

    /// Squared distance for an offset
    ///
    /// The offset must lie within the table. Any offset between two cells of
    /// the grid does.
    #[inline]
    pub fn get(&self, dx: isize, dy: isize) -> u64 {
        let (ax, ay) = (dx.unsigned_abs(), dy.unsigned_abs());
        debug_assert!(
            ax < self.columns && ay < self.rows,
            "offset ({}, {}) outside distance table",
            dx,
            dy
        );
        self.values[ax * self.rows + ay]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_extent() {
        let table = DistanceTable::new(4, 3);
        assert_eq!(table.get(8, 6), 100);
        assert_eq!(table.get(-8, -6), 100);
    }

    #[test]
    #[should_panic]
    fn test_offset_outside_table() {
        let table = DistanceTable::new(4, 3);
        table.get(9, 0);
    }

    #[test]
    fn test_values_are_squared_euclidean() {
        let table = DistanceTable::new(5, 5);
        for dx in -10isize..=10 {
            for dy in -10isize..=10 {
                assert_eq!(table.get(dx, dy), (dx * dx + dy * dy) as u64);
            }
        }
    }

    #[test]
    fn test_symmetric_in_sign() {
        let table = DistanceTable::new(3, 3);
        assert_eq!(table.get(2, 1), table.get(-2, -1));
        assert_eq!(table.get(-2, 1), 5);
    }

    #[test]
    fn test_wide_table_exceeds_u32() {
        // (2 * 40_000)² no longer fits in u32
        let table = DistanceTable::new(40_000, 1);
        assert_eq!(table.get(80_000, 2), 6_400_000_004);
    }
}
