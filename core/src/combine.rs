//! Column assembly and order-independent combination identity.
//!
//! One arrangement per row, transposed, yields `k` columns of one value per
//! row. Column identity, not column position, is what distinguishes two
//! combinations: the same unordered column set reached through different
//! per-row orderings must be scored exactly once.

/// One value per row, in row order.
pub type Column = Vec<f64>;

/// Transposes one arrangement per row into `k` columns.
///
/// Returns `None` if any assembled column still contains a zero. Zeros are
/// removed upstream during row preparation, so this check should never
/// trigger; it is kept as an invariant gate in case the zero-stripping rule
/// is ever relaxed.
pub(crate) fn assemble_columns<'a>(
    arrangements: impl Iterator<Item = &'a [f64]>,
    k: usize,
) -> Option<Vec<Column>> {
    let mut columns: Vec<Column> = vec![Vec::new(); k];
    for arrangement in arrangements {
        debug_assert_eq!(arrangement.len(), k);
        for (position, &value) in arrangement.iter().enumerate() {
            columns[position].push(value);
        }
    }

    if columns.iter().any(|col| col.contains(&0.0)) {
        return None;
    }
    Some(columns)
}

/// Order-independent identity of a combination's column set.
///
/// Columns are encoded as their values' IEEE-754 bit patterns and sorted
/// lexicographically, so two combinations with the same column multiset
/// compare equal regardless of the order enumeration produced them in.
/// Bit-pattern encoding keeps the key `Eq + Hash` without imposing any
/// tolerance; candidates are compared exactly, never approximately.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalKey(Vec<Vec<u64>>);

impl CanonicalKey {
    pub fn from_columns(columns: &[Column]) -> CanonicalKey {
        let mut encoded: Vec<Vec<u64>> = columns
            .iter()
            .map(|col| col.iter().map(|v| v.to_bits()).collect())
            .collect();
        encoded.sort_unstable();
        CanonicalKey(encoded)
    }
}
