use num::{PrimInt, ToPrimitive};

use crate::error::PadError;

/// Per-dimension `(left, right)` pad amounts, outer dimensions first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadSpec {
    pairs: Vec<[usize; 2]>,
}

impl PadSpec {
    /// Builds a spec from a rank x 2 integer matrix, one `[left, right]` row
    /// per dimension. Hosts hand these over as 32- or 64-bit matrices;
    /// negative amounts are rejected, never clamped.
    pub fn from_matrix<I: PrimInt>(rows: &[[I; 2]]) -> Result<Self, PadError> {
        let mut pairs = Vec::with_capacity(rows.len());
        for (dimension, row) in rows.iter().enumerate() {
            pairs.push([
                cast_amount(row[0], dimension)?,
                cast_amount(row[1], dimension)?,
            ]);
        }
        Ok(PadSpec { pairs })
    }

    /// Builds a spec from already non-negative per-dimension pairs.
    pub fn from_pairs(pairs: &[[usize; 2]]) -> Self {
        PadSpec {
            pairs: pairs.to_vec(),
        }
    }

    /// Number of dimensions the spec covers.
    pub fn rank(&self) -> usize {
        self.pairs.len()
    }

    pub(crate) fn left(&self, dimension: usize) -> usize {
        self.pairs[dimension][0]
    }

    pub(crate) fn right(&self, dimension: usize) -> usize {
        self.pairs[dimension][1]
    }
}

fn cast_amount<I: PrimInt>(amount: I, dimension: usize) -> Result<usize, PadError> {
    amount.to_usize().ok_or(PadError::NegativePad {
        dimension,
        amount: amount.to_i64().unwrap_or(i64::MIN),
    })
}

/// Shape of the padded output: every dimension grows by its left and right
/// pad amounts.
pub fn padded_shape(input_shape: &[usize], spec: &PadSpec) -> Result<Vec<usize>, PadError> {
    if spec.rank() != input_shape.len() {
        return Err(PadError::RankMismatch {
            spec_rank: spec.rank(),
            input_rank: input_shape.len(),
        });
    }
    Ok(input_shape
        .iter()
        .enumerate()
        .map(|(dimension, &size)| size + spec.left(dimension) + spec.right(dimension))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_each_dimension_by_both_amounts() {
        let spec = PadSpec::from_pairs(&[[1, 2], [0, 0], [3, 1]]);
        assert_eq!(
            padded_shape(&[4, 5, 6], &spec).unwrap(),
            vec![4 + 1 + 2, 5, 6 + 3 + 1]
        );
    }

    #[test]
    fn rank_mismatch_is_rejected() {
        let spec = PadSpec::from_pairs(&[[1, 1]]);
        assert_eq!(
            padded_shape(&[4, 5], &spec),
            Err(PadError::RankMismatch {
                spec_rank: 1,
                input_rank: 2
            })
        );
    }

    #[test]
    fn accepts_host_integer_matrices() {
        let from_i32 = PadSpec::from_matrix(&[[1i32, 2], [0, 4]]).unwrap();
        let from_i64 = PadSpec::from_matrix(&[[1i64, 2], [0, 4]]).unwrap();
        assert_eq!(from_i32, from_i64);
        assert_eq!(from_i32, PadSpec::from_pairs(&[[1, 2], [0, 4]]));
    }

    #[test]
    fn negative_amount_is_rejected_not_clamped() {
        assert_eq!(
            PadSpec::from_matrix(&[[2i32, 2], [1, -1]]),
            Err(PadError::NegativePad {
                dimension: 1,
                amount: -1
            })
        );
    }

    #[test]
    fn rank_zero_spec_is_valid() {
        let spec = PadSpec::from_matrix::<i64>(&[]).unwrap();
        assert_eq!(spec.rank(), 0);
        assert_eq!(padded_shape(&[], &spec).unwrap(), Vec::<usize>::new());
    }
}
