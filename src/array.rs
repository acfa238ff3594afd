use ndarray::{Array, ArrayBase, Data, Dimension};

use crate::{
    context::MirrorPadContext, dtype::Element, error::PadError, shape::PadSpec, MirrorPadMode,
};

/// Mirror padding for ndarray arrays of any rank.
pub trait MirrorPadExt<T, D: Dimension> {
    /// Pads every axis by mirroring across its borders. `padding` holds one
    /// `[left, right]` pair per axis, outer axes first.
    fn mirror_pad(
        &self,
        mode: MirrorPadMode,
        padding: &[[usize; 2]],
    ) -> Result<Array<T, D>, PadError>;
}

impl<T, S, D> MirrorPadExt<T, D> for ArrayBase<S, D>
where
    T: Element,
    S: Data<Elem = T>,
    D: Dimension,
{
    fn mirror_pad(
        &self,
        mode: MirrorPadMode,
        padding: &[[usize; 2]],
    ) -> Result<Array<T, D>, PadError> {
        let spec = PadSpec::from_pairs(padding);

        // the engine wants row-major storage; views may be anything
        let input = self.as_standard_layout();
        let flat = input.as_slice().ok_or(PadError::InternalConsistency(
            "standard layout array without a slice",
        ))?;

        let padded = MirrorPadContext::new(mode).pad(flat, self.shape(), &spec)?;

        let mut output_dim = self.raw_dim();
        for (axis, pair) in padding.iter().enumerate() {
            output_dim[axis] = self.raw_dim()[axis] + pair[0] + pair[1];
        }
        Array::from_shape_vec(output_dim, padded).map_err(|_| {
            PadError::InternalConsistency("padded data does not fit the padded shape")
        })
    }
}

#[cfg(test)]
mod tests {
    use ndarray::prelude::*;

    use super::*;

    #[test]
    fn symmetric_2d() {
        let arr = array![[1, 2, 3], [4, 5, 6]];
        let padded = arr
            .mirror_pad(MirrorPadMode::Symmetric, &[[0, 0], [1, 1]])
            .unwrap();
        assert_eq!(padded, array![[1, 1, 2, 3, 3], [4, 4, 5, 6, 6]]);
    }

    #[test]
    fn reflect_2d() {
        let arr = array![[1, 2, 3], [4, 5, 6], [7, 8, 9]];
        let padded = arr
            .mirror_pad(MirrorPadMode::Reflect, &[[1, 1], [1, 1]])
            .unwrap();
        assert_eq!(
            padded,
            array![
                [5, 4, 5, 6, 5],
                [2, 1, 2, 3, 2],
                [5, 4, 5, 6, 5],
                [8, 7, 8, 9, 8],
                [5, 4, 5, 6, 5]
            ]
        );
    }

    #[test]
    fn non_standard_layout_input() {
        let arr = array![[1, 2, 3], [4, 5, 6]];
        let transposed = arr.t();
        let padded = transposed
            .mirror_pad(MirrorPadMode::Symmetric, &[[0, 0], [1, 0]])
            .unwrap();
        assert_eq!(padded, array![[1, 1, 4], [2, 2, 5], [3, 3, 6]]);
    }

    #[test]
    fn dyn_rank_arrays_work() {
        let arr = ArrayD::from_shape_vec(IxDyn(&[2, 2]), vec![1.0f32, 2.0, 3.0, 4.0]).unwrap();
        let padded = arr
            .mirror_pad(MirrorPadMode::Symmetric, &[[1, 0], [0, 0]])
            .unwrap();
        assert_eq!(padded.shape(), &[3, 2]);
        assert_eq!(
            padded.into_raw_vec_and_offset().0,
            vec![1.0, 2.0, 1.0, 2.0, 3.0, 4.0]
        );
    }

    #[test]
    fn rank_mismatch_surfaces() {
        let arr = array![[1, 2], [3, 4]];
        assert_eq!(
            arr.mirror_pad(MirrorPadMode::Reflect, &[[1, 1]]),
            Err(PadError::RankMismatch {
                spec_rank: 1,
                input_rank: 2
            })
        );
    }

    #[test]
    fn pad_wider_than_source_fails() {
        let arr = array![1, 2, 3];
        let err = arr
            .mirror_pad(MirrorPadMode::Reflect, &[[3, 0]])
            .unwrap_err();
        assert_eq!(
            err,
            PadError::InsufficientPadData {
                dimension: 0,
                required: 4,
                available: 3,
            }
        );
        assert!(!err.is_shape_error());
    }
}
