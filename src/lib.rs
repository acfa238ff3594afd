//! Mirror/symmetric padding for N-dimensional arrays.
//!
//! Each dimension of a dense row-major array is extended by mirroring its
//! own elements across the borders, either without repeating the border
//! element ([`MirrorPadMode::Reflect`]) or repeating it
//! ([`MirrorPadMode::Symmetric`]).
//!
//! ```
//! use ndarray::array;
//! use ndarray_mirror_pad::{MirrorPadExt, MirrorPadMode};
//!
//! let arr = array![1, 2, 3, 4];
//!
//! let reflected = arr.mirror_pad(MirrorPadMode::Reflect, &[[2, 2]]).unwrap();
//! assert_eq!(reflected, array![3, 2, 1, 2, 3, 4, 3, 2]);
//!
//! let symmetric = arr.mirror_pad(MirrorPadMode::Symmetric, &[[2, 2]]).unwrap();
//! assert_eq!(symmetric, array![2, 1, 1, 2, 3, 4, 4, 3]);
//! ```

mod array;
mod context;
mod dtype;
mod error;
mod shape;
mod tree;

pub use array::MirrorPadExt;
pub use context::{mirror_pad, MirrorPadContext};
pub use dtype::{Element, ElementType};
pub use error::PadError;
pub use shape::{padded_shape, PadSpec};

// mirroring behavior at each border
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorPadMode {
    /// The border element itself is never repeated; mirroring starts at the
    /// element adjacent to it.
    Reflect,
    /// The border element is repeated as its own first mirror.
    Symmetric,
}

impl MirrorPadMode {
    // distance between a border element and its first mirror source
    pub(crate) fn offset(self) -> usize {
        match self {
            MirrorPadMode::Reflect => 1,
            MirrorPadMode::Symmetric => 0,
        }
    }
}
