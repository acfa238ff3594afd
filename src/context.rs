use crate::{
    dtype::{Element, ElementType},
    error::PadError,
    shape::{padded_shape, PadSpec},
    tree::{apply_padding, fill_output, validate_padding, PadTree},
    MirrorPadMode,
};

/// Reusable mirror padding driver.
///
/// One call runs build, bind, validate, apply and flatten in sequence. The
/// context owns the node arena as scratch: consecutive calls with the same
/// input shape keep the tree structure and only refresh bindings and mirror
/// selections. The mode is fixed per instance.
///
/// Contexts share nothing; callers wanting throughput run independent
/// invocations on independent contexts.
#[derive(Debug)]
pub struct MirrorPadContext {
    mode: MirrorPadMode,
    tree: PadTree,
}

impl MirrorPadContext {
    pub fn new(mode: MirrorPadMode) -> Self {
        MirrorPadContext {
            mode,
            tree: PadTree::default(),
        }
    }

    pub fn mode(&self) -> MirrorPadMode {
        self.mode
    }

    /// Sizes and builds the arena for `input_shape` ahead of the first pad
    /// call. [`MirrorPadContext::pad`] does this lazily; hosts that know the
    /// shape early can front-load the allocation here.
    pub fn prepare(&mut self, input_shape: &[usize]) {
        if self.tree.shape() != input_shape {
            self.tree = PadTree::build(input_shape);
        }
    }

    /// Mirror-pads `input` (row-major, described by `input_shape`) and
    /// returns the flat row-major output.
    pub fn pad<T: Element>(
        &mut self,
        input: &[T],
        input_shape: &[usize],
        spec: &PadSpec,
    ) -> Result<Vec<T>, PadError> {
        let output_shape = padded_shape(input_shape, spec)?;
        let mut output = vec![T::default(); output_shape.iter().product()];
        self.pad_into(input, input_shape, spec, &mut output)?;
        Ok(output)
    }

    /// Like [`MirrorPadContext::pad`], writing into a caller-allocated
    /// buffer of exactly the padded element count.
    pub fn pad_into<T: Element>(
        &mut self,
        input: &[T],
        input_shape: &[usize],
        spec: &PadSpec,
        output: &mut [T],
    ) -> Result<(), PadError> {
        let output_shape = padded_shape(input_shape, spec)?;
        let output_len = output_shape.iter().product::<usize>();
        if output.len() != output_len {
            return Err(PadError::ElementCountMismatch {
                expected: output_len,
                actual: output.len(),
            });
        }

        let offset = self.mode.offset();
        self.prepare(input_shape);
        self.tree.bind(input.len())?;
        validate_padding(&self.tree, spec, offset)?;
        apply_padding(&mut self.tree, spec, offset)?;

        let written = fill_output(&self.tree, self.tree.root(), input, output, 0)?;
        if written != output_len {
            return Err(PadError::InternalConsistency(
                "write count does not match the padded shape",
            ));
        }
        Ok(())
    }

    /// Dynamically-typed entry point: `input` holds `input_shape`'s worth of
    /// `element_type` scalars in native byte order. Tags outside the
    /// supported set fail before any output is produced.
    pub fn pad_bytes(
        &mut self,
        input: &[u8],
        input_shape: &[usize],
        element_type: ElementType,
        spec: &PadSpec,
    ) -> Result<Vec<u8>, PadError> {
        if !element_type.is_supported() {
            return Err(PadError::UnsupportedType(element_type));
        }
        match element_type {
            ElementType::Bool => self.pad_bytes_as::<bool>(input, input_shape, spec),
            ElementType::U8 => self.pad_bytes_as::<u8>(input, input_shape, spec),
            ElementType::I8 => self.pad_bytes_as::<i8>(input, input_shape, spec),
            ElementType::I16 => self.pad_bytes_as::<i16>(input, input_shape, spec),
            ElementType::I32 => self.pad_bytes_as::<i32>(input, input_shape, spec),
            ElementType::I64 => self.pad_bytes_as::<i64>(input, input_shape, spec),
            ElementType::F32 => self.pad_bytes_as::<f32>(input, input_shape, spec),
            ElementType::F64 => self.pad_bytes_as::<f64>(input, input_shape, spec),
            ElementType::F16 => Err(PadError::UnsupportedType(element_type)),
        }
    }

    fn pad_bytes_as<T: Element>(
        &mut self,
        input: &[u8],
        input_shape: &[usize],
        spec: &PadSpec,
    ) -> Result<Vec<u8>, PadError> {
        let element_size = std::mem::size_of::<T>();
        let expected = input_shape.iter().product::<usize>() * element_size;
        if input.len() != expected {
            return Err(PadError::ByteLengthMismatch {
                expected,
                actual: input.len(),
            });
        }

        let values = input
            .chunks_exact(element_size)
            .map(T::from_ne_bytes)
            .collect::<Vec<_>>();
        let padded = self.pad(&values, input_shape, spec)?;

        let mut bytes = Vec::with_capacity(padded.len() * element_size);
        for value in padded {
            value.extend_ne_bytes(&mut bytes);
        }
        Ok(bytes)
    }
}

/// One-shot mirror pad over a flat row-major buffer.
pub fn mirror_pad<T: Element>(
    input: &[T],
    input_shape: &[usize],
    spec: &PadSpec,
    mode: MirrorPadMode,
) -> Result<Vec<T>, PadError> {
    MirrorPadContext::new(mode).pad(input, input_shape, spec)
}
