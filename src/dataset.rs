use std::{num::NonZeroUsize, ops::Range};

use ndarray::Array1;

use crate::{NetErr, Result};

/// A single labeled sample used for training and evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    values: Array1<f32>,
    label: usize,
    classes: usize,
}

impl Example {
    /// Creates a new `Example`.
    ///
    /// # Arguments
    /// * `values` - The input vector.
    /// * `label` - The index of the correct class.
    /// * `classes` - The amount of distinct classes, the length of the one-hot target.
    ///
    /// # Returns
    /// An error if `values` is empty, `classes` is zero or `label` is not below `classes`.
    pub fn new(values: Vec<f32>, label: usize, classes: usize) -> Result<Self> {
        if values.is_empty() {
            return Err(NetErr::InvalidArgument("example has no input values"));
        }

        if classes == 0 {
            return Err(NetErr::InvalidArgument("example declares zero classes"));
        }

        if label >= classes {
            return Err(NetErr::LabelOutOfRange { label, classes });
        }

        Ok(Self {
            values: Array1::from_vec(values),
            label,
            classes,
        })
    }

    pub fn values(&self) -> &Array1<f32> {
        &self.values
    }

    pub fn label(&self) -> usize {
        self.label
    }

    pub fn classes(&self) -> usize {
        self.classes
    }
}

/// Returns the amount of mini-batches `len` examples are split into.
///
/// This is `len / batch_size` rounded half up, but never less than one batch for a
/// non empty set, so small sets still get trained on. Plain rounding would give zero
/// batches, and no training at all, whenever `len < batch_size / 2`.
pub fn batch_count(len: usize, batch_size: NonZeroUsize) -> usize {
    if len == 0 {
        return 0;
    }

    let m = batch_size.get();
    ((2 * len + m) / (2 * m)).max(1)
}

/// Splits `0..len` into contiguous mini-batch ranges.
///
/// Every batch but the last holds exactly `batch_size` elements, the last one takes all
/// the remaining elements, so it can be larger or smaller than `batch_size`.
pub fn batch_ranges(len: usize, batch_size: NonZeroUsize) -> Vec<Range<usize>> {
    let count = batch_count(len, batch_size);
    let m = batch_size.get();

    (0..count)
        .map(|i| {
            let start = i * m;
            let end = if i + 1 == count { len } else { start + m };
            start..end
        })
        .collect()
}
