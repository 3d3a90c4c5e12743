//! Display labels for the layers of the BVLC reference CaffeNet.

use crate::errors::{ConversionError, ConversionResult};

/// Markdown labels indexed by `layer index - 1`.
pub static LAYER_NAMES: [&str; 23] = [
    "**conv1**",
    "**relu1**",
    "**pool1**",
    "**lrn1**",
    "**conv2**",
    "**relu2**",
    "**pool2**",
    "**lrn2**",
    "**conv3**",
    "**relu3**",
    "**conv4**",
    "**relu4**",
    "**conv5**",
    "**relu5**",
    "**pool5**",
    "**fc6**",
    "**relu6**",
    "**drop6**",
    "**fc7**",
    "**relu7**",
    "**drop7**",
    "**fc8**",
    "**prob**",
];

/// Look up the label of a 1-based layer index in `names`.
pub fn lookup<S: AsRef<str>>(names: &[S], index: i64) -> ConversionResult<&str> {
    usize::try_from(index)
        .ok()
        .and_then(|index| index.checked_sub(1))
        .and_then(|position| names.get(position))
        .map(|name| name.as_ref())
        .ok_or(ConversionError::LayerIndexOutOfRange {
            index,
            available: names.len(),
        })
}

/// Label of a 1-based CaffeNet layer index.
pub fn layer_name(index: i64) -> ConversionResult<&'static str> {
    lookup(&LAYER_NAMES, index)
}
