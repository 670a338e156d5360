#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let newval = value as f64;
    newval
}

/// Offset of element `index` of `nr_of_elements` evenly spaced elements, centered on zero.
///
/// The offset is `(index - N/2 + 1/2) * spacing`. Hence, an even number of elements straddles zero
/// symmetrically while for an odd number the middle element is located exactly at zero.
#[must_use]
pub fn centered_offset(index: usize, nr_of_elements: usize, spacing: f64) -> f64 {
    (usize_to_f64(index) - usize_to_f64(nr_of_elements) / 2.0 + 0.5) * spacing
}
