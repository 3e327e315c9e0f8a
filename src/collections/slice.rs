//! Slice helpers.

/// Concatenates any number of slices into one pre-sized `Vec`.
pub fn concat<T: Clone>(inputs: &[&[T]]) -> Vec<T> {
    let total: usize = inputs.iter().map(|s| s.len()).sum();
    let mut result = Vec::with_capacity(total);
    for input in inputs {
        result.extend_from_slice(input);
    }
    result
}
