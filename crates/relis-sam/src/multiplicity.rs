/// Whether a field with this cardinality hint holds more than one value.
///
/// Only hints strictly greater than one are multiple; `0`, `1` and negative
/// hints are single-valued.
pub fn is_multiple(number_of_values: i64) -> bool {
    number_of_values > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_counts_above_one_are_multiple() {
        assert!(!is_multiple(0));
        assert!(!is_multiple(1));
        assert!(!is_multiple(-1));
        assert!(is_multiple(2));
        assert!(is_multiple(3));
    }
}
