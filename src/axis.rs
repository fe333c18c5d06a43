//! Independent-variable axes shared by several charts.

/// Insert counts of the insert / GUI benchmarks: `1, 11, 21, …, 991`.
#[must_use]
pub fn insert_counts() -> Vec<f64> {
    stepped(1, 1001, 10)
}

/// Piece-table node amounts of the undo / redo benchmark: `1000, …, 99000`.
#[must_use]
pub fn node_amounts() -> Vec<f64> {
    stepped(1000, 100_000, 1000)
}

/// Positions of the search result in the text: `0, 1000, …, 99000`.
#[must_use]
pub fn search_positions() -> Vec<f64> {
    stepped(0, 100_000, 1000)
}

/// Half-open `start..end` in steps of `step`, as floats.
fn stepped(start: u32, end: u32, step: usize) -> Vec<f64> {
    (start..end).step_by(step).map(f64::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_counts() {
        let axis = insert_counts();
        assert_eq!(axis.len(), 100);
        assert_eq!(axis[0], 1.0);
        assert_eq!(axis[1], 11.0);
        assert_eq!(axis[99], 991.0);
    }

    #[test]
    fn test_node_amounts() {
        let axis = node_amounts();
        assert_eq!(axis.len(), 99);
        assert_eq!(axis[0], 1000.0);
        assert_eq!(axis[98], 99000.0);
    }

    #[test]
    fn test_search_positions() {
        let axis = search_positions();
        assert_eq!(axis.len(), 100);
        assert_eq!(axis[0], 0.0);
        assert_eq!(axis[99], 99000.0);
    }
}
