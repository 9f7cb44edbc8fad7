//! Aggregate statistics math for dashboard and profile views.

/// Platform success rate as a whole percentage: `round(completed / total * 100)`.
///
/// Returns 0 when there are no projects at all.
pub fn success_rate(completed: i64, total: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_platform_is_zero() {
        assert_eq!(success_rate(0, 0), 0);
    }

    #[test]
    fn test_rounds_to_nearest_percent() {
        assert_eq!(success_rate(1, 3), 33);
        assert_eq!(success_rate(2, 3), 67);
        assert_eq!(success_rate(1, 2), 50);
        assert_eq!(success_rate(3, 3), 100);
    }
}
