//! Formatting helpers for presenting summary values.

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

pub fn format_decimal(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

pub fn format_count(value: f64) -> String {
    format!("{}", value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_to_one_decimal() {
        assert_eq!(format_percent(66.666_666), "66.7%");
        assert_eq!(format_percent(33.333_333), "33.3%");
    }

    #[test]
    fn decimal_respects_requested_places() {
        assert_eq!(format_decimal(3.256, 2), "3.26");
        assert_eq!(format_decimal(3.0, 2), "3.00");
    }

    #[test]
    fn counts_render_as_integers() {
        assert_eq!(format_count(12.0), "12");
    }
}
