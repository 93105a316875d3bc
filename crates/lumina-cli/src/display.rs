//! Text rendering for projection reports.
//!
//! Amounts are rendered rounded with thousands separators; bars use block
//! characters so reports stay readable in any terminal.

/// Format a number with thousands separators, rounded to the nearest whole
/// unit (1000000 -> "1,000,000")
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = value.round() as i128;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format a dollar amount ("$1,000")
pub fn format_currency(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", format_number(-value))
    } else {
        format!("${}", format_number(value))
    }
}

/// Format a fraction as a percentage (0.15 -> "15%")
pub fn format_percentage(fraction: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, fraction * 100.0)
}

/// Render a 20-block progress bar for a percentage in [0, 100]
pub fn progress_bar(percent: f64, label: &str) -> String {
    let filled = ((percent / 5.0).round() as i64).clamp(0, 20) as usize;
    let bar: String = "█".repeat(filled) + &"░".repeat(20 - filled);

    format!("{} [{}] {}%", label, bar, percent.round() as i64)
}

/// Render labeled values as horizontal bars scaled to the largest entry
pub fn comparison_chart(data: &[(&str, f64)]) -> String {
    let max = data.iter().fold(0.0f64, |acc, (_, v)| acc.max(*v));

    let mut chart = String::from("\n");
    for (label, value) in data {
        let bar_length = if max > 0.0 {
            ((value / max) * 50.0).round() as usize
        } else {
            0
        };
        chart.push_str(&format!(
            "{:<20} {} {}\n",
            label,
            "█".repeat(bar_length),
            format_currency(*value)
        ));
    }

    chart
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1_000.0), "1,000");
        assert_eq!(format_number(1_000_000.0), "1,000,000");
        assert_eq!(format_number(45_000_000.0), "45,000,000");
        assert_eq!(format_number(-12_345.6), "-12,346");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1_000.0), "$1,000");
        assert_eq!(format_currency(-500.0), "-$500");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.15, 0), "15%");
        assert_eq!(format_percentage(0.045, 1), "4.5%");
        assert_eq!(format_percentage(1.7, 1), "170.0%");
    }

    #[test]
    fn test_progress_bar() {
        let bar = progress_bar(50.0, "Circulation");

        assert!(bar.starts_with("Circulation ["));
        assert!(bar.ends_with("] 50%"));
        assert_eq!(bar.matches('█').count(), 10);
        assert_eq!(bar.matches('░').count(), 10);
    }

    #[test]
    fn test_progress_bar_clamps() {
        assert_eq!(progress_bar(250.0, "x").matches('█').count(), 20);
        assert_eq!(progress_bar(-10.0, "x").matches('█').count(), 0);
    }

    #[test]
    fn test_comparison_chart() {
        let chart = comparison_chart(&[("Casino", 400_000.0), ("DEX Fees", 50_000.0)]);

        let lines: Vec<&str> = chart.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("$400,000"));
        assert!(lines[1].contains("$50,000"));

        // Largest entry fills the full width
        assert_eq!(lines[0].matches('█').count(), 50);
        assert!(lines[1].matches('█').count() < 50);
    }

    #[test]
    fn test_comparison_chart_empty() {
        assert_eq!(comparison_chart(&[]), "\n");
    }
}
