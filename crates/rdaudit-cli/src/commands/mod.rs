pub mod analyze;
pub mod compare;

use serde::Serialize;

use rdaudit_core::SequenceReport;

/// One labeled battery report, in JSON-export shape.
#[derive(Serialize)]
pub struct LabeledReport<'a> {
    pub label: &'a str,
    #[serde(flatten)]
    pub report: &'a SequenceReport,
}

/// Print a per-source report block in the console format.
pub fn print_report(label: &str, report: &SequenceReport) {
    println!("\n================ {} ================\n", label.to_uppercase());
    println!("Samples:          {}", report.samples);
    println!("Bytes:            {}", report.bytes);
    println!("Shannon entropy:  {:.4} bits / 8.0", report.entropy_bits);
    println!(
        "Bit frequency:    0s: {}  1s: {}",
        report.bit_counts.zeros, report.bit_counts.ones
    );
    println!(
        "Autocorrelation:  {} (lag {})",
        format_autocorrelation(report.autocorrelation),
        report.lag
    );
    println!(
        "Chi-square:       statistic {:.4}, p-value {:.6}",
        report.chi_square.statistic, report.chi_square.p_value
    );
}

/// Format an autocorrelation coefficient, spelling out the NaN sentinel.
/// NaN means "inconclusive" (zero variance), not "uncorrelated".
pub fn format_autocorrelation(r: f64) -> String {
    if r.is_nan() {
        "undefined (zero variance)".to_string()
    } else {
        format!("{r:.6}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_formats_as_undefined() {
        assert_eq!(format_autocorrelation(f64::NAN), "undefined (zero variance)");
        assert_eq!(format_autocorrelation(0.25), "0.250000");
    }
}
