use std::path::Path;

use rdaudit_core::{HistogramRequest, Result, SampleSequence, run_battery, write_histogram};

pub fn run(
    file: &Path,
    label: &str,
    lag: usize,
    json: bool,
    plots: Option<&Path>,
) -> Result<()> {
    let seq = SampleSequence::from_file(file)?;
    let report = run_battery(&seq, lag)?;

    if json {
        let labeled = super::LabeledReport {
            label,
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&labeled).expect("report is serializable"));
    } else {
        super::print_report(label, &report);
    }

    if let Some(dir) = plots {
        std::fs::create_dir_all(dir)?;
        let output = dir.join(format!("{label}_hist.svg"));
        write_histogram(&HistogramRequest {
            values: seq.values().to_vec(),
            title: format!("{label} Histogram"),
            output: output.clone(),
        })?;
        println!("\nHistogram saved to {}", output.display());
    }

    Ok(())
}
