use std::path::Path;

use serde::Serialize;

use rdaudit_core::{
    HistogramRequest, Result, SampleSequence, ScatterRequest, paired_prefix, run_battery,
    write_histogram, write_scatter,
};

#[derive(Serialize)]
struct ComparisonExport<'a> {
    a: super::LabeledReport<'a>,
    b: super::LabeledReport<'a>,
    paired_samples: usize,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    file_a: &Path,
    file_b: &Path,
    label_a: &str,
    label_b: &str,
    lag: usize,
    pair_bound: usize,
    json: bool,
    plots: Option<&Path>,
) -> Result<()> {
    let seq_a = SampleSequence::from_file(file_a)?;
    let seq_b = SampleSequence::from_file(file_b)?;

    let report_a = run_battery(&seq_a, lag)?;
    let report_b = run_battery(&seq_b, lag)?;
    let pairs = paired_prefix(&seq_a, &seq_b, pair_bound)?;

    if json {
        let export = ComparisonExport {
            a: super::LabeledReport {
                label: label_a,
                report: &report_a,
            },
            b: super::LabeledReport {
                label: label_b,
                report: &report_b,
            },
            paired_samples: pairs.len(),
        };
        println!("{}", serde_json::to_string_pretty(&export).expect("report is serializable"));
    } else {
        super::print_report(label_a, &report_a);
        super::print_report(label_b, &report_b);
        println!("\n================ COMPARISON ================\n");
        println!("Paired samples:   {}", pairs.len());
    }

    if let Some(dir) = plots {
        std::fs::create_dir_all(dir)?;

        for (label, seq) in [(label_a, &seq_a), (label_b, &seq_b)] {
            let output = dir.join(format!("{label}_hist.svg"));
            write_histogram(&HistogramRequest {
                values: seq.values().to_vec(),
                title: format!("{label} Histogram"),
                output: output.clone(),
            })?;
            println!("Histogram saved to {}", output.display());
        }

        let scatter_out = dir.join(format!("scatter_{label_a}_{label_b}.svg"));
        let n_pairs = pairs.len();
        write_scatter(&ScatterRequest {
            pairs,
            title: format!("{label_a} vs {label_b} (First {n_pairs} Samples)"),
            x_label: label_a.to_string(),
            y_label: label_b.to_string(),
            output: scatter_out.clone(),
        })?;
        println!("Scatter plot saved to {}", scatter_out.display());
    }

    Ok(())
}
