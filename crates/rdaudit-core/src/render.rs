//! Stateless SVG rendering of battery artifacts.
//!
//! Each render call takes an explicit request (data + title + destination)
//! and produces a self-contained SVG document. There is no shared canvas or
//! process-wide figure state: rendering is a pure function of the request,
//! and `write_*` owns its output file for the duration of one call.

use std::path::PathBuf;

use crate::compare::PairedSamples;
use crate::error::Result;

/// Bins in the value histogram (full u64 range split evenly).
pub const HISTOGRAM_BINS: usize = 100;

const HIST_WIDTH: u32 = 800;
const HIST_HEIGHT: u32 = 500;
const SCATTER_SIZE: u32 = 600;
const MARGIN: u32 = 50;

/// A histogram of one sequence's word values, to be written as SVG.
#[derive(Debug, Clone)]
pub struct HistogramRequest {
    pub values: Vec<u64>,
    pub title: String,
    pub output: PathBuf,
}

/// A scatter plot of a paired prefix, to be written as SVG.
#[derive(Debug, Clone)]
pub struct ScatterRequest {
    pub pairs: PairedSamples,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub output: PathBuf,
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Bin index of a word value with the u64 range split into equal bins.
fn bin_of(value: u64) -> usize {
    ((value as u128 * HISTOGRAM_BINS as u128) >> 64) as usize
}

/// Fraction of the u64 range below a value, for axis placement.
fn unit_of(value: u64) -> f64 {
    value as f64 / u64::MAX as f64
}

/// Render a value histogram as a standalone SVG document.
pub fn render_histogram(req: &HistogramRequest) -> String {
    let mut bins = [0u64; HISTOGRAM_BINS];
    for &v in &req.values {
        bins[bin_of(v)] += 1;
    }
    let max_count = bins.iter().copied().max().unwrap_or(0).max(1);

    let plot_w = HIST_WIDTH - 2 * MARGIN;
    let plot_h = HIST_HEIGHT - 2 * MARGIN;
    let bar_w = plot_w as f64 / HISTOGRAM_BINS as f64;

    let mut svg = String::with_capacity(16 * 1024);
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{HIST_WIDTH}\" height=\"{HIST_HEIGHT}\" \
         viewBox=\"0 0 {HIST_WIDTH} {HIST_HEIGHT}\">\n"
    ));
    svg.push_str(&format!(
        "  <rect width=\"{HIST_WIDTH}\" height=\"{HIST_HEIGHT}\" fill=\"white\"/>\n"
    ));
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"30\" text-anchor=\"middle\" font-family=\"sans-serif\" \
         font-size=\"18\">{}</text>\n",
        HIST_WIDTH / 2,
        xml_escape(&req.title)
    ));

    for (i, &count) in bins.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let h = count as f64 / max_count as f64 * plot_h as f64;
        let x = MARGIN as f64 + i as f64 * bar_w;
        let y = (MARGIN + plot_h) as f64 - h;
        svg.push_str(&format!(
            "  <rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{:.2}\" height=\"{h:.2}\" \
             fill=\"steelblue\"/>\n",
            bar_w.max(1.0)
        ));
    }

    // Axes
    svg.push_str(&format!(
        "  <line x1=\"{MARGIN}\" y1=\"{0}\" x2=\"{1}\" y2=\"{0}\" stroke=\"black\"/>\n",
        MARGIN + plot_h,
        MARGIN + plot_w
    ));
    svg.push_str(&format!(
        "  <line x1=\"{MARGIN}\" y1=\"{MARGIN}\" x2=\"{MARGIN}\" y2=\"{}\" stroke=\"black\"/>\n",
        MARGIN + plot_h
    ));
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-family=\"sans-serif\" \
         font-size=\"13\">Value</text>\n",
        HIST_WIDTH / 2,
        HIST_HEIGHT - 10
    ));
    svg.push_str(&format!(
        "  <text x=\"15\" y=\"{}\" text-anchor=\"middle\" font-family=\"sans-serif\" \
         font-size=\"13\" transform=\"rotate(-90 15 {0})\">Frequency</text>\n",
        HIST_HEIGHT / 2
    ));
    svg.push_str("</svg>\n");
    svg
}

/// Render a paired-prefix scatter plot as a standalone SVG document.
pub fn render_scatter(req: &ScatterRequest) -> String {
    let plot = SCATTER_SIZE - 2 * MARGIN;

    let mut svg = String::with_capacity(32 * 1024);
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{SCATTER_SIZE}\" \
         height=\"{SCATTER_SIZE}\" viewBox=\"0 0 {SCATTER_SIZE} {SCATTER_SIZE}\">\n"
    ));
    svg.push_str(&format!(
        "  <rect width=\"{SCATTER_SIZE}\" height=\"{SCATTER_SIZE}\" fill=\"white\"/>\n"
    ));
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"30\" text-anchor=\"middle\" font-family=\"sans-serif\" \
         font-size=\"16\">{}</text>\n",
        SCATTER_SIZE / 2,
        xml_escape(&req.title)
    ));

    for (&x, &y) in req.pairs.a.iter().zip(&req.pairs.b) {
        let px = MARGIN as f64 + unit_of(x) * plot as f64;
        let py = (MARGIN + plot) as f64 - unit_of(y) * plot as f64;
        svg.push_str(&format!(
            "  <circle cx=\"{px:.2}\" cy=\"{py:.2}\" r=\"1\" fill=\"steelblue\"/>\n"
        ));
    }

    svg.push_str(&format!(
        "  <line x1=\"{MARGIN}\" y1=\"{0}\" x2=\"{1}\" y2=\"{0}\" stroke=\"black\"/>\n",
        MARGIN + plot,
        MARGIN + plot
    ));
    svg.push_str(&format!(
        "  <line x1=\"{MARGIN}\" y1=\"{MARGIN}\" x2=\"{MARGIN}\" y2=\"{}\" stroke=\"black\"/>\n",
        MARGIN + plot
    ));
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-family=\"sans-serif\" \
         font-size=\"13\">{}</text>\n",
        SCATTER_SIZE / 2,
        SCATTER_SIZE - 10,
        xml_escape(&req.x_label)
    ));
    svg.push_str(&format!(
        "  <text x=\"15\" y=\"{}\" text-anchor=\"middle\" font-family=\"sans-serif\" \
         font-size=\"13\" transform=\"rotate(-90 15 {0})\">{}</text>\n",
        SCATTER_SIZE / 2,
        xml_escape(&req.y_label)
    ));
    svg.push_str("</svg>\n");
    svg
}

/// Render and write a histogram to the request's destination.
pub fn write_histogram(req: &HistogramRequest) -> Result<()> {
    let svg = render_histogram(req);
    std::fs::write(&req.output, svg)?;
    log::debug!(
        "wrote histogram of {} values to {}",
        req.values.len(),
        req.output.display()
    );
    Ok(())
}

/// Render and write a scatter plot to the request's destination.
pub fn write_scatter(req: &ScatterRequest) -> Result<()> {
    let svg = render_scatter(req);
    std::fs::write(&req.output, svg)?;
    log::debug!(
        "wrote scatter of {} pairs to {}",
        req.pairs.len(),
        req.output.display()
    );
    Ok(())
}
