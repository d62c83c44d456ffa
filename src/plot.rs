//! PNG figure export for waveforms and correlation functions.

use std::path::Path;

use plotters::prelude::*;

/// Renders `y` against `x` as a single line chart.
pub fn line_chart(
    path: &Path,
    title: &str,
    x: &[f64],
    y: &[f64],
) -> Result<(), Box<dyn std::error::Error>> {
    let n = x.len().min(y.len());
    if n == 0 {
        return Err("nothing to plot".into());
    }
    let (x_lo, x_hi) = padded_bounds(&x[..n]);
    let (y_lo, y_hi) = padded_bounds(&y[..n]);

    let root = BitMapBackend::new(path, (1024, 576)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart.configure_mesh().draw()?;
    chart.draw_series(LineSeries::new(
        x[..n].iter().copied().zip(y[..n].iter().copied()),
        &BLUE,
    ))?;

    root.present()?;
    Ok(())
}

fn padded_bounds(v: &[f64]) -> (f64, f64) {
    let (lo, hi) = v
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        });
    let pad = 0.05 * (hi - lo).max(1e-9);
    (lo - pad, hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_a_png() {
        let path = std::env::temp_dir().join("rustyprn_plot_test.png");
        let x: Vec<f64> = (0..100).map(|i| i as f64 * 0.01).collect();
        let y: Vec<f64> = x.iter().map(|&t| (t * 12.0).sin()).collect();
        line_chart(&path, "test waveform", &x, &y).unwrap();
        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn empty_series_is_rejected() {
        let path = std::env::temp_dir().join("rustyprn_never_written.png");
        assert!(line_chart(&path, "empty", &[], &[]).is_err());
    }
}
