//! Text chart renderers
//!
//! Six independent renderers producing fixed-width monospace output. On
//! empty input five of them return the placeholder buffer; the histogram
//! alone rejects it. That asymmetry is part of the contract and must not
//! be unified.

use crate::buffer::ChartBuffer;
use crate::error::{ChartError, Result};
use crate::series::ChartData;
use calc_engine::stats;

/// Placeholder rendering returned on empty input
pub const NO_DATA_MESSAGE: &str = "No hay datos para mostrar";

const LINE_HEIGHT: usize = 10;
const PIE_SYMBOLS: [char; 6] = ['█', '▓', '▒', '░', '▄', '▀'];
const PIE_BAR_LENGTH: usize = 30;
const HISTOGRAM_BAR_LENGTH: usize = 40;
const SUMMARY_BAR_LENGTH: usize = 30;

/// Fixed-width text chart renderer
///
/// `width` is the column budget; value bars scale to `width - 10`.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    width: usize,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartRenderer {
    pub const DEFAULT_WIDTH: usize = 80;

    pub fn new() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
        }
    }

    /// Renderer with a custom column budget
    pub fn with_width(width: usize) -> Self {
        Self { width }
    }

    /// Horizontal bar chart: one `█` bar per value, scaled to the maximum
    pub fn bar(&self, data: &ChartData, title: Option<&str>) -> Result<ChartBuffer> {
        let values = data.values();
        if values.is_empty() {
            return Ok(ChartBuffer::from_text(NO_DATA_MESSAGE));
        }

        let title = title.unwrap_or("Gráfica de Barras");
        let max_value = fold_max(values);
        let max_bar_length = self.width.saturating_sub(10);

        let mut graph = title_block(title);
        for (i, value) in values.iter().enumerate() {
            let bar = "█".repeat(scaled(*value, max_value, max_bar_length));
            let label = data.label(i, "Dato");
            graph.push_str(&format!("{:<15} {} {}\n", label, bar, value));
        }

        Ok(ChartBuffer::from_text(graph))
    }

    /// Line chart: 10-row matrix with point markers and vertical connectors
    ///
    /// Values are normalized into [0,1] against the series range; the plot
    /// is truncated to `width - 10` columns, but the bottom index axis
    /// still lists every input index.
    pub fn line(&self, data: &ChartData, title: Option<&str>) -> Result<ChartBuffer> {
        let values = data.values();
        if values.is_empty() {
            return Ok(ChartBuffer::from_text(NO_DATA_MESSAGE));
        }

        let title = title.unwrap_or("Gráfica de Líneas");
        let max_value = fold_max(values);
        let min_value = fold_min(values);
        // a flat series falls back to a unit range; rows and axis labels share it
        let range = if max_value == min_value {
            1.0
        } else {
            max_value - min_value
        };

        let width = values.len().min(self.width.saturating_sub(10));
        let mut matrix = vec![vec![' '; width]; LINE_HEIGHT];

        // one marker per column
        for (i, value) in values.iter().take(width).enumerate() {
            matrix[row_for(*value, min_value, range)][i] = '●';
        }

        // vertical connectors between consecutive columns
        for i in 1..width {
            let prev_y = row_for(values[i - 1], min_value, range);
            let curr_y = row_for(values[i], min_value, range);
            let (top, bottom) = (prev_y.min(curr_y), prev_y.max(curr_y));

            for row in matrix.iter_mut().take(bottom + 1).skip(top) {
                if row[i] == ' ' {
                    row[i] = '─';
                }
            }
        }

        let mut graph = title_block(title);
        for (y, row) in matrix.iter().enumerate() {
            let axis_value = max_value - y as f64 * range / (LINE_HEIGHT - 1) as f64;
            let cells: String = row.iter().collect();
            graph.push_str(&format!("{:>6.1} │ {}\n", axis_value, cells));
        }

        graph.push_str(&format!("      └{}\n", "─".repeat(width)));
        let index_axis = (0..values.len())
            .map(|i| format!("{:>2}", i))
            .collect::<Vec<_>>()
            .join(" ");
        graph.push_str(&format!("        {}\n", index_axis));

        Ok(ChartBuffer::from_text(graph))
    }

    /// Text pie chart: shaded bars proportional to each value's share
    ///
    /// Cycles a palette of six block-shading symbols by index.
    pub fn pie(&self, data: &ChartData, title: Option<&str>) -> Result<ChartBuffer> {
        let values = data.values();
        if values.is_empty() {
            return Ok(ChartBuffer::from_text(NO_DATA_MESSAGE));
        }

        let title = title.unwrap_or("Gráfica Circular");
        let total: f64 = values.iter().sum();

        let mut graph = title_block(title);
        for (i, value) in values.iter().enumerate() {
            let percentage = value / total * 100.0;
            let symbol = PIE_SYMBOLS[i % PIE_SYMBOLS.len()];
            let bar = symbol
                .to_string()
                .repeat(scaled(*value, total, PIE_BAR_LENGTH));
            let label = data.label(i, "Categoría");
            graph.push_str(&format!(
                "{:<15} {} {:.1}% ({})\n",
                label, bar, percentage, value
            ));
        }
        graph.push_str(&format!("\nTotal: {}\n", total));

        Ok(ChartBuffer::from_text(graph))
    }

    /// Frequency histogram over uniform bins
    ///
    /// Bin count is min(10, ceil(sqrt(n))); the maximum value is clamped
    /// into the last bin. The only renderer that rejects empty input
    /// instead of returning the placeholder buffer.
    pub fn histogram(&self, values: &[f64], title: Option<&str>) -> Result<ChartBuffer> {
        if values.is_empty() {
            return Err(ChartError::empty_input("histogram of an empty series"));
        }

        let title = title.unwrap_or("Histograma");
        let min = fold_min(values);
        let max = fold_max(values);
        let num_bins = 10.min((values.len() as f64).sqrt().ceil() as usize);
        let bin_size = (max - min) / num_bins as f64;

        let mut bins = vec![0usize; num_bins];
        for value in values {
            // a degenerate series (max == min) counts into the first bin
            let index = if bin_size > 0.0 {
                (((value - min) / bin_size).floor() as usize).min(num_bins - 1)
            } else {
                0
            };
            bins[index] += 1;
        }

        let max_bin = bins.iter().copied().max().unwrap_or(0);

        let mut graph = title_block(title);
        for (i, bin) in bins.iter().enumerate() {
            let start = min + i as f64 * bin_size;
            let end = min + (i + 1) as f64 * bin_size;
            let label = format!("{:.1}-{:.1}", start, end);
            let bar = "█".repeat(scaled(*bin as f64, max_bin as f64, HISTOGRAM_BAR_LENGTH));
            graph.push_str(&format!("{:<15} {} {}\n", label, bar, bin));
        }

        graph.push_str(&format!("\nRango: {:.2} - {:.2}\n", min, max));
        graph.push_str(&format!("Total de datos: {}\n", values.len()));

        Ok(ChartBuffer::from_text(graph))
    }

    /// Scatter listing: per-point values plus a max/min/range summary
    ///
    /// No 2D grid; points are listed one per line.
    pub fn scatter(&self, data: &ChartData, title: Option<&str>) -> Result<ChartBuffer> {
        let values = data.values();
        if values.is_empty() {
            return Ok(ChartBuffer::from_text(NO_DATA_MESSAGE));
        }

        let title = title.unwrap_or("Gráfica de Dispersión");
        let mut graph = title_block(title);

        graph.push_str("Datos de dispersión:\n");
        for (i, value) in values.iter().enumerate() {
            graph.push_str(&format!("{}: {}\n", data.label(i, "Punto"), value));
        }

        let max_value = fold_max(values);
        let min_value = fold_min(values);
        graph.push_str("\nEstadísticas:\n");
        graph.push_str(&format!("Máximo: {}\n", max_value));
        graph.push_str(&format!("Mínimo: {}\n", min_value));
        graph.push_str(&format!("Rango: {}\n", max_value - min_value));

        Ok(ChartBuffer::from_text(graph))
    }

    /// Descriptive statistics summary with proportional bars
    ///
    /// Uses the engine's sample formulas, so at least two points are
    /// required; an empty series yields the placeholder buffer.
    pub fn summary(&self, values: &[f64], title: Option<&str>) -> Result<ChartBuffer> {
        if values.is_empty() {
            return Ok(ChartBuffer::from_text(NO_DATA_MESSAGE));
        }

        let title = title.unwrap_or("Estadísticas Descriptivas");
        let rows = [
            ("Media", stats::mean(values)?),
            ("Mediana", stats::median(values)?),
            ("Desv. Est.", stats::std_dev(values)?),
            ("Varianza", stats::variance(values)?),
            ("Máximo", stats::max(values)?),
            ("Mínimo", stats::min(values)?),
        ];

        let max_stat = rows
            .iter()
            .map(|(_, value)| *value)
            .fold(f64::NEG_INFINITY, f64::max);

        let mut graph = title_block(title);
        for (name, value) in rows {
            let bar = "█".repeat(scaled(value, max_stat, SUMMARY_BAR_LENGTH));
            graph.push_str(&format!("{:<12} {} {:.2}\n", name, bar, value));
        }
        graph.push_str(&format!("\nTotal de datos: {}\n", values.len()));

        Ok(ChartBuffer::from_text(graph))
    }
}

/// Title followed by a matching `=` underline and a blank line
fn title_block(title: &str) -> String {
    format!("\n{}\n{}\n\n", title, "=".repeat(title.chars().count()))
}

/// Proportional bar length
///
/// Non-finite or negative ratios render an empty bar; the result never
/// exceeds the bar budget.
fn scaled(value: f64, max: f64, max_length: usize) -> usize {
    let ratio = value / max;
    if !ratio.is_finite() || ratio <= 0.0 {
        return 0;
    }
    ((ratio * max_length as f64).round() as usize).min(max_length)
}

/// Row index for a value: 0 is the top of the plot
fn row_for(value: f64, min: f64, range: f64) -> usize {
    let normalized = (value - min) / range;
    let row = ((1.0 - normalized) * (LINE_HEIGHT - 1) as f64).round();
    row.clamp(0.0, (LINE_HEIGHT - 1) as f64) as usize
}

fn fold_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn fold_min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}
