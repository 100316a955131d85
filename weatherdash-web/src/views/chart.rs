//! 24-hour temperature area chart, drawn as inline SVG.

use maud::{Markup, html};
use std::fmt::Write;
use weatherdash_core::HourlyPoint;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 300.0;
const MARGIN_TOP: f64 = 10.0;
const MARGIN_RIGHT: f64 = 10.0;
const MARGIN_BOTTOM: f64 = 28.0;
const MARGIN_LEFT: f64 = 40.0;
const STROKE: &str = "#60a5fa";

/// Labels skipped between two shown x-axis labels.
pub const X_LABEL_INTERVAL: usize = 2;

/// Plot area in SVG units plus the value domain it maps.
#[derive(Debug, Clone, Copy)]
struct Plot {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    lo: f64,
    hi: f64,
}

impl Plot {
    fn new(lo: f64, hi: f64) -> Self {
        Self {
            left: MARGIN_LEFT,
            right: WIDTH - MARGIN_RIGHT,
            top: MARGIN_TOP,
            bottom: HEIGHT - MARGIN_BOTTOM,
            lo,
            hi,
        }
    }

    fn x(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return (self.left + self.right) / 2.0;
        }
        self.left + (self.right - self.left) * index as f64 / (count - 1) as f64
    }

    fn y(&self, value: f64) -> f64 {
        let span = self.hi - self.lo;
        if span <= 0.0 {
            return (self.top + self.bottom) / 2.0;
        }
        self.bottom - (value - self.lo) / span * (self.bottom - self.top)
    }
}

/// Indices of the points that get an x-axis label.
pub fn x_label_indices(count: usize) -> Vec<usize> {
    (0..count).step_by(X_LABEL_INTERVAL + 1).collect()
}

/// Whole-degree y-axis ticks covering the series, on a 1/2/5 x 10^n step.
pub fn y_ticks(series: &[HourlyPoint]) -> Vec<i64> {
    let Some(min) = series.iter().map(|p| p.temp).min() else {
        return Vec::new();
    };
    let max = series.iter().map(|p| p.temp).max().unwrap_or(min);

    let (lo, hi) = if min == max { (min - 1, max + 1) } else { (min, max) };
    let step = nice_step((hi - lo) as f64 / 4.0);
    let start = (lo as f64 / step).floor() * step;
    let end = (hi as f64 / step).ceil() * step;

    let mut ticks = Vec::new();
    let mut value = start;
    while value <= end + step / 2.0 {
        ticks.push(value.round() as i64);
        value += step;
    }
    ticks
}

fn nice_step(raw: f64) -> f64 {
    if raw.is_nan() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    (nice * magnitude).max(1.0)
}

/// Monotone cubic curve through `points` (x strictly increasing); never overshoots between samples.
pub fn monotone_path(points: &[(f64, f64)]) -> String {
    let mut d = String::new();
    let Some(&(x0, y0)) = points.first() else {
        return d;
    };
    let _ = write!(d, "M{x0:.1},{y0:.1}");

    match points.len() {
        1 => return d,
        2 => {
            let (x1, y1) = points[1];
            let _ = write!(d, "L{x1:.1},{y1:.1}");
            return d;
        }
        _ => {}
    }

    let tangents = monotone_tangents(points);
    for (k, pair) in points.windows(2).enumerate() {
        let ((xa, ya), (xb, yb)) = (pair[0], pair[1]);
        let third = (xb - xa) / 3.0;
        let _ = write!(
            d,
            "C{:.1},{:.1},{:.1},{:.1},{xb:.1},{yb:.1}",
            xa + third,
            ya + tangents[k] * third,
            xb - third,
            yb - tangents[k + 1] * third,
        );
    }
    d
}

fn monotone_tangents(points: &[(f64, f64)]) -> Vec<f64> {
    let n = points.len();
    let widths: Vec<f64> = points.windows(2).map(|p| p[1].0 - p[0].0).collect();
    let slopes: Vec<f64> = points
        .windows(2)
        .zip(&widths)
        .map(|(p, h)| if *h == 0.0 { 0.0 } else { (p[1].1 - p[0].1) / h })
        .collect();

    let mut tangents = vec![0.0; n];
    for k in 1..n - 1 {
        let (s0, s1) = (slopes[k - 1], slopes[k]);
        let (h0, h1) = (widths[k - 1], widths[k]);
        if s0 * s1 <= 0.0 {
            continue;
        }
        let p = (s0 * h1 + s1 * h0) / (h0 + h1);
        tangents[k] = (s0.signum() + s1.signum()) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    }
    tangents[0] = endpoint_tangent(slopes[0], tangents[1]);
    tangents[n - 1] = endpoint_tangent(slopes[n - 2], tangents[n - 2]);
    tangents
}

fn endpoint_tangent(slope: f64, neighbour: f64) -> f64 {
    let t = (3.0 * slope - neighbour) / 2.0;
    // keep the end segment from overshooting its own secant
    if t * slope <= 0.0 { 0.0 } else { t }
}

pub fn render(series: &[HourlyPoint]) -> Markup {
    html! {
        section.card.chart-card {
            h3 { "24-Hour Temperature Forecast" }
            @if series.is_empty() {
                p.muted { "No hourly data available." }
            } @else {
                (area_chart(series))
            }
        }
    }
}

fn area_chart(series: &[HourlyPoint]) -> Markup {
    let ticks = y_ticks(series);
    let lo = ticks.first().copied().unwrap_or_default() as f64;
    let hi = ticks.last().copied().unwrap_or_default() as f64;
    let plot = Plot::new(lo, hi);
    let count = series.len();

    let points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, p)| (plot.x(i, count), plot.y(p.temp as f64)))
        .collect();

    let line = monotone_path(&points);
    let area = match (points.first(), points.last()) {
        (Some(first), Some(last)) => format!(
            "{line}L{:.1},{:.1}L{:.1},{:.1}Z",
            last.0, plot.bottom, first.0, plot.bottom
        ),
        _ => String::new(),
    };
    let hover_width = if count > 1 {
        (plot.right - plot.left) / (count - 1) as f64
    } else {
        plot.right - plot.left
    };

    html! {
        svg.chart xmlns="http://www.w3.org/2000/svg" viewBox={ "0 0 " (WIDTH) " " (HEIGHT) }
            preserveAspectRatio="none" role="img" aria-label="Hourly temperature" {
            defs {
                linearGradient id="colorTemp" x1="0" y1="0" x2="0" y2="1" {
                    stop offset="5%" stop-color=(STROKE) stop-opacity="0.3" {}
                    stop offset="95%" stop-color=(STROKE) stop-opacity="0" {}
                }
            }
            g.y-axis {
                @for tick in &ticks {
                    text x=(format!("{:.1}", plot.left - 8.0)) y=(format!("{:.1}", plot.y(*tick as f64) + 4.0)) text-anchor="end" {
                        (tick) "°"
                    }
                }
            }
            g.x-axis {
                @for i in x_label_indices(count) {
                    text x=(format!("{:.1}", points[i].0)) y=(format!("{:.1}", HEIGHT - 8.0)) text-anchor="middle" {
                        (series[i].time)
                    }
                }
            }
            path.area d=(area) fill="url(#colorTemp)" stroke="none" {}
            path.line d=(line) fill="none" stroke=(STROKE) stroke-width="3" {}
            g.points {
                @for (point, (x, y)) in series.iter().zip(&points) {
                    g.point {
                        title { (point.time) ": " (point.temp) "°C" }
                        rect x=(format!("{:.1}", x - hover_width / 2.0)) y=(format!("{:.1}", plot.top))
                            width=(format!("{hover_width:.1}")) height=(format!("{:.1}", plot.bottom - plot.top)) {}
                        circle cx=(format!("{x:.1}")) cy=(format!("{y:.1}")) r="4" {}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(temps: &[i64]) -> Vec<HourlyPoint> {
        temps
            .iter()
            .enumerate()
            .map(|(i, t)| HourlyPoint {
                time: format!("{} PM", i + 1),
                temp: *t,
            })
            .collect()
    }

    #[test]
    fn every_third_label_is_shown() {
        assert_eq!(x_label_indices(24), vec![0, 3, 6, 9, 12, 15, 18, 21]);
        assert_eq!(x_label_indices(4), vec![0, 3]);
        assert!(x_label_indices(0).is_empty());
    }

    #[test]
    fn ticks_cover_range_on_nice_steps() {
        assert_eq!(y_ticks(&series(&[24, 27, 33])), vec![20, 25, 30, 35]);
        assert_eq!(y_ticks(&series(&[28, 28])), vec![27, 28, 29]);
        assert_eq!(y_ticks(&series(&[-3, 2])), vec![-4, -2, 0, 2]);
        assert!(y_ticks(&[]).is_empty());
    }

    #[test]
    fn monotone_curve_does_not_overshoot() {
        let points = [(0.0, 100.0), (10.0, 50.0), (20.0, 50.0), (30.0, 0.0)];
        let d = monotone_path(&points);

        assert!(d.starts_with("M0.0,100.0"));
        assert_eq!(d.matches('C').count(), 3);

        let numbers: Vec<f64> = d
            .trim_start_matches('M')
            .split(['C', ','])
            .filter_map(|s| s.parse().ok())
            .collect();
        // every y coordinate (odd positions) stays inside the data range
        for y in numbers.iter().skip(1).step_by(2) {
            assert!((0.0..=100.0).contains(y), "y = {y}");
        }
    }

    #[test]
    fn short_paths() {
        assert_eq!(monotone_path(&[]), "");
        assert_eq!(monotone_path(&[(1.0, 2.0)]), "M1.0,2.0");
        assert_eq!(monotone_path(&[(1.0, 2.0), (3.0, 4.0)]), "M1.0,2.0L3.0,4.0");
    }

    #[test]
    fn render_includes_tooltips_and_degree_ticks() {
        let html = render(&series(&[24, 27, 33])).into_string();

        assert!(html.contains("24-Hour Temperature Forecast"));
        assert!(html.contains("<title>2 PM: 27°C</title>"));
        assert!(html.contains("30°"));
        assert!(html.contains(r#"fill="url(#colorTemp)""#));
        assert!(html.contains(">1 PM</text>"));
        assert!(!html.contains(">2 PM</text>"));
    }

    #[test]
    fn render_empty_series() {
        let html = render(&[]).into_string();
        assert!(html.contains("No hourly data available."));
        assert!(!html.contains("<svg"));
    }
}
