//! Canvas 2D depth chart.
//!
//! Every update throws the previous [`DepthChart`] away and draws a fresh one;
//! the geometry step is pure so it can be checked without a canvas.

use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{ChartDataPoint, DepthSeries};
use crate::log_debug;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const COMPONENT: LogComponent = LogComponent::Infrastructure("DepthChart");

const BID_STROKE: &str = "green";
const BID_FILL: &str = "rgba(0, 200, 0, 0.5)";
const ASK_STROKE: &str = "red";
const ASK_FILL: &str = "rgba(255, 0, 0, 0.5)";
const TEXT: &str = "#fff";
const TICKS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl ChartLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, margin_left: 64.0, margin_right: 16.0, margin_top: 36.0, margin_bottom: 48.0 }
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.margin_left - self.margin_right).max(1.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.margin_top - self.margin_bottom).max(1.0)
    }

    /// Pixel row of the zero-size baseline
    pub fn baseline(&self) -> f64 {
        self.margin_top + self.plot_height()
    }
}

/// Point in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Axis tick: pixel position and the data value it labels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tick {
    pub position: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepthGeometry {
    pub bids: Vec<PlotPoint>,
    pub asks: Vec<PlotPoint>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

/// Linear price axis over both sides, size axis from zero to the deepest side
pub fn compute_geometry(series: &DepthSeries, layout: &ChartLayout) -> Option<DepthGeometry> {
    let (mut lo, mut hi) = series.price_bounds()?;
    if (hi - lo).abs() < f64::EPSILON {
        lo -= 1.0;
        hi += 1.0;
    }
    let y_max = match series.max_cumulative() {
        m if m > 0.0 => m,
        _ => 1.0,
    };

    let to_px = |p: &ChartDataPoint| PlotPoint {
        x: layout.margin_left + (p.x - lo) / (hi - lo) * layout.plot_width(),
        y: layout.baseline() - p.y / y_max * layout.plot_height(),
    };

    let x_ticks = (0..TICKS)
        .map(|i| {
            let t = i as f64 / (TICKS - 1) as f64;
            Tick { position: layout.margin_left + t * layout.plot_width(), value: lo + t * (hi - lo) }
        })
        .collect();
    let y_ticks = (0..TICKS)
        .map(|i| {
            let t = i as f64 / (TICKS - 1) as f64;
            Tick { position: layout.baseline() - t * layout.plot_height(), value: t * y_max }
        })
        .collect();

    Some(DepthGeometry {
        bids: series.bids.iter().map(to_px).collect(),
        asks: series.asks.iter().map(to_px).collect(),
        x_ticks,
        y_ticks,
    })
}

/// One drawn chart bound to a canvas. Dispose before drawing the next one.
pub struct DepthChart {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    layout: ChartLayout,
    geometry: Option<DepthGeometry>,
}

impl DepthChart {
    pub fn draw(canvas: HtmlCanvasElement, series: &DepthSeries) -> AppResult<Self> {
        // Match the backing store to the laid-out size so lines stay crisp
        let (w, h) = (canvas.client_width(), canvas.client_height());
        if w > 0 && h > 0 {
            canvas.set_width(w as u32);
            canvas.set_height(h as u32);
        }
        let layout = ChartLayout::new(canvas.width() as f64, canvas.height() as f64);

        let context = canvas
            .get_context("2d")
            .map_err(|e| AppError::Rendering(format!("get_context failed: {e:?}")))?
            .ok_or_else(|| AppError::Rendering("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::Rendering("not a 2d context".to_string()))?;

        let geometry = compute_geometry(series, &layout);
        let chart = Self { canvas, context, layout, geometry };
        chart.paint()?;
        Ok(chart)
    }

    pub fn geometry(&self) -> Option<&DepthGeometry> {
        self.geometry.as_ref()
    }

    fn paint(&self) -> AppResult<()> {
        let ctx = &self.context;
        ctx.clear_rect(0.0, 0.0, self.layout.width, self.layout.height);

        let Some(geometry) = &self.geometry else {
            ctx.set_fill_style_str(TEXT);
            ctx.set_text_align("center");
            ctx.fill_text("Waiting for order book…", self.layout.width / 2.0, self.layout.height / 2.0)
                .map_err(|e| AppError::Rendering(format!("{e:?}")))?;
            return Ok(());
        };

        self.paint_side(&geometry.bids, BID_STROKE, BID_FILL);
        self.paint_side(&geometry.asks, ASK_STROKE, ASK_FILL);
        self.paint_axes(geometry)?;
        self.paint_legend()?;
        Ok(())
    }

    fn paint_side(&self, points: &[PlotPoint], stroke: &str, fill: &str) {
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return;
        };
        let ctx = &self.context;
        let baseline = self.layout.baseline();

        ctx.begin_path();
        ctx.move_to(first.x, baseline);
        for p in points {
            ctx.line_to(p.x, p.y);
        }
        ctx.line_to(last.x, baseline);
        ctx.close_path();
        ctx.set_fill_style_str(fill);
        ctx.fill();

        ctx.begin_path();
        ctx.move_to(first.x, first.y);
        for p in &points[1..] {
            ctx.line_to(p.x, p.y);
        }
        ctx.set_stroke_style_str(stroke);
        ctx.set_line_width(2.0);
        ctx.stroke();
    }

    fn paint_axes(&self, geometry: &DepthGeometry) -> AppResult<()> {
        let ctx = &self.context;
        let l = &self.layout;
        let err = |e: JsValue| AppError::Rendering(format!("{e:?}"));

        ctx.set_stroke_style_str("rgba(255, 255, 255, 0.2)");
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(l.margin_left, l.margin_top);
        ctx.line_to(l.margin_left, l.baseline());
        ctx.line_to(l.margin_left + l.plot_width(), l.baseline());
        ctx.stroke();

        ctx.set_fill_style_str(TEXT);
        ctx.set_font("11px Inter, sans-serif");
        ctx.set_text_align("center");
        for tick in &geometry.x_ticks {
            ctx.fill_text(&format!("{:.0}", tick.value), tick.position, l.baseline() + 16.0).map_err(err)?;
        }
        ctx.set_text_align("right");
        for tick in &geometry.y_ticks {
            ctx.fill_text(&format!("{:.2}", tick.value), l.margin_left - 6.0, tick.position + 4.0).map_err(err)?;
        }

        ctx.set_font("12px Inter, sans-serif");
        ctx.set_text_align("center");
        ctx.fill_text("Price (USD)", l.margin_left + l.plot_width() / 2.0, l.height - 8.0).map_err(err)?;

        ctx.save();
        ctx.translate(14.0, l.margin_top + l.plot_height() / 2.0).map_err(err)?;
        ctx.rotate(-std::f64::consts::FRAC_PI_2).map_err(err)?;
        ctx.fill_text("Cumulative Size (BTC)", 0.0, 0.0).map_err(err)?;
        ctx.restore();
        Ok(())
    }

    fn paint_legend(&self) -> AppResult<()> {
        let ctx = &self.context;
        let center = self.layout.width / 2.0;
        ctx.set_font("12px Inter, sans-serif");
        ctx.set_text_align("left");
        for (offset, label, fill) in [(-60.0, "Bids", BID_FILL), (20.0, "Asks", ASK_FILL)] {
            ctx.set_fill_style_str(fill);
            ctx.fill_rect(center + offset, 12.0, 24.0, 10.0);
            ctx.set_fill_style_str(TEXT);
            ctx.fill_text(label, center + offset + 30.0, 21.0)
                .map_err(|e| AppError::Rendering(format!("{e:?}")))?;
        }
        Ok(())
    }

    /// Wipe the canvas and hand it back for the next chart
    pub fn dispose(self) -> HtmlCanvasElement {
        self.context.clear_rect(0.0, 0.0, self.layout.width, self.layout.height);
        self.canvas
    }
}

/// Keeps at most one live [`DepthChart`] and replaces it on every update
#[derive(Default)]
pub struct DepthChartRenderer {
    current: Option<DepthChart>,
    generation: u64,
}

impl DepthChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of charts constructed so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current(&self) -> Option<&DepthChart> {
        self.current.as_ref()
    }

    pub fn update(&mut self, canvas: HtmlCanvasElement, series: &DepthSeries) -> AppResult<()> {
        if let Some(previous) = self.current.take() {
            previous.dispose();
        }
        self.current = Some(DepthChart::draw(canvas, series)?);
        self.generation += 1;
        log_debug!(
            COMPONENT,
            "chart #{} drawn ({} bid / {} ask levels)",
            self.generation,
            series.bids.len(),
            series.asks.len()
        );
        Ok(())
    }

    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            previous.dispose();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> DepthSeries {
        DepthSeries {
            bids: vec![ChartDataPoint { x: 100.0, y: 2.0 }, ChartDataPoint { x: 99.0, y: 5.0 }],
            asks: vec![ChartDataPoint { x: 101.0, y: 1.0 }, ChartDataPoint { x: 103.0, y: 4.0 }],
        }
    }

    #[test]
    fn geometry_spans_plot_area() {
        let layout = ChartLayout::new(464.0, 284.0);
        let g = compute_geometry(&series(), &layout).unwrap();
        // lowest bid sits on the left edge at full height
        assert_eq!(g.bids[1], PlotPoint { x: layout.margin_left, y: layout.margin_top });
        // highest ask sits on the right edge
        assert_eq!(g.asks[1].x, layout.margin_left + layout.plot_width());
        assert_eq!(g.x_ticks.first().unwrap().value, 99.0);
        assert_eq!(g.y_ticks.last().unwrap().value, 5.0);
    }

    #[test]
    fn deeper_levels_are_drawn_higher() {
        let g = compute_geometry(&series(), &ChartLayout::new(400.0, 300.0)).unwrap();
        assert!(g.bids[1].y < g.bids[0].y);
        assert!(g.asks[1].y < g.asks[0].y);
    }

    #[test]
    fn empty_series_has_no_geometry() {
        assert!(compute_geometry(&DepthSeries::default(), &ChartLayout::new(400.0, 300.0)).is_none());
    }

    #[test]
    fn single_price_does_not_divide_by_zero() {
        let one = DepthSeries { bids: vec![ChartDataPoint { x: 50.0, y: 0.0 }], asks: Vec::new() };
        let g = compute_geometry(&one, &ChartLayout::new(400.0, 300.0)).unwrap();
        assert!(g.bids[0].x.is_finite() && g.bids[0].y.is_finite());
    }
}
