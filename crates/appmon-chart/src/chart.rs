//! Bar chart model and layout.
//!
//! A chart is laid out top to bottom as: centered title lines, the plot area
//! (Y axis on the left with gridlines at every tick), then one label per bar.
//! The value axis always includes zero; negative values hang below the
//! baseline.

use appmon_core::error::{AppMonError, Result};
use appmon_core::Metric;
use image::Rgb;

use crate::font;
use crate::render::{Canvas, Color, AXIS, BLACK, GRID, WHITE};

pub const CHART_WIDTH: u32 = 1024;
pub const CHART_HEIGHT: u32 = 512;
pub const BAR_WIDTH: u32 = 60;

const TITLE_SCALE: u32 = 2;
const LABEL_SCALE: u32 = 1;
const PAD: i64 = 10;
const TICK_GAP: i64 = 8;
const MAX_TICKS: usize = 64;

const PALETTE: [Color; 6] = [
    Rgb([0, 116, 217]),
    Rgb([0, 217, 101]),
    Rgb([217, 0, 116]),
    Rgb([217, 210, 0]),
    Rgb([217, 101, 0]),
    Rgb([116, 0, 217]),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub bar_width: u32,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

impl Rect {
    pub fn right(&self) -> i64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.h
    }

    pub fn center_x(&self) -> i64 {
        self.x + self.w / 2
    }
}

/// Resolved geometry for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub plot: Rect,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub ticks: Vec<f64>,
    /// Slot each bar is centered in, same order as `BarChart::bars`.
    pub slots: Vec<Rect>,
    pub bars: Vec<Rect>,
}

impl Layout {
    /// Canvas row for value `v`.
    pub fn y_of(&self, v: f64) -> i64 {
        // Halved so spans near f64::MAX do not overflow.
        let frac = (v / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0);
        self.plot.bottom() - (frac * self.plot.h as f64).round() as i64
    }
}

impl BarChart {
    /// Chart for one snapshot: fixed size, six bars in display order.
    pub fn from_metric(m: &Metric) -> Self {
        Self {
            title: Self::title_for(m),
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            bar_width: BAR_WIDTH,
            bars: m
                .labeled_values()
                .iter()
                .map(|(label, value)| Bar {
                    label: (*label).to_string(),
                    value: *value,
                })
                .collect(),
        }
    }

    pub fn title_for(m: &Metric) -> String {
        format!("AppName:{}\nDomain:{}\nHost:{}", m.app_name, m.domain, m.host)
    }

    pub fn bar_color(index: usize) -> Color {
        PALETTE[index % PALETTE.len()]
    }

    pub fn layout(&self) -> Result<Layout> {
        if self.bars.is_empty() {
            return Err(AppMonError::Render("at least one bar is required".into()));
        }
        if let Some(b) = self.bars.iter().find(|b| !b.value.is_finite()) {
            return Err(AppMonError::Render(format!("bar {} has a non-finite value", b.label)));
        }

        let (min, max, step) = axis_range(self.bars.iter().map(|b| b.value));
        if !(min.is_finite() && max.is_finite() && step.is_finite() && step > 0.0) {
            return Err(AppMonError::Render(format!(
                "value axis {min}..{max} (step {step}) is not drawable"
            )));
        }
        let n_ticks = ((max / step - min / step).round() as usize).min(MAX_TICKS);
        let ticks: Vec<f64> = (0..=n_ticks).map(|i| min + step * i as f64).collect();

        let label_w = ticks
            .iter()
            .map(|t| font::text_width(&format_tick(*t, step), LABEL_SCALE))
            .max()
            .unwrap_or(0);

        let title_h = self.title_lines().count() as i64 * title_line_height();
        let top = PAD + title_h + 2 * PAD;
        let left = PAD + i64::from(label_w) + TICK_GAP;
        let right = i64::from(self.width) - 2 * PAD;
        let bottom = i64::from(self.height) - (2 * PAD + i64::from(font::GLYPH_H * LABEL_SCALE) + 4);

        if right <= left || bottom <= top {
            return Err(AppMonError::Render(format!(
                "canvas {}x{} is too small for the chart",
                self.width, self.height
            )));
        }
        let plot = Rect { x: left, y: top, w: right - left, h: bottom - top };

        let n = self.bars.len() as i64;
        let slot_w = plot.w / n;
        let bar_w = i64::from(self.bar_width);
        if bar_w == 0 || slot_w < bar_w {
            return Err(AppMonError::Render(format!(
                "{n} bars of width {bar_w} do not fit in {}px",
                plot.w
            )));
        }

        let mut layout = Layout {
            plot,
            min,
            max,
            step,
            ticks,
            slots: Vec::with_capacity(self.bars.len()),
            bars: Vec::with_capacity(self.bars.len()),
        };

        for (i, bar) in self.bars.iter().enumerate() {
            let slot = Rect { x: plot.x + slot_w * i as i64, y: plot.y, w: slot_w, h: plot.h };
            let top = layout.y_of(bar.value.max(0.0));
            let bottom = layout.y_of(bar.value.min(0.0));
            layout.bars.push(Rect {
                x: slot.x + (slot_w - bar_w) / 2,
                y: top,
                w: bar_w,
                h: bottom - top,
            });
            layout.slots.push(slot);
        }

        Ok(layout)
    }

    pub fn render(&self) -> Result<Canvas> {
        let layout = self.layout()?;
        let mut canvas = Canvas::new(self.width, self.height, WHITE);
        let plot = layout.plot;

        let cx = i64::from(self.width) / 2;
        for (i, line) in self.title_lines().enumerate() {
            let y = PAD + i as i64 * title_line_height();
            canvas.draw_text_centered(cx, y, line, TITLE_SCALE, BLACK);
        }

        let half_glyph = i64::from(font::GLYPH_H * LABEL_SCALE) / 2;
        for t in &layout.ticks {
            let y = layout.y_of(*t);
            canvas.hline(plot.x, plot.right(), y, GRID);
            let label = format_tick(*t, layout.step);
            let w = i64::from(font::text_width(&label, LABEL_SCALE));
            canvas.draw_text(plot.x - TICK_GAP - w, y - half_glyph, &label, LABEL_SCALE, AXIS);
        }

        for (i, (bar, rect)) in self.bars.iter().zip(&layout.bars).enumerate() {
            canvas.fill_rect(rect.x, rect.y, rect.w, rect.h, Self::bar_color(i));
            canvas.draw_text_centered(
                layout.slots[i].center_x(),
                plot.bottom() + PAD,
                &bar.label,
                LABEL_SCALE,
                BLACK,
            );
        }

        canvas.vline(plot.x, plot.y, plot.bottom(), AXIS);
        canvas.hline(plot.x, plot.right(), layout.y_of(0.0), AXIS);

        Ok(canvas)
    }

    pub fn render_png(&self) -> Result<Vec<u8>> {
        self.render()?.encode_png()
    }

    fn title_lines(&self) -> impl Iterator<Item = &str> {
        self.title.split('\n').filter(|l| !l.is_empty())
    }
}

fn title_line_height() -> i64 {
    i64::from(font::GLYPH_H * TITLE_SCALE) + 4
}

/// Axis bounds (always spanning zero) and tick step.
///
/// Rounds the bounds out to a "nice" step; when that rounding would leave the
/// finite range, the raw bounds are kept with a plain quarter step.
pub fn axis_range(values: impl Iterator<Item = f64>) -> (f64, f64, f64) {
    let (mut lo, mut hi) = (0.0_f64, 0.0_f64);
    for v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if hi - lo <= f64::EPSILON {
        hi = lo + 1.0;
    }
    let quarter = hi / 4.0 - lo / 4.0;
    let step = nice_step(quarter);
    let (min, max) = ((lo / step).floor() * step, (hi / step).ceil() * step);
    if step.is_finite() && min.is_finite() && max.is_finite() {
        (min, max, step)
    } else {
        (lo, hi, quarter)
    }
}

fn nice_step(raw: f64) -> f64 {
    // Scale by an exact power of ten so steps like 0.25 stay exact.
    let exp = raw.log10().floor() as i32;
    let mag = 10f64.powi(exp.abs());
    let frac = if exp >= 0 { raw / mag } else { raw * mag };
    let nice = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|n| frac <= n + 1e-9)
        .unwrap_or(10.0);
    if exp >= 0 {
        nice * mag
    } else {
        nice / mag
    }
}

/// Tick label with just enough decimals to represent multiples of `step`.
/// Very large or very small steps switch to scientific notation.
pub fn format_tick(v: f64, step: f64) -> String {
    let v = if v.abs() < step * 1e-9 { 0.0 } else { v };
    if v != 0.0 && !(1e-4..1e9).contains(&step) {
        return format!("{v:.2e}");
    }

    let mut decimals = 0;
    while decimals < 6 {
        let scaled = step * 10f64.powi(decimals as i32);
        if (scaled - scaled.round()).abs() < 1e-9 {
            break;
        }
        decimals += 1;
    }
    format!("{v:.decimals$}")
}
