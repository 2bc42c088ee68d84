//! Chart model, layout, and raster output.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use image::GenericImageView;

use appmon_chart::chart::{axis_range, format_tick, Bar, BarChart, BAR_WIDTH, CHART_HEIGHT, CHART_WIDTH};
use appmon_chart::font;
use appmon_chart::render::WHITE;
use appmon_core::{Metric, PerformanceIndex};

fn metric() -> Metric {
    Metric {
        performance_index: PerformanceIndex {
            fail_ratio: 0.5,
            fail_amount: 10,
            access_amount: 80,
            max_concurrent: 40,
            min_latency: 0,
            avg_latency: 99,
        },
        host: "node-1".into(),
        app_name: "test-app".into(),
        domain: "test-domain".into(),
    }
}

#[test]
fn from_metric_uses_fixed_shape_and_order() {
    let chart = BarChart::from_metric(&metric());
    assert_eq!(chart.title, "AppName:test-app\nDomain:test-domain\nHost:node-1");
    assert_eq!((chart.width, chart.height, chart.bar_width), (CHART_WIDTH, CHART_HEIGHT, BAR_WIDTH));
    assert_eq!(chart.height, 512);
    assert_eq!(chart.bar_width, 60);

    let expected = [
        ("FailRatio", 0.5),
        ("FailAmount", 10.0),
        ("AccessAmount", 80.0),
        ("MaxConcurrent", 40.0),
        ("MinLatency", 0.0),
        ("AvgLatency", 99.0),
    ];
    assert_eq!(chart.bars.len(), 6);
    for (bar, (label, value)) in chart.bars.iter().zip(expected) {
        assert_eq!(bar.label, label);
        assert_eq!(bar.value, value);
    }
}

#[test]
fn bar_heights_follow_values() {
    let layout = BarChart::from_metric(&metric()).layout().unwrap();
    assert_eq!(layout.min, 0.0);
    assert_eq!(layout.max, 100.0);
    assert_eq!(layout.ticks, vec![0.0, 25.0, 50.0, 75.0, 100.0]);

    let access = layout.bars[2];
    let concurrent = layout.bars[3];
    assert!(access.h > concurrent.h);
    assert!((access.h - 2 * concurrent.h).abs() <= 1);
    assert_eq!(layout.bars[4].h, 0, "zero value draws no bar");

    for (bar, slot) in layout.bars.iter().zip(&layout.slots) {
        assert_eq!(bar.w, 60);
        assert_eq!(bar.bottom(), layout.y_of(0.0));
        assert!(bar.x >= slot.x && bar.right() <= slot.right());
    }
}

#[test]
fn render_fills_bars_with_their_color() {
    let chart = BarChart::from_metric(&metric());
    let layout = chart.layout().unwrap();
    let png = chart.render_png().unwrap();
    let img = image::load_from_memory(&png).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (1024, 512));

    for i in [1, 2, 3, 5] {
        let r = layout.bars[i];
        let px = *img.get_pixel(r.center_x() as u32, (r.y + r.h / 2) as u32);
        assert_eq!(px, BarChart::bar_color(i), "bar {i}");
    }
    assert_eq!(*img.get_pixel(1023, 511), WHITE);
}

fn with_fail_ratio(fail_ratio: f64) -> Metric {
    let mut m = metric();
    m.performance_index.fail_ratio = fail_ratio;
    m
}

#[test]
fn values_near_f64_max_still_render() {
    let chart = BarChart::from_metric(&with_fail_ratio(1.7e308));
    let layout = chart.layout().unwrap();
    assert!(layout.max.is_finite() && layout.step.is_finite());
    assert!(layout.max >= 1.7e308);
    assert!(layout.ticks.len() <= 65);
    assert!(layout.bars[0].h > 0);
    chart.render_png().unwrap();

    let chart = BarChart::from_metric(&with_fail_ratio(-1.7e308));
    let layout = chart.layout().unwrap();
    assert!(layout.min.is_finite() && layout.min <= -1.7e308);
    assert_eq!(layout.bars[0].y, layout.y_of(0.0));
    chart.render_png().unwrap();
}

#[test]
fn huge_values_use_compact_tick_labels() {
    let chart = BarChart::from_metric(&with_fail_ratio(1e200));
    let layout = chart.layout().unwrap();
    assert!(layout.plot.w > 900, "labels must not eat the plot: {}", layout.plot.w);
    chart.render_png().unwrap();

    assert_eq!(format_tick(2.5e199, 2.5e199), "2.50e199");
    assert_eq!(format_tick(0.0, 2.5e199), "0");
}

#[test]
fn png_has_chart_dimensions() {
    let png = BarChart::from_metric(&metric()).render_png().unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    let img = image::load_from_memory(&png).unwrap();
    assert_eq!(img.dimensions(), (1024, 512));
}

#[test]
fn negative_values_hang_below_baseline() {
    let chart = BarChart {
        title: "neg".into(),
        width: 1024,
        height: 512,
        bar_width: 60,
        bars: vec![
            Bar { label: "up".into(), value: 30.0 },
            Bar { label: "down".into(), value: -20.0 },
        ],
    };
    let layout = chart.layout().unwrap();
    assert!(layout.min < 0.0);
    let zero = layout.y_of(0.0);
    assert_eq!(layout.bars[0].bottom(), zero);
    assert_eq!(layout.bars[1].y, zero);
    assert!(layout.bars[1].h > 0);
    chart.render_png().unwrap();
}

#[test]
fn all_zero_values_use_unit_range() {
    let chart = BarChart::from_metric(&Metric::default());
    let layout = chart.layout().unwrap();
    assert_eq!((layout.min, layout.max), (0.0, 1.0));
    assert!(layout.bars.iter().all(|b| b.h == 0));
    chart.render_png().unwrap();
}

#[test]
fn invalid_charts_are_render_errors() {
    let mut chart = BarChart::from_metric(&metric());
    chart.bars.clear();
    assert_eq!(chart.layout().unwrap_err().client_code().as_str(), "RENDER_FAILED");

    let mut chart = BarChart::from_metric(&metric());
    chart.width = 200;
    assert!(chart.render_png().is_err());

    let mut chart = BarChart::from_metric(&metric());
    chart.bars[0].value = f64::NAN;
    assert!(chart.layout().is_err());
}

#[test]
fn axis_and_tick_formatting() {
    let (lo, hi, step) = axis_range([0.2, 0.9].into_iter());
    assert_eq!((lo, hi, step), (0.0, 1.0, 0.25));
    assert_eq!(format_tick(0.25, 0.25), "0.25");
    assert_eq!(format_tick(75.0, 25.0), "75");
    assert_eq!(format_tick(-0.0, 5.0), "0");

    let (lo, hi, _) = axis_range([-7.0, 3.0].into_iter());
    assert!(lo <= -7.0 && hi >= 3.0);
}

#[test]
fn glyph_metrics() {
    assert_eq!(font::text_width("", 2), 0);
    assert_eq!(font::text_width("A", 1), 5);
    assert_eq!(font::text_width("AB", 2), 22);
    assert_ne!(font::glyph('a'), font::glyph('A'));
    assert_ne!(font::glyph('e'), font::glyph('?'));
    for c in ('a'..='z').chain('A'..='Z') {
        assert_ne!(font::glyph(c), font::glyph('?'), "missing glyph {c}");
    }
    assert_eq!(font::glyph('~'), font::glyph('?'));
}
