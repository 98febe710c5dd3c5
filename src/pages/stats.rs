use std::error::Error;
use std::f64::consts::TAU;

use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

type DrawResult = Result<(), Box<dyn Error>>;

const FONT: &str = "sans-serif";

const CHART_COLORS: [RGBColor; 5] = [
    RGBColor(59, 130, 246),
    RGBColor(16, 185, 129),
    RGBColor(139, 92, 246),
    RGBColor(245, 158, 11),
    RGBColor(239, 68, 68),
];

// Charts sit on the section's gray-800 cards.
const SURFACE: RGBColor = RGBColor(31, 41, 55);
const INK: RGBColor = RGBColor(209, 213, 219);

const GROWTH_YEARS: [&str; 6] = ["2020", "2021", "2022", "2023", "2024", "2025"];
const COVERAGE_5G: [u32; 6] = [5, 15, 35, 55, 75, 95];
const IOT_CONNECTIONS: [u32; 6] = [12, 18, 27, 38, 52, 70];

const ADOPTION: [(&str, u32); 5] = [
    ("AI Integration", 85),
    ("Edge Computing", 72),
    ("Quantum Networks", 45),
    ("Smart Cities", 68),
    ("AR/VR", 59),
];

const PERFORMANCE: [(&str, f64); 4] = [
    ("Speed", 95.0),
    ("Reliability", 98.0),
    ("Security", 99.0),
    ("Coverage", 92.0),
];

struct StatCard {
    title: &'static str,
    value: &'static str,
    growth: &'static str,
    icon: &'static str,
}

const STAT_CARDS: [StatCard; 4] = [
    StatCard { title: "5G Base Stations", value: "2.5M+", growth: "+45%", icon: "📡" },
    StatCard { title: "Connected Devices", value: "50B+", growth: "+32%", icon: "📱" },
    StatCard { title: "Network Uptime", value: "99.9%", growth: "+0.2%", icon: "⚡" },
    StatCard { title: "Global Coverage", value: "195", growth: "+12", icon: "🌍" },
];

/// Start and end angle of each slice, clockwise from twelve o'clock.
/// Slices are proportional to `values`; non-positive totals yield nothing.
pub fn ring_arcs(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0;
    values
        .iter()
        .map(|value| {
            let end = start + value.max(0.0) / total * TAU;
            let arc = (start, end);
            start = end;
            arc
        })
        .collect()
}

/// Outline of one doughnut slice in canvas pixels (y grows downwards).
pub fn ring_segment(center: (i32, i32), inner: f64, outer: f64, (start, end): (f64, f64)) -> Vec<(i32, i32)> {
    let steps = ((end - start) / (TAU / 180.0)).ceil().max(1.0) as usize;
    let point = |radius: f64, angle: f64| {
        (
            center.0 + (radius * angle.sin()).round() as i32,
            center.1 - (radius * angle.cos()).round() as i32,
        )
    };
    let angle = |step: usize| start + (end - start) * step as f64 / steps as f64;

    let outer_edge = (0..=steps).map(|step| point(outer, angle(step)));
    let inner_edge = (0..=steps).rev().map(|step| point(inner, angle(step)));
    outer_edge.chain(inner_edge).collect()
}

pub fn ring_segments(values: &[f64], center: (i32, i32), inner: f64, outer: f64) -> Vec<Vec<(i32, i32)>> {
    ring_arcs(values)
        .into_iter()
        .map(|arc| ring_segment(center, inner, outer, arc))
        .collect()
}

fn drawing_area(canvas: HtmlCanvasElement) -> Result<DrawingArea<CanvasBackend, plotters::coord::Shift>, Box<dyn Error>> {
    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();
    root.fill(&SURFACE)?;
    Ok(root)
}

fn draw_growth(canvas: HtmlCanvasElement) -> DrawResult {
    let root = drawing_area(canvas)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(12)
        .x_label_area_size(30)
        .y_label_area_size(36)
        .build_cartesian_2d(0..GROWTH_YEARS.len() - 1, 0u32..100u32)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(&INK.mix(0.05))
        .bold_line_style(&INK.mix(0.1))
        .axis_style(&INK.mix(0.3))
        .label_style((FONT, 12).into_font().color(&INK))
        .x_labels(GROWTH_YEARS.len())
        .x_label_formatter(&|x| GROWTH_YEARS.get(*x).map(|y| y.to_string()).unwrap_or_default())
        .draw()?;

    let coverage = CHART_COLORS[0];
    chart
        .draw_series(
            AreaSeries::new(COVERAGE_5G.iter().copied().enumerate(), 0, &coverage.mix(0.1))
                .border_style(ShapeStyle::from(&coverage).stroke_width(3)),
        )?
        .label("5G Network Coverage (%)")
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], coverage.filled()));

    let iot = CHART_COLORS[1];
    chart
        .draw_series(LineSeries::new(
            IOT_CONNECTIONS.iter().copied().enumerate(),
            ShapeStyle::from(&iot).stroke_width(3),
        ))?
        .label("IoT Device Connections (Billions)")
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], iot.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&SURFACE.mix(0.8))
        .border_style(&INK.mix(0.2))
        .label_font((FONT, 12).into_font().color(&INK))
        .draw()?;

    root.present()?;
    Ok(())
}

fn draw_adoption(canvas: HtmlCanvasElement) -> DrawResult {
    let root = drawing_area(canvas)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(12)
        .x_label_area_size(30)
        .y_label_area_size(36)
        .build_cartesian_2d(-0.5..ADOPTION.len() as f64 - 0.5, 0u32..100u32)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(&INK.mix(0.05))
        .bold_line_style(&INK.mix(0.1))
        .axis_style(&INK.mix(0.3))
        .label_style((FONT, 11).into_font().color(&INK))
        .x_labels(ADOPTION.len())
        .x_label_formatter(&|x| {
            // Only whole positions sit under a bar.
            if x.fract() != 0.0 || *x < 0.0 {
                return String::new();
            }
            ADOPTION
                .get(*x as usize)
                .map(|(label, _)| label.to_string())
                .unwrap_or_default()
        })
        .draw()?;

    chart.draw_series(ADOPTION.iter().enumerate().map(|(index, (_, rate))| {
        let x = index as f64;
        let color = CHART_COLORS[index % CHART_COLORS.len()];
        Rectangle::new([(x - 0.35, 0), (x + 0.35, *rate)], color.mix(0.8).filled())
    }))?;

    root.present()?;
    Ok(())
}

fn draw_performance(canvas: HtmlCanvasElement) -> DrawResult {
    let root = drawing_area(canvas)?;
    let (width, height) = root.dim_in_pixel();
    let legend_height = 40;
    let center = (width as i32 / 2, (height as i32 - legend_height) / 2);
    let outer = f64::from(width.min(height.saturating_sub(legend_height as u32))) / 2.0 - 10.0;
    let inner = outer * 0.6;

    let values: Vec<f64> = PERFORMANCE.iter().map(|(_, value)| *value).collect();
    for (index, segment) in ring_segments(&values, center, inner, outer).into_iter().enumerate() {
        let color = CHART_COLORS[index % CHART_COLORS.len()];
        root.draw(&Polygon::new(segment, color.mix(0.8).filled()))?;
    }

    let slot = width as i32 / PERFORMANCE.len() as i32;
    let baseline = height as i32 - legend_height / 2;
    for (index, (label, value)) in PERFORMANCE.iter().enumerate() {
        let color = CHART_COLORS[index % CHART_COLORS.len()];
        let x = slot * index as i32 + 8;
        root.draw(&Rectangle::new([(x, baseline - 5), (x + 10, baseline + 5)], color.filled()))?;
        root.draw(&Text::new(
            format!("{} {}%", label, value),
            (x + 14, baseline - 6),
            (FONT, 12).into_font().color(&INK),
        ))?;
    }

    root.present()?;
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Chart {
    Growth,
    Adoption,
    Performance,
}

impl Chart {
    fn title(self) -> &'static str {
        match self {
            Chart::Growth => "Technology Growth Trends",
            Chart::Adoption => "Technology Adoption Rates",
            Chart::Performance => "Network Performance Metrics",
        }
    }

    fn size(self) -> (u32, u32) {
        match self {
            Chart::Performance => (360, 360),
            Chart::Growth | Chart::Adoption => (400, 300),
        }
    }

    fn draw(self, canvas: HtmlCanvasElement) -> DrawResult {
        match self {
            Chart::Growth => draw_growth(canvas),
            Chart::Adoption => draw_adoption(canvas),
            Chart::Performance => draw_performance(canvas),
        }
    }
}

#[derive(Properties, PartialEq)]
struct ChartCanvasProps {
    chart: Chart,
}

#[function_component(ChartCanvas)]
fn chart_canvas(props: &ChartCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let chart = props.chart;

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |chart| {
                match canvas_ref.cast::<HtmlCanvasElement>() {
                    Some(canvas) => {
                        if let Err(err) = chart.draw(canvas) {
                            log::warn!("Could not draw {:?} chart: {}", chart, err);
                        }
                    }
                    None => log::warn!("{:?} chart canvas is not mounted", chart),
                }
                || ()
            },
            chart,
        );
    }

    let (width, height) = chart.size();
    html! {
        <div class="chart-card">
            <h3>{chart.title()}</h3>
            <canvas
                ref={canvas_ref}
                width={width.to_string()}
                height={height.to_string()}
                style="max-width: 100%;"
            />
        </div>
    }
}

#[function_component(Stats)]
pub fn stats() -> Html {
    html! {
        <section id="solutions" class="stats-section">
            <div class="section-inner">
                <div class="section-header stats-header">
                    <h2>{"Driving the Future with Data"}</h2>
                    <p>{"Real-time insights and analytics powering the next generation of connectivity"}</p>
                </div>

                <div class="stat-cards">
                    { for STAT_CARDS.iter().map(|card| html! {
                        <div class="stat-card">
                            <div class="stat-card-top">
                                <span class="stat-icon">{card.icon}</span>
                                <span class="stat-growth">{card.growth}</span>
                            </div>
                            <h3>{card.value}</h3>
                            <p>{card.title}</p>
                        </div>
                    }) }
                </div>

                <div class="chart-grid">
                    <ChartCanvas chart={Chart::Growth} />
                    <ChartCanvas chart={Chart::Adoption} />
                </div>
                <div class="chart-single">
                    <ChartCanvas chart={Chart::Performance} />
                </div>
            </div>
            <style>
                {r#"
                    .stats-section {
                        padding: 5rem 0;
                        color: #fff;
                        background: #111827;
                    }
                    .stats-header h2 {
                        color: #fff;
                    }
                    .stats-header p {
                        color: #d1d5db;
                    }
                    .stat-cards {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                        gap: 1.5rem;
                        margin-bottom: 4rem;
                    }
                    .stat-card {
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: linear-gradient(135deg, #1f2937, #374151);
                        border: 1px solid #374151;
                        transition: transform 0.3s ease, border-color 0.3s ease;
                    }
                    .stat-card:hover {
                        transform: scale(1.05);
                        border-color: rgba(59, 130, 246, 0.5);
                    }
                    .stat-card-top {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 1rem;
                    }
                    .stat-icon {
                        font-size: 1.875rem;
                    }
                    .stat-growth {
                        color: #4ade80;
                        font-size: 0.875rem;
                        font-weight: 600;
                    }
                    .stat-card h3 {
                        margin: 0 0 0.25rem;
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .stat-card p {
                        margin: 0;
                        color: #9ca3af;
                        font-size: 0.875rem;
                    }
                    .chart-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
                        gap: 2rem;
                    }
                    .chart-single {
                        max-width: 28rem;
                        margin: 3rem auto 0;
                    }
                    .chart-card {
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: #1f2937;
                        border: 1px solid #374151;
                        text-align: center;
                    }
                    .chart-card h3 {
                        margin: 0 0 1rem;
                        font-size: 1.25rem;
                        font-weight: 600;
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(center: (i32, i32), point: (i32, i32)) -> f64 {
        f64::from(point.0 - center.0).hypot(f64::from(point.1 - center.1))
    }

    #[test]
    fn arcs_cover_the_full_ring_in_order() {
        let arcs = ring_arcs(&[1.0, 1.0, 2.0]);
        assert_eq!(arcs.len(), 3);
        assert_eq!(arcs[0].0, 0.0);
        assert!((arcs[0].1 - TAU / 4.0).abs() < 1e-9);
        assert_eq!(arcs[0].1, arcs[1].0);
        assert_eq!(arcs[1].1, arcs[2].0);
        assert!((arcs[2].1 - TAU).abs() < 1e-9);
    }

    #[test]
    fn empty_or_zero_values_draw_nothing() {
        assert!(ring_arcs(&[]).is_empty());
        assert!(ring_arcs(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn first_slice_starts_at_twelve_o_clock() {
        let segment = ring_segment((100, 100), 50.0, 80.0, (0.0, TAU / 4.0));
        assert_eq!(segment[0], (100, 20));
        assert_eq!(*segment.last().unwrap_or(&(0, 0)), (100, 50));
    }

    #[test]
    fn segment_points_stay_between_the_radii() {
        let center = (180, 160);
        let values: Vec<f64> = PERFORMANCE.iter().map(|(_, v)| *v).collect();
        let segments = ring_segments(&values, center, 60.0, 100.0);
        assert_eq!(segments.len(), PERFORMANCE.len());
        for point in segments.iter().flatten() {
            let r = distance(center, *point);
            assert!((59.0..=101.0).contains(&r), "point {:?} at radius {}", point, r);
        }
    }

    #[test]
    fn chart_data_lines_up() {
        assert_eq!(GROWTH_YEARS.len(), COVERAGE_5G.len());
        assert_eq!(GROWTH_YEARS.len(), IOT_CONNECTIONS.len());
        assert!(ADOPTION.len() <= CHART_COLORS.len());
    }
}
