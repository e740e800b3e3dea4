use super::histogram::DensityHistogram;
use super::{min_and_max, player_label, PlotError};
use super::{DPI, FIGURE_SIZE, HIST_ALPHA, N_PLAYERS, PLAYER_COLORS};
use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// image formats the charts can be written to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    /// svg for a .svg extension (any case), png for everything else
    pub fn from_path(fout: &Path) -> ImageFormat {
        match fout.extension().and_then(|e| e.to_str()) {
            Some(e) if e.eq_ignore_ascii_case("svg") => ImageFormat::Svg,
            _ => ImageFormat::Png,
        }
    }
}

fn player_color(player: usize) -> RGBColor {
    let (r, g, b) = PLAYER_COLORS[player];
    RGBColor(r, g, b)
}

/// 10 pt text at the figure resolution
fn font_size() -> u32 {
    10 * DPI / 72
}

/// lower and upper axis limits with a margin of a tenth of the span
fn padded_range(min: f64, max: f64) -> (f64, f64) {
    if min == max {
        return (min - 1., max + 1.);
    }
    let margin = (max - min) / 10f64;
    (min - margin, max + margin)
}

/// plots the cumulative point difference of each player against the game number
pub fn plot_cumulative(
    series: &[Vec<f64>; N_PLAYERS],
    n_games: usize,
    fout: &Path,
) -> Result<(), PlotError> {
    if n_games == 0 {
        return Err(PlotError::EmptyTable);
    }
    let drawn = match ImageFormat::from_path(fout) {
        ImageFormat::Png => draw_cumulative(
            BitMapBackend::new(fout, FIGURE_SIZE).into_drawing_area(),
            series,
            n_games,
        ),
        ImageFormat::Svg => draw_cumulative(
            SVGBackend::new(fout, FIGURE_SIZE).into_drawing_area(),
            series,
            n_games,
        ),
    };
    drawn.map_err(|e| PlotError::Render {
        path: fout.to_path_buf(),
        message: e.to_string(),
    })
}

/// plots the overlaid density histograms of the final points of each player
pub fn plot_distribution(
    histograms: &[DensityHistogram; N_PLAYERS],
    n_games: usize,
    fout: &Path,
) -> Result<(), PlotError> {
    if n_games == 0 {
        return Err(PlotError::EmptyTable);
    }
    let drawn = match ImageFormat::from_path(fout) {
        ImageFormat::Png => draw_distribution(
            BitMapBackend::new(fout, FIGURE_SIZE).into_drawing_area(),
            histograms,
        ),
        ImageFormat::Svg => draw_distribution(
            SVGBackend::new(fout, FIGURE_SIZE).into_drawing_area(),
            histograms,
        ),
    };
    drawn.map_err(|e| PlotError::Render {
        path: fout.to_path_buf(),
        message: e.to_string(),
    })
}

fn draw_cumulative<DB>(
    root: DrawingArea<DB, Shift>,
    series: &[Vec<f64>; N_PLAYERS],
    n_games: usize,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let all: Vec<f64> = series.iter().flatten().cloned().collect();
    let (ymin, ymax) = min_and_max(&all[..]).unwrap_or((0., 0.));
    let (ymin, ymax) = padded_range(ymin, ymax);
    let xmax = n_games as f64;
    debug!("cumulative axes x 0..{}, y {}..{}", xmax, ymin, ymax);
    let font = font_size();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(2 * font + 20)
        .y_label_area_size(4 * font)
        .build_cartesian_2d(0f64..xmax, ymin..ymax)?;
    chart
        .configure_mesh()
        .light_line_style(&TRANSPARENT)
        .bold_line_style(RGBColor(176, 176, 176).stroke_width(1))
        .set_all_tick_mark_size(4)
        .label_style(("sans-serif", font as f64))
        .axis_desc_style(("sans-serif", font as f64))
        .x_desc("Games")
        .y_desc("Cumulative Point Difference")
        .x_label_formatter(&|x: &f64| format!("{:.0}", x))
        .y_label_formatter(&|y: &f64| format!("{:.0}", y))
        .draw()?;

    for (player, s) in series.iter().enumerate() {
        let color = player_color(player);
        chart
            .draw_series(LineSeries::new(
                s.iter().enumerate().map(|(game, v)| (game as f64, *v)),
                color.stroke_width(2),
            ))?
            .label(player_label(player))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], color.stroke_width(2)));
    }
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(("sans-serif", font as f64))
        .background_style(&WHITE.mix(0.8))
        .border_style(&RGBColor(204, 204, 204))
        .draw()?;
    root.present()?;
    Ok(())
}

fn draw_distribution<DB>(
    root: DrawingArea<DB, Shift>,
    histograms: &[DensityHistogram; N_PLAYERS],
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let ends: Vec<f64> = histograms
        .iter()
        .flat_map(|h| {
            let (lo, hi) = h.range();
            vec![lo, hi]
        })
        .collect();
    let (xmin, xmax) = min_and_max(&ends[..]).unwrap_or((0., 1.));
    let xmargin = (xmax - xmin) / 20f64;
    let dmax = histograms.iter().map(|h| h.max_density()).fold(0., f64::max);
    let ymax = if dmax > 0. { dmax * 1.05 } else { 1. };
    debug!("distribution axes x {}..{}, y 0..{}", xmin, xmax, ymax);
    let font = font_size();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(2 * font + 20)
        .y_label_area_size(4 * font)
        .build_cartesian_2d((xmin - xmargin)..(xmax + xmargin), 0f64..ymax)?;
    chart
        .configure_mesh()
        .light_line_style(&TRANSPARENT)
        .bold_line_style(RGBColor(176, 176, 176).stroke_width(1))
        .set_all_tick_mark_size(4)
        .label_style(("sans-serif", font as f64))
        .axis_desc_style(("sans-serif", font as f64))
        .x_desc("Points at the end of a Game")
        .y_desc("Density")
        .x_label_formatter(&|x: &f64| format!("{:.0}", x))
        .y_label_formatter(&|y: &f64| format!("{:.1e}", y))
        .draw()?;

    for (player, h) in histograms.iter().enumerate() {
        let fill = player_color(player).mix(HIST_ALPHA).filled();
        chart
            .draw_series(
                h.bars()
                    .filter(|(_, _, d)| *d > 0.)
                    .map(|(l, r, d)| Rectangle::new([(l, 0.), (r, d)], fill)),
            )?
            .label(player_label(player))
            .legend(move |(x, y)| Rectangle::new([(x, y - 8), (x + 30, y + 8)], fill));
    }
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font(("sans-serif", font as f64))
        .background_style(&WHITE.mix(0.8))
        .border_style(&RGBColor(204, 204, 204))
        .draw()?;
    root.present()?;
    Ok(())
}
