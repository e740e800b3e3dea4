use env_logger::Env;
use log::{debug, error, info};
use mahjong_plots::distribution::parse_cli;
use mahjong_plots::histogram::DensityHistogram;
use mahjong_plots::render::plot_distribution;
use mahjong_plots::{player_label, GameTable, PlotError, HIST_BINS, N_PLAYERS};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PlotError> {
    let (datin, pngout) = parse_cli();
    info!(
        "read games from {} and plot to {}",
        datin.display(),
        pngout.display()
    );
    let table = GameTable::from_csv(&datin)?;
    info!("loaded {} games", table.len());
    if !table.is_empty() {
        for (player, mean) in table.mean_points().iter().enumerate() {
            info!("{}: mean final points {:.1}", player_label(player), mean);
        }
    }
    let columns = table.columns();
    let mut histograms: [DensityHistogram; N_PLAYERS] = Default::default();
    for (player, (h, c)) in histograms.iter_mut().zip(columns.iter()).enumerate() {
        *h = DensityHistogram::new(c, HIST_BINS);
        let (lo, hi) = h.range();
        debug!("{}: {} bins over {}..{}", player_label(player), HIST_BINS, lo, hi);
    }
    plot_distribution(&histograms, table.len(), &pngout)?;
    info!("wrote {}", pngout.display());
    Ok(())
}
