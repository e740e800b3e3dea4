use env_logger::Env;
use log::{error, info};
use mahjong_plots::cumulative::parse_cli;
use mahjong_plots::render::plot_cumulative;
use mahjong_plots::{player_label, GameTable, PlotError, STARTING_POINTS};

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
    let series = table.cumulative_difference(STARTING_POINTS);
    for (player, s) in series.iter().enumerate() {
        if let Some(last) = s.last() {
            info!("{}: final cumulative difference {}", player_label(player), last);
        }
    }
    plot_cumulative(&series, table.len(), &pngout)?;
    info!("wrote {}", pngout.display());
    Ok(())
}
