use super::cli::{cli_app, paths_from};
use clap::App;
use std::path::PathBuf;

pub const DEFAULT_DATFILE: &str = "10000_games.dat";
pub const DEFAULT_PNGFILE: &str = "game_plot.png";

fn app() -> App<'static, 'static> {
    cli_app(
        "Mahjong_cumulative",
        "cli app to plot the cumulative point difference of each player",
        DEFAULT_DATFILE,
        DEFAULT_PNGFILE,
    )
}

/// Takes the CLI arguments that control the cumulative plot.
pub fn parse_cli() -> (PathBuf, PathBuf) {
    paths_from(&app().get_matches())
}
