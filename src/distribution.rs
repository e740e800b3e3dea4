use super::cli::{cli_app, paths_from};
use clap::App;
use std::path::PathBuf;

pub const DEFAULT_DATFILE: &str = "1000_games.dat";
pub const DEFAULT_PNGFILE: &str = "point_distribution_1000.png";

fn app() -> App<'static, 'static> {
    cli_app(
        "Mahjong_distribution",
        "cli app to plot the distribution of the final points of each player",
        DEFAULT_DATFILE,
        DEFAULT_PNGFILE,
    )
}

/// Takes the CLI arguments that control the point distribution plot.
pub fn parse_cli() -> (PathBuf, PathBuf) {
    paths_from(&app().get_matches())
}
