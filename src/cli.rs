use super::VERSION;
use clap::{App, Arg, ArgMatches};
use std::path::PathBuf;

/// The clap app shared by the plotting binaries:
/// an input file of games and an output image, both with a fixed default.
pub fn cli_app<'a>(
    name: &str,
    about: &'a str,
    default_datfile: &'a str,
    default_pngfile: &'a str,
) -> App<'a, 'a> {
    let arg_datin = Arg::with_name("input_datfile")
        .help("name of the comma separated file with the final points of each game")
        .short("f")
        .long("datfile")
        .takes_value(true)
        .default_value(default_datfile);
    let arg_pngout = Arg::with_name("output_pngfile")
        .help("name of the output image, svg if the extension is .svg, png otherwise")
        .short("o")
        .long("pngfile")
        .takes_value(true)
        .default_value(default_pngfile);
    App::new(name)
        .version(VERSION.unwrap_or("unknown"))
        .author("Luca Peruzzo")
        .about(about)
        .arg(arg_datin)
        .arg(arg_pngout)
}

/// (input file, output image) from the parsed arguments
pub fn paths_from(cli_args: &ArgMatches) -> (PathBuf, PathBuf) {
    let datin = PathBuf::from(cli_args.value_of("input_datfile").unwrap_or_default());
    let pngout = PathBuf::from(cli_args.value_of("output_pngfile").unwrap_or_default());
    (datin, pngout)
}
