use structopt::StructOpt;
use structopt_flags::QuietVerbose;

use crate::grid::Size;
use crate::reveal::RevealPattern;

#[derive(Debug)]
pub struct RendererConfig {
    #[cfg(feature = "visual")]
    pub visual: bool,
    #[cfg(feature = "visual")]
    pub vsync: bool,
    #[cfg(feature = "visual")]
    pub fullscreen: bool,
}

#[derive(Debug)]
pub struct AppConfig {
    pub size: Size,
    pub pattern: RevealPattern,
    pub batch: usize,
    pub seed: Option<u64>,
    #[cfg(feature = "image-output")]
    pub output: Option<std::path::PathBuf>,
    pub renderer: RendererConfig,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "Mazebound",
    about = "Generate, reveal and explore color-group maze puzzles"
)]
pub struct Opt {
    #[structopt(flatten)]
    pub verbose: QuietVerbose,

    #[structopt(
        parse(try_from_str),
        short,
        long,
        default_value = "15x21",
        help = "Maze size, rounded up to odd dimensions"
    )]
    size: Size,

    #[structopt(
        parse(try_from_str),
        short,
        long,
        default_value = "random",
        help = "Reveal pattern: center-out, edges-in, mixed, corner-to-corner or random"
    )]
    pattern: RevealPattern,

    #[structopt(
        short,
        long,
        default_value = "3",
        help = "Cells revealed per scheduler tick"
    )]
    batch: usize,

    #[structopt(parse(try_from_str), long, help = "Random seed")]
    seed: Option<u64>,

    #[cfg(feature = "image-output")]
    #[structopt(parse(from_os_str), short, long, help = "Write the final grid to a PNG")]
    output: Option<std::path::PathBuf>,

    #[cfg(feature = "visual")]
    #[structopt(short = "V", long, help = "Open a window to play the maze")]
    visual: bool,

    #[cfg(feature = "visual")]
    #[structopt(long, help = "Turns on vsync")]
    vsync: bool,

    #[cfg(feature = "visual")]
    #[structopt(short, long, help = "Runs the application in full screen")]
    fullscreen: bool,
}

impl Opt {
    pub fn to_app_config(self) -> AppConfig {
        AppConfig {
            size: self.size,
            pattern: self.pattern,
            batch: self.batch,
            seed: self.seed,
            #[cfg(feature = "image-output")]
            output: self.output,
            renderer: RendererConfig {
                #[cfg(feature = "visual")]
                visual: self.visual,
                #[cfg(feature = "visual")]
                vsync: self.vsync,
                #[cfg(feature = "visual")]
                fullscreen: self.fullscreen,
            },
        }
    }
}
