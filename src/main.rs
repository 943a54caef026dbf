use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use structopt::StructOpt;
use structopt_flags::LogLevel;

use mazebound::app::MazeApp;
use mazebound::cli::Opt;

fn main() {
    let opt: Opt = Opt::from_args();

    TermLogger::init(
        opt.verbose.get_level_filter(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    let app = MazeApp::new(opt.to_app_config());

    if let Err(err) = app.run() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
