use clap::Parser;
use log::info;
use snake_arcade::app;
use snake_arcade::config::Cli;
use snake_arcade::logger::init_logger;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = init_logger(&cli.log_file, cli.log_level.into()) {
        eprintln!("Logging disabled: {err}");
    }
    info!("Starting {} ({:?})", cli.variant, cli);

    macroquad::Window::from_config(app::window_conf(cli.variant), app::run(cli));
}
