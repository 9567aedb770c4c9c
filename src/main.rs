use std::io;

use clap::Parser;

use labyrinth::{app, cli::Args, error::Error, logging, settings::Settings};

fn main() -> Result<(), Error> {
    let args = Args::parse();
    let settings_path = args.config_path();

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    if args.reset_config {
        Settings::reset_config(&settings_path)?;
        return Ok(());
    }

    better_panic::install();

    let settings = Settings::load(&settings_path)?;
    let options = args.resolve(&settings);
    logging::init(options.log_level)?;
    log::debug!("Settings loaded from {:?}", settings_path);

    app::run(&options, &mut io::stdout().lock())
}
