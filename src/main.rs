use clap::Parser;
use png2spr::cli::{self, Args, Settings};

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = match Settings::resolve(&args) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Effective settings: {:?}", settings);

    if let Err(e) = cli::run(&args, &settings) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
