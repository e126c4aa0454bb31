use greip::Args;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::from_env();
    if let Err(e) = greip::logging::init(args.verbose) {
        eprintln!("greip: error initializing logging: {e}");
    }
    log::debug!("#Start main() {:?}", args);

    match greip::run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
