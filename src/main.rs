use driftfield::SimulationError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match driftfield::run() {
        Ok(()) => {}
        // Already reported when binding failed.
        Err(SimulationError::Bind(_)) => std::process::exit(1),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
