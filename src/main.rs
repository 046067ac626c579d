use neural_field::Simulation;

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {}={:?}: not a valid number", name, raw);
            None
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut sim = Simulation::new();
    if let Some(seed) = env_parse::<u64>("NEURAL_FIELD_SEED") {
        sim = sim.with_seed(seed);
    }
    if let Some(count) = env_parse::<usize>("NEURAL_FIELD_NODES") {
        sim = sim.with_node_count(count);
    }

    if let Err(e) = sim.run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
