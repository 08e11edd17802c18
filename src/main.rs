use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(err) = code_snapshot::app::run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
