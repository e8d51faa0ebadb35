mod cli;

fn main() {
    let log_guard = cli::logging::init();
    let result = cli::run();
    // flush buffered log lines before exiting
    drop(log_guard);

    if let Err(e) = result {
        eprintln!("{e:#}"); // pretty anyhow chain
        std::process::exit(1);
    }
}
