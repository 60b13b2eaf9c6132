mod cli;
mod config;
mod error;
mod fetch;
mod gh_ops;
mod git_ops;
mod logging;
mod models;
mod sync;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("ghfetch: {err:#}");
        std::process::exit(1);
    }
}
