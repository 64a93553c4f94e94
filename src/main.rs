mod app;
mod config;
mod error;
mod init_config;
mod scheduler;
mod simulation;

fn main() {
    app::run();
}
