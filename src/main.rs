mod cli;
mod project;
mod report;
mod setup;

fn main() {
    if let Ok(root) = std::env::var("TAILVITE_PROJECT_ROOT") {
        if let Err(e) = std::env::set_current_dir(&root) {
            eprintln!("warning: failed to switch to project root at {root}: {e}");
        }
    }
    cli::run();
}
