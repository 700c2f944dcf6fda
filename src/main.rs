use factboard::app::cli;

fn main() {
    cli::run();
}
