fn main() {
    prready::app::cli::run();
}
