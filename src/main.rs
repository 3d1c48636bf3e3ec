fn main() {
    polygulp::app::cli::run();
}
