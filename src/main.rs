fn main() {
    dashdesk::app::cli::run();
}
