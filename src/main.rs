fn main() {
    adu_pvcontrol::app::cli::run();
}
