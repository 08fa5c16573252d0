fn main() {
    plo_chart::cli::run();
}
