fn main() {
    envgen::run_cli();
}
