fn main() {
    if let Err(err) = csv_radar::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
