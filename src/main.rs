fn main() {
    if let Err(err) = vacancy_table::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
