fn main() {
    if let Err(err) = invscan::run() {
        eprintln!("{}", invscan::format_error(&err));
        std::process::exit(1);
    }
}
