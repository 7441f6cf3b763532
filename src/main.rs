use console::style;

use ynab_csv_import::logging::{self, LogLevel};

fn main() {
    let args = ynab_csv_import::args::parse();
    logging::init(LogLevel::from_verbosity(args.verbosity));
    if let Err(err) = ynab_csv_import::cli::main(args) {
        eprintln!("{} {:#}", style("Error:").for_stderr().red().bold(), err);
        std::process::exit(1);
    }
}
