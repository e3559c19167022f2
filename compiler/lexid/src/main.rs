//! `lexid` command-line tool.

use lexid::commands::{run, Status};
use lexid::config::parse_args;
use lexid::init_tracing;

fn print_usage() {
    eprintln!("Usage: lexid <command> [options] <identifier>...");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  check       Report whether each identifier is valid");
    eprintln!("  classify    List every scalar with its category and classes");
    eprintln!("  strip       Print identifiers without formatting characters");
    eprintln!("  escape      Print every escape spelling");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --escaped   Decode \\uXXXX and \\UXXXXXXXX in arguments first");
    eprintln!("  --entities  Also print &#...; spellings (escape only)");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=debug) for diagnostic output.");
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || matches!(args[0].as_str(), "help" | "--help" | "-h") {
        print_usage();
        return;
    }

    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(error) => {
            eprintln!("error: {error}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    let mut stdout = std::io::stdout().lock();
    match run(&invocation, &mut stdout) {
        Ok(Status::Success) => {}
        Ok(Status::Failure) => std::process::exit(1),
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    }
}
