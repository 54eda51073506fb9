use clap::Parser;
use std::process;
use zrxp_processor::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    match commands::run(command) {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {error}");
            process::exit(1);
        }
    }
}

fn show_help_and_commands() {
    println!("zrxp-processor - ZRXP station file toolkit");
    println!();
    println!("Available commands:");
    println!("  inspect <FILE>   Parse a single ZRXP file and print its station records");
    println!("  scan <DIR>       Scan a directory tree for ZRXP files and report statistics");
    println!();
    println!("Run 'zrxp-processor <COMMAND> --help' for command-specific options.");
}
