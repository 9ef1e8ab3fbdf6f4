//! Batch report inspector (bareport) - Main binary entry point

use bareport::BatchReportReader;
use bareport::cli::args::{Command, ComponentArgs, TreeArgs, parse_args};
use bareport::cli::output::{format_component_text, format_json, format_tree_text};
use bareport::services::dump::load_component;
use bareport::services::tree::list_report;
use std::path::Path;
use std::process;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug bareport tree target/report
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        return;
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_help();
            return;
        }
        "--version" | "-v" => {
            print_version();
            return;
        }
        _ => {}
    }

    let cli_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    let exit_code = match &cli_args.command {
        Command::Tree(tree_args) => handle_tree(tree_args),
        Command::Component(component_args) => handle_component(component_args),
    };

    process::exit(exit_code);
}

fn open_report(dir: &str) -> Result<BatchReportReader, i32> {
    if !Path::new(dir).is_dir() {
        eprintln!("Error: Report directory not found: {dir}");
        return Err(2);
    }
    Ok(BatchReportReader::new(dir))
}

fn handle_tree(args: &TreeArgs) -> i32 {
    let reader = match open_report(&args.report_dir) {
        Ok(r) => r,
        Err(code) => return code,
    };

    let tree = match list_report(&reader) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading report: {e}");
            return 4;
        }
    };

    if args.json {
        println!("{}", format_json(&tree));
    } else {
        print!("{}", format_tree_text(&tree));
    }

    0
}

fn handle_component(args: &ComponentArgs) -> i32 {
    let reader = match open_report(&args.report_dir) {
        Ok(r) => r,
        Err(code) => return code,
    };

    let dump = match load_component(&reader, args.component_ref, args.source) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading component #{}: {e}", args.component_ref);
            return 4;
        }
    };

    if args.json {
        println!("{}", format_json(&dump));
    } else {
        print!("{}", format_component_text(&dump));
    }

    0
}

fn print_help() {
    println!("Batch report inspector (bareport) - Read per-component analysis reports");
    println!();
    println!("USAGE:");
    println!("    bareport tree <REPORT_DIR> [OPTIONS]");
    println!("    bareport component <REPORT_DIR> <REF> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    tree        List the component tree and the record kinds stored per component");
    println!("    component   Print every record stored for one component");
    println!();
    println!("GLOBAL OPTIONS:");
    println!("    -h, --help                 Show this help message");
    println!("    -v, --version              Show version information");
    println!();
    println!("TREE OPTIONS:");
    println!("    --json                    Emit machine-readable output");
    println!();
    println!("COMPONENT OPTIONS:");
    println!("    --source                  Include source lines (required for files)");
    println!("    --json                    Emit machine-readable output");
    println!();
    println!("EXAMPLES:");
    println!("    bareport tree target/report");
    println!("    bareport component target/report 12 --source");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_DATE: &str = env!("GIT_DATE");
    const BUILD_TARGET: &str = env!("BUILD_TARGET");

    println!("bareport {VERSION}");
    println!("Commit: {GIT_HASH} ({GIT_DATE})");
    println!("Target: {BUILD_TARGET}");

    #[cfg(debug_assertions)]
    println!("Build: debug");
    #[cfg(not(debug_assertions))]
    println!("Build: release");
}
