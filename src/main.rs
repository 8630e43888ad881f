// alangrapher - extract the location graph from an Alan game
// Runs the Alan compiler in dump mode and prints a Graphviz digraph

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use alangrapher::compiler::AlanCompiler;
use alangrapher::config::GrapherConfig;
use alangrapher::cursor::DumpCursor;
use alangrapher::{DumpScanner, GrapherError, ScanOutcome};
use log::{debug, info};

#[derive(Debug, Default)]
struct Options {
    source: Option<PathBuf>,
    compiler: Option<String>,
    dump: Option<PathBuf>,
    config: Option<PathBuf>,
    help: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("alangrapher");

    // No arguments is a request for help, not an error
    if args.len() < 2 {
        print_banner(program);
        return;
    }

    let options = match parse_args(&args[1..]) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!();
            eprintln!("Usage: {} [options] <alan source file>", program);
            process::exit(1);
        }
    };

    if options.help {
        print_banner(program);
        print_options();
        return;
    }

    if let Err(err) = run(&options) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Result<Options, GrapherError> {
    let mut options = Options::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--compiler" => {
                options.compiler = Some(option_value(args, i)?.to_string());
                i += 2;
            }
            "--dump" => {
                options.dump = Some(PathBuf::from(option_value(args, i)?));
                i += 2;
            }
            "--config" => {
                options.config = Some(PathBuf::from(option_value(args, i)?));
                i += 2;
            }
            "-h" | "--help" => {
                options.help = true;
                i += 1;
            }
            arg if arg.starts_with('-') => {
                return Err(GrapherError::Usage(format!("Unknown option '{}'", arg)));
            }
            arg => {
                if options.source.is_some() {
                    return Err(GrapherError::Usage(
                        "Multiple source files specified".to_string(),
                    ));
                }
                options.source = Some(PathBuf::from(arg));
                i += 1;
            }
        }
    }

    if !options.help && options.source.is_none() && options.dump.is_none() {
        return Err(GrapherError::Usage("No source file specified".to_string()));
    }
    Ok(options)
}

fn option_value(args: &[String], i: usize) -> Result<&str, GrapherError> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| GrapherError::Usage(format!("{} requires a value", args[i])))
}

fn run(options: &Options) -> Result<(), GrapherError> {
    let mut config = GrapherConfig::discover(options.config.as_deref())?;
    if let Some(compiler) = &options.compiler {
        config.compiler.program = compiler.clone();
    }

    let dump = match (&options.dump, &options.source) {
        (Some(dump_path), _) => {
            debug!("Reading saved dump {}", dump_path.display());
            fs::read_to_string(dump_path).map_err(|e| {
                GrapherError::Io(format!("cannot read '{}': {}", dump_path.display(), e))
            })?
        }
        (None, Some(source)) => AlanCompiler::from_config(&config.compiler).dump(source)?,
        (None, None) => {
            return Err(GrapherError::Usage("No source file specified".to_string()));
        }
    };

    let stdout = io::stdout();
    let mut scanner = DumpScanner::with_config(stdout.lock(), config.graph);
    match scanner.scan(DumpCursor::from_text(&dump))? {
        ScanOutcome::Graph(stats) => {
            info!("Wrote {} locations and {} exits", stats.nodes, stats.edges);
        }
        ScanOutcome::CompilerMessage(_) => {
            info!("Compiler produced no dump");
        }
    }
    Ok(())
}

fn print_banner(program: &str) {
    println!(
        "{} - a program to extract location graph data from an Alan game",
        program
    );
    println!();
    println!("Usage: {} <alan source file>", program);
}

fn print_options() {
    println!();
    println!("Options:");
    println!("  -c, --compiler <path>   Alan compiler to run (default: alan)");
    println!("      --dump <file>       Read a saved dump instead of running the compiler");
    println!("      --config <file>     Configuration file (default: ./alangrapher.toml)");
    println!("  -h, --help              Show this help message");
}
