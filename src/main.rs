use clap::Parser;
use safexpr::{
    evaluate_str,
    interpreter::{registry::Registry, validator::Limits},
};

/// safexpr evaluates a mathematical expression against the standard
/// registry of functions and constants.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maximum expression tree depth.
    #[arg(long, default_value_t = Limits::default().max_depth)]
    max_depth: usize,

    /// Maximum expression tree node count.
    #[arg(long, default_value_t = Limits::default().max_nodes)]
    max_nodes: usize,

    expression: String,
}

fn main() {
    let args = Args::parse();
    let registry = Registry::standard();
    let limits = Limits { max_depth: args.max_depth,
                          max_nodes: args.max_nodes, };

    match evaluate_str(&args.expression, &registry, &limits) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
