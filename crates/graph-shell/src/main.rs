use std::{
    error::Error,
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
};

use clap::{Parser, ValueEnum};
use graph_adt::{AdjacencyListGraph, AdjacencyMatrixGraph, EdgeListGraph, Graph};
use log::info;
use shell::Shell;

mod command;
mod shell;

#[derive(Parser)]
#[command(version, about = "Line based shell for editing and querying a graph")]
struct Cli {
    /// Storage representation of the graph.
    #[arg(short, long, value_enum, default_value_t = Representation::List)]
    representation: Representation,

    /// Read commands from <FILE> instead of stdin.
    #[arg(short, long, value_name = "FILE")]
    script: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Representation {
    /// Neighbor sequence per vertex
    List,
    /// Square 0/1 matrix indexed by vertex position
    Matrix,
    /// Flat sequence of (origin, destination) pairs
    Edges,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => {
            info!("Reading commands from {:?}", path);
            Box::new(BufReader::new(File::open(path)?))
        }
        None => Box::new(io::stdin().lock()),
    };
    let out = io::stdout().lock();

    info!("Using {:?} representation", cli.representation);

    match cli.representation {
        Representation::List => run_shell::<AdjacencyListGraph<String>>(input, out),
        Representation::Matrix => run_shell::<AdjacencyMatrixGraph<String>>(input, out),
        Representation::Edges => run_shell::<EdgeListGraph<String>>(input, out),
    }
}

fn run_shell<G>(input: impl BufRead, out: impl Write) -> Result<(), Box<dyn Error>>
where
    G: Graph<V = String> + Display,
{
    let mut shell = Shell::<G, _>::new(out);
    shell.run(input)?;

    info!(
        "Leaving shell (vertex_count: {}, edge_count: {})",
        shell.graph().vertex_count(),
        shell.graph().edge_count()
    );

    Ok(())
}
