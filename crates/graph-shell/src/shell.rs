use std::{
    error::Error,
    fmt::Display,
    io::{self, BufRead, Write},
};

use graph_adt::{Graph, graph::DegreeReport};
use log::{debug, warn};

use crate::command::{Command, HELP};

pub enum Flow {
    Continue,
    Quit,
}

/// Executes shell commands against a single graph and renders the results
/// to `out`.
pub struct Shell<G, W> {
    graph: G,
    out: W,
}

impl<G, W> Shell<G, W>
where
    G: Graph<V = String> + Display,
    W: Write,
{
    pub fn new(out: W) -> Self {
        Self {
            graph: G::default(),
            out,
        }
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Reads commands line by line until the input ends or `quit` is read.
    ///
    /// Malformed commands are reported on `out` and skipped.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<(), Box<dyn Error>> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.parse::<Command>() {
                Ok(command) => {
                    debug!("executing {:?}", command);
                    if let Flow::Quit = self.execute(command)? {
                        break;
                    }
                }
                Err(err) => {
                    warn!("rejected command '{}'", line);
                    writeln!(self.out, "error: {}", err)?;
                }
            }
        }

        self.out.flush()?;
        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> Result<Flow, Box<dyn Error>> {
        match command {
            Command::Show => write!(self.out, "{}", self.graph)?,
            Command::InsertVertex(vertex) => {
                if !self.graph.insert_vertex(vertex.clone()) {
                    writeln!(self.out, "vertex '{}' already exists", vertex)?;
                }
            }
            Command::InsertEdge {
                origin,
                destination,
                direction,
            } => {
                if !self
                    .graph
                    .insert_edge(origin.clone(), destination.clone(), direction)
                {
                    writeln!(self.out, "edge '{}' -> '{}' already exists", origin, destination)?;
                }
            }
            Command::RemoveVertex(vertex) => {
                if !self.graph.remove_vertex(&vertex) {
                    writeln!(self.out, "vertex '{}' does not exist", vertex)?;
                }
            }
            Command::RemoveEdge {
                origin,
                destination,
                direction,
            } => {
                if !self.graph.remove_edge(&origin, &destination, direction) {
                    writeln!(self.out, "edge '{}' -> '{}' does not exist", origin, destination)?;
                }
            }
            Command::Neighbors(vertex) => {
                let neighbors: Vec<&str> = self
                    .graph
                    .neighbors(&vertex)
                    .map(String::as_str)
                    .collect();

                if !self.graph.contains_vertex(&vertex) {
                    writeln!(self.out, "vertex '{}' does not exist", vertex)?;
                } else if neighbors.is_empty() {
                    writeln!(self.out, "vertex '{}' has no outgoing neighbors", vertex)?;
                } else {
                    writeln!(self.out, "neighbors of '{}': {}", vertex, neighbors.join(", "))?;
                }
            }
            Command::EdgeExists {
                origin,
                destination,
            } => {
                let state = if self.graph.edge_exists(&origin, &destination) {
                    "exists"
                } else {
                    "does not exist"
                };
                writeln!(self.out, "edge '{}' -> '{}' {}", origin, destination, state)?;
            }
            Command::Degrees { json } => {
                let degrees = self.graph.degrees();
                if json {
                    writeln!(self.out, "{}", serde_json::to_string_pretty(&degrees)?)?;
                } else {
                    write_degrees(&mut self.out, &degrees)?;
                }
            }
            Command::Path(path) => {
                let state = if self.graph.valid_path(&path) {
                    "valid"
                } else {
                    "not valid"
                };
                writeln!(self.out, "path [{}] is {}", path.join(" -> "), state)?;
            }
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }
}

fn write_degrees<W: Write>(out: &mut W, degrees: &DegreeReport<String>) -> io::Result<()> {
    if degrees.is_empty() {
        return writeln!(out, "(empty graph)");
    }

    match degrees {
        DegreeReport::Undirected(entries) => {
            for (vertex, degree) in entries {
                writeln!(out, "{}: degree {}", vertex, degree)?;
            }
        }
        DegreeReport::Directed(entries) => {
            for (vertex, degree) in entries {
                writeln!(
                    out,
                    "{}: in {}, out {}, total {}",
                    vertex,
                    degree.incoming(),
                    degree.outgoing(),
                    degree.total()
                )?;
            }
        }
    }

    Ok(())
}
