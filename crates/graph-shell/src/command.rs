use std::{error::Error, fmt::Display, str::FromStr};

use graph_adt::{
    GraphError,
    types::{Direction, parse_path},
};

pub const HELP: &str = "\
commands:
  show                                  print the graph
  insert-vertex <V>                     add a vertex
  insert-edge <O> <D> [--undirected]    add an edge, inserting missing vertices
  remove-vertex <V>                     remove a vertex and its edges
  remove-edge <O> <D> [--undirected]    remove an edge
  neighbors <V>                         list the outgoing neighbors of a vertex
  edge-exists <O> <D>                   check for the edge O -> D
  degrees [--json]                      in, out and total degree of every vertex
  path <V1>,<V2>,...                    check whether the walk exists
  help                                  print this message
  quit                                  leave the shell";

#[derive(Debug, PartialEq, Eq)]
pub enum ShellError {
    UnknownCommand(String),
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    UnexpectedArgument(String),
    InvalidPath(GraphError),
}

impl Error for ShellError {}

impl Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(command) => {
                write!(f, "unknown command '{}', try 'help'", command)
            }
            Self::MissingArgument { command, argument } => {
                write!(f, "'{}' is missing the argument <{}>", command, argument)
            }
            Self::UnexpectedArgument(argument) => write!(f, "unexpected argument '{}'", argument),
            Self::InvalidPath(err) => write!(f, "invalid path: {}", err),
        }
    }
}

impl From<GraphError> for ShellError {
    fn from(value: GraphError) -> Self {
        Self::InvalidPath(value)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Show,
    InsertVertex(String),
    InsertEdge {
        origin: String,
        destination: String,
        direction: Direction,
    },
    RemoveVertex(String),
    RemoveEdge {
        origin: String,
        destination: String,
        direction: Direction,
    },
    Neighbors(String),
    EdgeExists {
        origin: String,
        destination: String,
    },
    Degrees {
        json: bool,
    },
    Path(Vec<String>),
    Help,
    Quit,
}

struct Arguments<I> {
    command: &'static str,
    tokens: I,
}

impl<'a, I: Iterator<Item = &'a str>> Arguments<I> {
    fn new(command: &'static str, tokens: I) -> Self {
        Self { command, tokens }
    }

    fn required(&mut self, argument: &'static str) -> Result<String, ShellError> {
        self.tokens
            .next()
            .map(str::to_owned)
            .ok_or(ShellError::MissingArgument {
                command: self.command,
                argument,
            })
    }

    fn flag(&mut self, long: &str, short: &str) -> Result<bool, ShellError> {
        match self.tokens.next() {
            None => Ok(false),
            Some(token) if token == long || token == short => Ok(true),
            Some(token) => Err(ShellError::UnexpectedArgument(token.to_owned())),
        }
    }

    fn end(mut self) -> Result<(), ShellError> {
        match self.tokens.next() {
            None => Ok(()),
            Some(token) => Err(ShellError::UnexpectedArgument(token.to_owned())),
        }
    }

    fn vertex(mut self) -> Result<String, ShellError> {
        let vertex = self.required("V")?;
        self.end()?;

        Ok(vertex)
    }

    fn edge(mut self) -> Result<(String, String, Direction), ShellError> {
        let origin = self.required("O")?;
        let destination = self.required("D")?;
        let direction = Direction::from(self.flag("--undirected", "-u")?);
        self.end()?;

        Ok((origin, destination, direction))
    }
}

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();

        let command = match tokens.next().unwrap_or_default() {
            "show" => {
                Arguments::new("show", tokens).end()?;
                Command::Show
            }
            "insert-vertex" => {
                Command::InsertVertex(Arguments::new("insert-vertex", tokens).vertex()?)
            }
            "insert-edge" => {
                let (origin, destination, direction) =
                    Arguments::new("insert-edge", tokens).edge()?;
                Command::InsertEdge {
                    origin,
                    destination,
                    direction,
                }
            }
            "remove-vertex" => {
                Command::RemoveVertex(Arguments::new("remove-vertex", tokens).vertex()?)
            }
            "remove-edge" => {
                let (origin, destination, direction) =
                    Arguments::new("remove-edge", tokens).edge()?;
                Command::RemoveEdge {
                    origin,
                    destination,
                    direction,
                }
            }
            "neighbors" => Command::Neighbors(Arguments::new("neighbors", tokens).vertex()?),
            "edge-exists" => {
                let mut args = Arguments::new("edge-exists", tokens);
                let origin = args.required("O")?;
                let destination = args.required("D")?;
                args.end()?;
                Command::EdgeExists {
                    origin,
                    destination,
                }
            }
            "degrees" => {
                let mut args = Arguments::new("degrees", tokens);
                let json = args.flag("--json", "-j")?;
                args.end()?;
                Command::Degrees { json }
            }
            // Vertex names may be separated by ", " as well as ",".
            "path" => Command::Path(parse_path(&tokens.collect::<Vec<_>>().join(" "))?),
            "help" => {
                Arguments::new("help", tokens).end()?;
                Command::Help
            }
            "quit" | "exit" => Command::Quit,
            unknown => return Err(ShellError::UnknownCommand(unknown.to_owned())),
        };

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_edges() {
        assert_eq!(
            "insert-edge A B".parse::<Command>(),
            Ok(Command::InsertEdge {
                origin: "A".to_string(),
                destination: "B".to_string(),
                direction: Direction::Directed,
            })
        );
        assert_eq!(
            "remove-edge A B --undirected".parse::<Command>(),
            Ok(Command::RemoveEdge {
                origin: "A".to_string(),
                destination: "B".to_string(),
                direction: Direction::Undirected,
            })
        );
    }

    #[test]
    fn parse_path() {
        assert_eq!(
            "path A, B,C".parse::<Command>(),
            Ok(Command::Path(vec![
                "A".to_string(),
                "B".to_string(),
                "C".to_string()
            ]))
        );
        assert_eq!("path".parse::<Command>(), Ok(Command::Path(vec![])));
        assert_eq!(
            "path A,,C".parse::<Command>(),
            Err(ShellError::InvalidPath(GraphError::EmptyVertex(1)))
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "insert-edge A".parse::<Command>(),
            Err(ShellError::MissingArgument {
                command: "insert-edge",
                argument: "D",
            })
        );
        assert_eq!(
            "degrees --yaml".parse::<Command>(),
            Err(ShellError::UnexpectedArgument("--yaml".to_string()))
        );
        assert_eq!(
            "show me".parse::<Command>(),
            Err(ShellError::UnexpectedArgument("me".to_string()))
        );
        assert_eq!(
            "traverse A".parse::<Command>(),
            Err(ShellError::UnknownCommand("traverse".to_string()))
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ShellError::MissingArgument {
                command: "neighbors",
                argument: "V",
            }
            .to_string(),
            "'neighbors' is missing the argument <V>"
        );
        assert_eq!(
            ShellError::from(GraphError::EmptyVertex(0)).to_string(),
            "invalid path: vertex at position 0 has an empty name"
        );
    }
}
