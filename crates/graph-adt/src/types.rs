use crate::GraphError;

/// Mode of a single edge mutation. Not stored by any graph.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Default)]
pub enum Direction {
    #[default]
    Directed,
    Undirected,
}

impl Direction {
    pub fn is_undirected(&self) -> bool {
        matches!(self, Direction::Undirected)
    }
}

impl From<bool> for Direction {
    /// `true` selects [`Direction::Undirected`].
    fn from(undirected: bool) -> Self {
        if undirected {
            Direction::Undirected
        } else {
            Direction::Directed
        }
    }
}

/// Splits a comma separated list of vertex names, e.g. `"A, B,C"`.
///
/// An empty input is the empty path.
pub fn parse_path(input: &str) -> Result<Vec<String>, GraphError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(',')
        .enumerate()
        .map(|(position, name)| {
            let name = name.trim();
            if name.is_empty() {
                Err(GraphError::EmptyVertex(position))
            } else {
                Ok(name.to_owned())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_from_flag() {
        assert_eq!(Direction::from(true), Direction::Undirected);
        assert_eq!(Direction::from(false), Direction::Directed);
        assert_eq!(Direction::default(), Direction::Directed);
    }

    #[test]
    fn path_from_string() {
        assert_eq!(parse_path("A, B,C").unwrap(), vec!["A", "B", "C"]);
        assert_eq!(parse_path("  ").unwrap(), Vec::<String>::new());
        assert_eq!(parse_path("X").unwrap(), vec!["X"]);
    }

    #[test]
    fn path_with_empty_vertex() {
        assert_eq!(parse_path("A,,C"), Err(GraphError::EmptyVertex(1)));
        assert_eq!(parse_path("A,B,"), Err(GraphError::EmptyVertex(2)));
    }
}
