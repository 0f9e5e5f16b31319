use crate::graph::*;

/// A multi-line rendering of a graph with customized indentation.
///
/// Every vertex is printed on its own line, followed by one line per
/// out-neighbor.
pub struct GraphDebug<'a, G>
where
    G: Representation,
{
    graph: &'a G,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, G> GraphDebug<'a, G>
where
    G: Representation,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            init_indent: 0,
            indent_step: 2,
        }
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        for _ in 0..indention {
            write!(f, " ")?;
        }
        Ok(())
    }
}

impl<'a, G> std::fmt::Debug for GraphDebug<'a, G>
where
    G: Representation,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.graph.is_directed() {
            "directed"
        } else {
            "undirected"
        };
        self.display_indent(f, 0)?;
        writeln!(f, "{} vertices, {}", self.graph.vertex_size(), kind)?;
        for v in self.graph.iter_vertices() {
            self.display_indent(f, 0)?;
            writeln!(f, "{}", v.to_raw())?;
            for sink in self.graph.out_neighbors(&v) {
                self.display_indent(f, 1)?;
                writeln!(f, "-> {}", sink.to_raw())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;

    #[test]
    fn renders_out_neighbors() {
        let g = AdjacencyListGraph::new(3, [(0, 1), (0, 2), (2, 1)], true).unwrap();
        let trial = format!("{:?}", g.debug());
        let oracle = "3 vertices, directed\n0\n  -> 1\n  -> 2\n1\n2\n  -> 1\n";
        assert_eq!(trial, oracle);
    }

    #[test]
    fn custom_indentation() {
        let g = EdgeListGraph::new(2, [(1, 0)], true).unwrap();
        let trial = format!("{:?}", g.debug().indent(1, 3));
        let oracle = " 2 vertices, directed\n 0\n 1\n    -> 0\n";
        assert_eq!(trial, oracle);
    }
}
