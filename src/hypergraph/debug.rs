use super::HypergraphView;

/// A default implementation of inspecting into a hypergraph with customized
/// indentation, in the spirit of the plain graph debug dumper this crate
/// grew out of.
pub struct HypergraphDebug<'a, G>
where
    G: HypergraphView,
{
    graph: &'a G,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, G> HypergraphDebug<'a, G>
where
    G: HypergraphView,
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

impl<'a, G> std::fmt::Debug for HypergraphDebug<'a, G>
where
    G: HypergraphView,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.vertices() {
            self.display_indent(f, 0)?;
            writeln!(f, "{:?} nbrs={:?}", v, self.graph.neighborhood(v))?;
        }
        for e in self.graph.edges() {
            self.display_indent(f, 1)?;
            writeln!(f, "{:?}: {:?}", e.id(), e.elements())?;
        }
        Ok(())
    }
}
