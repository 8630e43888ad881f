// DOT Graph Writer
// Emits the location graph incrementally as Graphviz text

use std::io::Write;

use crate::config::GraphConfig;
use crate::directions::port_for;
use crate::error::GrapherError;

/// Counts of what has been written so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
}

pub struct DotWriter<W: Write> {
    out: W,
    config: GraphConfig,
    stats: GraphStats,
}

impl<W: Write> DotWriter<W> {
    pub fn new(out: W) -> Self {
        Self::with_config(out, GraphConfig::default())
    }

    pub fn with_config(out: W, config: GraphConfig) -> Self {
        DotWriter {
            out,
            config,
            stats: GraphStats::default(),
        }
    }

    pub fn header(&mut self) -> Result<(), GrapherError> {
        writeln!(self.out, "digraph {} {{", self.config.name)?;
        writeln!(self.out, "  rankdir={};", self.config.rankdir)?;
        writeln!(
            self.out,
            "  node [shape={};style={};]",
            self.config.node_shape, self.config.node_style
        )?;
        Ok(())
    }

    pub fn node(&mut self, id: &str) -> Result<(), GrapherError> {
        writeln!(self.out, "  {}[label=\"{}\"];", id, id)?;
        self.stats.nodes += 1;
        Ok(())
    }

    /// Edge from `source` anchored at the compass port of `direction`.
    pub fn edge(&mut self, source: &str, direction: &str, target: &str) -> Result<(), GrapherError> {
        writeln!(
            self.out,
            "  {}{} -> {} [label={}];",
            source,
            port_for(direction),
            target,
            direction
        )?;
        self.stats.edges += 1;
        Ok(())
    }

    pub fn trailer(&mut self) -> Result<(), GrapherError> {
        writeln!(self.out, "}}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Raw text, used for the compiler's own message when there is no dump.
    pub fn message(&mut self, text: &str) -> Result<(), GrapherError> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn stats(&self) -> GraphStats {
        self.stats
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
