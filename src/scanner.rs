// Dump Scanner
// Walks a compiler dump and emits the location graph as it goes

use std::io::Write;

use log::{debug, info, trace, warn};

use crate::config::GraphConfig;
use crate::cursor::{DumpCursor, DumpLine};
use crate::dot::{DotWriter, GraphStats};
use crate::error::GrapherError;
use crate::record::{AlanDumpParser, Marker, RecordParser};

/// How a scan ended.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// The dump was scanned to the end and a graph was written.
    Graph(GraphStats),
    /// No `ADV:` marker was found; the compiler printed a message instead of
    /// a dump. The message was written verbatim and no graph was produced.
    CompilerMessage(String),
}

#[derive(Debug)]
enum State {
    Preamble { message: String },
    SeekInstance,
    SeekId { record_start: usize },
    SeekParent { id_line: DumpLine },
    SeekExitOrNext { id: String },
    CollectDirections { id: String, directions: Vec<String> },
    ReadTarget { id: String, directions: Vec<String> },
}

pub struct DumpScanner<P: RecordParser, W: Write> {
    parser: P,
    writer: DotWriter<W>,
}

impl<W: Write> DumpScanner<AlanDumpParser, W> {
    pub fn new(out: W) -> Self {
        DumpScanner::with_parser(AlanDumpParser::new(), DotWriter::new(out))
    }

    pub fn with_config(out: W, config: GraphConfig) -> Self {
        DumpScanner::with_parser(AlanDumpParser::new(), DotWriter::with_config(out, config))
    }
}

impl<P: RecordParser, W: Write> DumpScanner<P, W> {
    pub fn with_parser(parser: P, writer: DotWriter<W>) -> Self {
        DumpScanner { parser, writer }
    }

    pub fn into_writer(self) -> DotWriter<W> {
        self.writer
    }

    /// Scan the whole dump. Running out of lines anywhere after the preamble
    /// is the normal end of the document and closes the graph.
    pub fn scan(&mut self, mut cursor: DumpCursor) -> Result<ScanOutcome, GrapherError> {
        let Some(mut line) = cursor.next() else {
            return self.compiler_message(String::new());
        };
        let mut state = State::Preamble {
            message: line.text.clone(),
        };

        loop {
            trace!("line {}: {:?}", line.number, state);
            state = match state {
                State::Preamble { mut message } => {
                    if self.parser.has_marker(&line, Marker::Adventure) {
                        debug!("Dump starts at line {}", line.number);
                        self.writer.header()?;
                        State::SeekInstance
                    } else {
                        let Some(next) = cursor.next() else {
                            return self.compiler_message(message);
                        };
                        message.push('\n');
                        message.push_str(&next.text);
                        line = next;
                        State::Preamble { message }
                    }
                }

                State::SeekInstance => {
                    if self.parser.has_marker(&line, Marker::Instance) {
                        State::SeekId {
                            record_start: line.number,
                        }
                    } else {
                        let Some(next) = cursor.next() else {
                            return self.finish();
                        };
                        line = next;
                        State::SeekInstance
                    }
                }

                State::SeekId { record_start } => {
                    // id: and parentId: must both precede the next INS:
                    if line.number != record_start
                        && self.parser.has_marker(&line, Marker::Instance)
                    {
                        debug!("Instance at line {} has no id; skipped", record_start);
                        State::SeekId {
                            record_start: line.number,
                        }
                    } else {
                        let found = self.parser.has_marker(&line, Marker::Id);
                        let id_line = found.then(|| line.clone());
                        let Some(next) = cursor.next() else {
                            return self.finish();
                        };
                        line = next;
                        match id_line {
                            Some(id_line) => State::SeekParent { id_line },
                            None => State::SeekId { record_start },
                        }
                    }
                }

                State::SeekParent { id_line } => {
                    if self.parser.has_marker(&line, Marker::Instance) {
                        debug!(
                            "Instance at line {} has no parentId; skipped",
                            id_line.number
                        );
                        State::SeekId {
                            record_start: line.number,
                        }
                    } else if !self.parser.has_marker(&line, Marker::ParentId) {
                        let Some(next) = cursor.next() else {
                            return self.finish();
                        };
                        line = next;
                        State::SeekParent { id_line }
                    } else if !self.parser.names_location(&line) {
                        debug!(
                            "Skipping instance at line {}: parent is not location",
                            id_line.number
                        );
                        State::SeekInstance
                    } else {
                        let id = self.parser.instance_id(&id_line)?;
                        debug!("Location '{}' at line {}", id, id_line.number);
                        self.writer.node(&id)?;
                        let Some(next) = cursor.next() else {
                            return self.finish();
                        };
                        line = next;
                        State::SeekExitOrNext { id }
                    }
                }

                State::SeekExitOrNext { id } => {
                    if self.parser.has_marker(&line, Marker::Instance) {
                        State::SeekInstance
                    } else if self.parser.has_marker(&line, Marker::Direction) {
                        State::CollectDirections {
                            id,
                            directions: Vec::new(),
                        }
                    } else {
                        let Some(next) = cursor.next() else {
                            return self.finish();
                        };
                        line = next;
                        State::SeekExitOrNext { id }
                    }
                }

                State::CollectDirections { id, mut directions } => {
                    if self.parser.has_marker(&line, Marker::Direction) {
                        directions.push(self.parser.direction(&line)?);
                        let Some(next) = cursor.next() else {
                            return self.finish();
                        };
                        line = next;
                        State::CollectDirections { id, directions }
                    } else {
                        State::ReadTarget { id, directions }
                    }
                }

                State::ReadTarget { id, directions } => {
                    let target_line = line;
                    let Some(next) = cursor.next() else {
                        debug!(
                            "Dump ended before exit target at line {} was complete; exit dropped",
                            target_line.number
                        );
                        return self.finish();
                    };
                    line = next;
                    let continuation = self.parser.is_wrapped(&line).then_some(&line);
                    let target = self.parser.exit_target(&target_line, continuation)?;
                    for direction in &directions {
                        trace!("Exit {} -[{}]-> {}", id, direction, target);
                        self.writer.edge(&id, direction, &target)?;
                    }
                    State::SeekExitOrNext { id }
                }
            };
        }
    }

    fn finish(&mut self) -> Result<ScanOutcome, GrapherError> {
        self.writer.trailer()?;
        let stats = self.writer.stats();
        info!(
            "Location graph complete: {} locations, {} exits",
            stats.nodes, stats.edges
        );
        Ok(ScanOutcome::Graph(stats))
    }

    fn compiler_message(&mut self, message: String) -> Result<ScanOutcome, GrapherError> {
        warn!("No ADV: marker in compiler output; printing compiler message instead of a graph");
        self.writer.message(&message)?;
        Ok(ScanOutcome::CompilerMessage(message))
    }
}

/// Scan `dump` with the Alan dump layout and default graph attributes,
/// writing the graph to `out`.
pub fn scan_dump<W: Write>(dump: &str, out: W) -> Result<ScanOutcome, GrapherError> {
    DumpScanner::new(out).scan(DumpCursor::from_text(dump))
}
