// Dump Record Parser
// Extracts identifiers, directions and exit targets from dump lines

use crate::cursor::DumpLine;
use crate::error::GrapherError;

/// Labeled markers that structure an instance dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Adventure,
    Instance,
    Id,
    ParentId,
    Direction,
}

impl Marker {
    pub fn text(self) -> &'static str {
        match self {
            Marker::Adventure => "ADV:",
            Marker::Instance => "INS:",
            Marker::Id => "id:",
            Marker::ParentId => "parentId:",
            Marker::Direction => "DIRECTION",
        }
    }
}

/// Knowledge of one dump format's field layout. The scanner only asks
/// questions through this trait, so format drift stays in the parser.
pub trait RecordParser {
    fn has_marker(&self, line: &DumpLine, marker: Marker) -> bool {
        line.contains(marker.text())
    }

    /// Does this `parentId:` line name the location class?
    fn names_location(&self, parent_line: &DumpLine) -> bool;

    fn instance_id(&self, id_line: &DumpLine) -> Result<String, GrapherError>;

    fn direction(&self, direction_line: &DumpLine) -> Result<String, GrapherError>;

    /// True when `next` continues a target line the dump tool wrapped.
    fn is_wrapped(&self, next: &DumpLine) -> bool;

    fn exit_target(
        &self,
        target_line: &DumpLine,
        continuation: Option<&DumpLine>,
    ) -> Result<String, GrapherError>;
}

/// Field layout of `alan -dump ci` output.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlanDumpParser;

pub const ID_FIELD: usize = 7;
pub const DIRECTION_FIELD: usize = 11;
pub const TARGET_FIELD: usize = 11;

const LOCATION_CLASS: &str = "location";
const INDENT_CHAR: char = '.';

impl AlanDumpParser {
    pub fn new() -> Self {
        AlanDumpParser
    }
}

/// Take whitespace field `index` of `text`, cut it at the first `:` and
/// strip surrounding quotes.
fn field(text: &str, index: usize, line_number: usize) -> Result<String, GrapherError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let raw = fields.get(index).ok_or_else(|| GrapherError::MalformedDump {
        line: line_number,
        expected_fields: index + 1,
        found_fields: fields.len(),
        text: text.trim().to_string(),
    })?;
    let head = raw.split(':').next().unwrap_or_default();
    Ok(head.trim_matches('"').to_string())
}

impl RecordParser for AlanDumpParser {
    fn names_location(&self, parent_line: &DumpLine) -> bool {
        parent_line.contains(LOCATION_CLASS)
    }

    fn instance_id(&self, id_line: &DumpLine) -> Result<String, GrapherError> {
        field(&id_line.text, ID_FIELD, id_line.number)
    }

    fn direction(&self, direction_line: &DumpLine) -> Result<String, GrapherError> {
        field(&direction_line.text, DIRECTION_FIELD, direction_line.number)
    }

    fn is_wrapped(&self, next: &DumpLine) -> bool {
        !next.text.starts_with(INDENT_CHAR)
    }

    fn exit_target(
        &self,
        target_line: &DumpLine,
        continuation: Option<&DumpLine>,
    ) -> Result<String, GrapherError> {
        let mut target = target_line.text.trim_end_matches(['\n', '\r']).to_string();
        if let Some(next) = continuation {
            target.push_str(next.text.trim());
        }
        field(&target, TARGET_FIELD, target_line.number)
    }
}
