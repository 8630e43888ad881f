// alangrapher - location graph extraction for Alan adventures
// Scans the compiler's `-dump ci` output and writes a Graphviz digraph

#[macro_use]
extern crate lazy_static;

pub mod compiler;
pub mod config;
pub mod cursor;
pub mod directions;
pub mod dot;
pub mod error;
pub mod record;
pub mod scanner;


pub use error::GrapherError;
pub use scanner::{scan_dump, DumpScanner, ScanOutcome};
