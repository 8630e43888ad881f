// External Alan Compiler
// Runs the compiler in dump mode and captures its standard output

use std::path::Path;
use std::process::{Command, Stdio};

use log::debug;

use crate::config::CompilerConfig;
use crate::error::GrapherError;

pub struct AlanCompiler {
    program: String,
    dump_args: Vec<String>,
}

impl Default for AlanCompiler {
    fn default() -> Self {
        Self::from_config(&CompilerConfig::default())
    }
}

impl AlanCompiler {
    pub fn from_config(config: &CompilerConfig) -> Self {
        AlanCompiler {
            program: config.program.clone(),
            dump_args: config.dump_args.clone(),
        }
    }

    /// Run `<program> <dump args> <source>` and return everything it wrote
    /// to stdout. The exit status is not inspected: a failed compile still
    /// prints its diagnostics, which the scanner reports. Stderr passes
    /// through to the terminal.
    pub fn dump(&self, source: &Path) -> Result<String, GrapherError> {
        debug!(
            "Running {} {} {}",
            self.program,
            self.dump_args.join(" "),
            source.display()
        );
        let output = Command::new(&self.program)
            .args(&self.dump_args)
            .arg(source)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| GrapherError::CompilerLaunch(self.program.clone(), e.to_string()))?;

        debug!(
            "{} exited with {}, {} bytes of output",
            self.program,
            output.status,
            output.stdout.len()
        );
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
