//! Exporter trait and format selection.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use terrace_terrain::RenderBuffers;
use terrace_types::{TerraceError, TerraceResult};

use crate::json::JsonExporter;
use crate::obj::ObjExporter;

/// Writes render buffers in one file format.
pub trait TerrainExporter {
    /// Short identifier for logs.
    fn name(&self) -> &str;

    /// File extension, without the dot.
    fn extension(&self) -> &str;

    /// Writes `buffers` to `writer`.
    fn write(&self, buffers: &RenderBuffers, writer: &mut dyn Write) -> TerraceResult<()>;

    /// Writes `buffers` to a new file at `path`.
    fn export_to_path(&self, buffers: &RenderBuffers, path: &Path) -> TerraceResult<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write(buffers, &mut out)?;
        out.flush()?;
        tracing::info!(
            exporter = self.name(),
            path = %path.display(),
            vertices = buffers.vertex_count(),
            "terrain exported"
        );
        Ok(())
    }
}

/// Built-in export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Obj,
}

impl ExportFormat {
    pub fn exporter(self) -> Box<dyn TerrainExporter> {
        match self {
            ExportFormat::Json => Box::new(JsonExporter::default()),
            ExportFormat::Obj => Box::new(ObjExporter),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => f.write_str("json"),
            ExportFormat::Obj => f.write_str("obj"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = TerraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "obj" => Ok(ExportFormat::Obj),
            other => Err(TerraceError::Configuration(format!(
                "Unknown export format '{other}'. Available: json, obj"
            ))),
        }
    }
}
