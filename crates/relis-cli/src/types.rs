use std::path::PathBuf;

use relis_model::ExportConfig;
use relis_sam::Assembly;

/// Inputs of one `model` run.
#[derive(Debug, Clone, Default)]
pub struct ModelRequest {
    pub schema: PathBuf,
    pub config: Option<PathBuf>,
    pub project: Option<String>,
    /// Render context destination; `None` returns it in [`ModelRun::rendered`].
    pub output: Option<PathBuf>,
    pub summary_only: bool,
}

#[derive(Debug)]
pub struct ModelRun {
    pub config: ExportConfig,
    pub assembly: Assembly,
    /// Where the render context was written.
    pub output: Option<PathBuf>,
    /// Render context JSON when no output file was requested.
    pub rendered: Option<String>,
}
