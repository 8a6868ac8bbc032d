use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use relis_catalog::{CatalogError, load_default_export_config, load_export_config, load_schema};
use relis_model::{ExportConfig, RenderContext, SamError, StatisticalFunction};
use relis_sam::{Assembly, assemble};

use crate::types::{ModelRequest, ModelRun};

/// Load the export configuration, falling back to the embedded default.
pub fn load_config(path: Option<&Path>, project: Option<&str>) -> Result<ExportConfig> {
    let config = match path {
        Some(path) => load_export_config(path)
            .with_context(|| format!("load export configuration {}", path.display()))?,
        None => load_default_export_config().context("load embedded export configuration")?,
    };
    match project {
        Some(project) => config
            .with_project_name(project)
            .context("apply project name"),
        None => Ok(config),
    }
}

pub fn run_model(request: &ModelRequest) -> Result<ModelRun> {
    let config = load_config(request.config.as_deref(), request.project.as_deref())?;
    let span = info_span!("model", project = %config.environment().project_name);
    let _guard = span.enter();

    let schema = load_schema(&request.schema)
        .with_context(|| format!("load schema snapshot {}", request.schema.display()))?;
    let assembly = assemble(schema, &config);

    let mut run = ModelRun {
        config,
        assembly,
        output: None,
        rendered: None,
    };
    if request.summary_only {
        return Ok(run);
    }

    let rendered = render_context_json(&run.assembly, &run.config)?;
    match &request.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("write render context {}", path.display()))?;
            info!(path = %path.display(), "wrote render context");
            run.output = Some(path.clone());
        }
        None => run.rendered = Some(rendered),
    }
    Ok(run)
}

pub fn run_catalog(config: Option<&Path>) -> Result<Vec<StatisticalFunction>> {
    let config = load_config(config, None)?;
    Ok(config.statistical_catalog().to_vec())
}

/// Serialize what the code-generation templates receive.
pub fn render_context_json(assembly: &Assembly, config: &ExportConfig) -> Result<String> {
    let context = RenderContext::new(&assembly.sam, config);
    serde_json::to_string_pretty(&context).context("serialize render context")
}

/// True when the failure comes from the export configuration rather than the schema.
pub fn is_configuration_error(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        cause
            .downcast_ref::<CatalogError>()
            .is_some_and(CatalogError::is_configuration)
            || cause
                .downcast_ref::<SamError>()
                .is_some_and(SamError::is_configuration)
    })
}
