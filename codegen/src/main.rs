//! Model crate code generator.
//!
//! Reads a service's Smithy JSON AST model, as configured by a TOML file
//! under `services/`, and generates the Rust sources of its model crate.
//!
//! ```text
//! cargo run -- services/mediaconvert.toml
//! cargo run -- services/waf.toml path/to/waf.json path/to/out
//! ```

mod codegen;
mod config;
mod model;
mod shapes;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let Some(config_path) = args.get(1).map(PathBuf::from) else {
        bail!("usage: autoboto-codegen <service.toml> [model.json] [output-dir]");
    };
    let mut config = config::ServiceConfig::load(&config_path)?;
    if let Some(model) = args.get(2) {
        config.model = PathBuf::from(model);
    }
    if let Some(output) = args.get(3) {
        config.output = PathBuf::from(output);
    }

    eprintln!("Generating {} ({})", config.title, config.service);
    eprintln!("Reading Smithy model from: {}", config.model.display());
    eprintln!("Writing output to: {}", config.output.display());

    // Read and parse the Smithy JSON model.
    let model_json = fs::read_to_string(&config.model)
        .with_context(|| format!("Failed to read model file: {}", config.model.display()))?;

    let smithy_model: model::SmithyModel =
        serde_json::from_str(&model_json).context("Failed to parse Smithy JSON model")?;

    eprintln!(
        "Parsed model: Smithy {}, {} shapes",
        smithy_model.smithy,
        smithy_model.shapes.len()
    );

    // Resolve shapes and types.
    let resolved = shapes::resolve_model(&smithy_model, &config)
        .context("Failed to resolve model shapes")?;

    eprintln!(
        "Resolved: {} operations, {} enums, {} shared structs, {} input structs, {} output structs, {} error structs",
        resolved.operations.len(),
        resolved.enums.len(),
        resolved.shared_structs.len(),
        resolved.input_structs.len(),
        resolved.output_structs.len(),
        resolved.error_structs.len(),
    );

    // Generate code.
    let files = codegen::generate_all(&config, &resolved).context("Failed to generate code")?;

    // Write output files.
    for (rel_path, content) in &files {
        let full_path = config.output.join(rel_path);
        ensure_parent_dir(&full_path)?;
        fs::write(&full_path, content)
            .with_context(|| format!("Failed to write {}", full_path.display()))?;
        eprintln!("  Wrote: {}", full_path.display());
    }

    eprintln!("Code generation complete. {} files written.", files.len());

    Ok(())
}

/// Ensure the parent directory of a path exists.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}
