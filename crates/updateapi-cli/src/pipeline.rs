//! The generation pipeline, in fixed order.
//!
//! DTO scan, API scan, generators, writes, formatters. The DTO artifacts are
//! written before the API scan runs so a broken gateway file can never block
//! them; a DTO scan failure aborts everything because every artifact depends
//! on the schema. Formatter failures are warnings only.

use crate::config::Config;
use crate::report::Summary;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::process::Command;
use updateapi_gen::{
    generate_admin_api, generate_client_api, generate_dart_dtos, generate_server_events,
    generate_ts_dtos,
};
use updateapi_scan::{ApiScan, DtoScan, scan_api_dir, scan_dto_dir};

/// Scan and rewrite every artifact, then print the summary.
pub fn generate(config: &Config) -> Result<()> {
    let summary = run(config)?;
    print!("{summary}");
    println!("\n\u{2713} Generation complete");
    Ok(())
}

/// Scan only; print or emit the summary, write nothing.
pub fn check(config: &Config, json: bool) -> Result<()> {
    let dto = scan_dto_dir(&config.server.src_dir)?;
    let api = scan_api_dir(&config.server.src_dir)?;
    let summary = summarize(&dto, &api);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("Failed to encode summary")?
        );
    } else {
        print!("{summary}");
    }
    Ok(())
}

/// Run the full pipeline, returning the summary for the caller to present.
pub fn run(config: &Config) -> Result<Summary> {
    let dto = scan_dto_dir(&config.server.src_dir)?;

    // DTO artifacts first; they must not wait on the API scan.
    write_artifact(
        &config.mobile.out_dir.join("dto.dart"),
        &generate_dart_dtos(&dto.schema),
    )?;
    write_artifact(
        &config.admin.out_dir.join("dto.ts"),
        &generate_ts_dtos(&dto.schema),
    )?;

    let api = match scan_api_dir(&config.server.src_dir) {
        Ok(api) => api,
        Err(err) => {
            run_formatter(config.mobile.formatter.as_deref(), &config.mobile.out_dir);
            run_formatter(config.admin.formatter.as_deref(), &config.admin.out_dir);
            return Err(err).context("API scan failed; DTO artifacts were still refreshed");
        }
    };

    write_artifact(
        &config.mobile.out_dir.join("server_events.dart"),
        &generate_server_events(&api.api),
    )?;
    write_artifact(
        &config.mobile.out_dir.join("client_api.dart"),
        &generate_client_api(&api.api),
    )?;
    write_artifact(
        &config.admin.out_dir.join("api.ts"),
        &generate_admin_api(&api.api),
    )?;

    run_formatter(config.mobile.formatter.as_deref(), &config.mobile.out_dir);
    run_formatter(config.admin.formatter.as_deref(), &config.admin.out_dir);

    Ok(summarize(&dto, &api))
}

fn summarize(dto: &DtoScan, api: &ApiScan) -> Summary {
    let mut diagnostics = dto.diagnostics.clone();
    diagnostics.extend(api.diagnostics.iter().cloned());
    Summary {
        records: dto.schema.record_count(),
        enums: dto.schema.enum_count(),
        promoted_unions: dto.promoted_unions,
        client_entrypoints: api.api.client_entrypoints.len(),
        server_entrypoints: api.api.server_entrypoints.len(),
        diagnostics,
    }
}

/// Write one artifact, creating its directory. I/O failures are fatal: a
/// partial artifact set would desynchronize the client contracts.
fn write_artifact(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {parent:?}"))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {path:?}"))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote artifact");
    Ok(())
}

/// Invoke a target's own formatter on its output directory. The formatter is
/// an external post-process; failing to run it never fails the run.
fn run_formatter(formatter: Option<&[String]>, out_dir: &Path) {
    let Some([program, args @ ..]) = formatter else {
        return;
    };
    match Command::new(program).args(args).arg(out_dir).status() {
        Ok(status) if status.success() => {}
        Ok(status) => {
            tracing::warn!(%program, %status, "formatter exited with failure");
        }
        Err(err) => {
            tracing::warn!(%program, %err, "failed to invoke formatter");
        }
    }
}
