use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::cli::GalleryArgs;
use crate::imagen::{ImageGenerator, ImagenClient, ImagenError};
use crate::merge::{module_identity, numeric_identity};
use crate::schema::{active_records, record_label};
use crate::store::Database;
use crate::synth::prompt_for_record;
use crate::util::{run_id, write_atomic};

pub struct BatchOptions<'a> {
    pub output_dir: &'a Path,
    pub aspect_ratio: &'a str,
    pub delay: Duration,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryReport {
    pub generated: usize,
    pub skipped_existing: usize,
    pub skipped_without_identity: usize,
    pub failed: usize,
    pub dry_run: usize,
}

pub fn run(args: GalleryArgs) -> Result<()> {
    let run_id = run_id("gallery");
    let db = Database::load(&args.db.db_path)?;
    let shape = db.shape()?;
    let records = active_records(&db.root)?;

    let api_key = args
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty());
    let client = match api_key {
        Some(key) => Some(
            ImagenClient::new(
                key.to_string(),
                args.model.clone(),
                args.base_url.clone(),
                Duration::from_secs(args.timeout_secs),
            )
            .context("failed to build image client")?,
        ),
        None => {
            warn!("GOOGLE_API_KEY not set; running in dry-run mode");
            None
        }
    };

    info!(
        run_id = %run_id,
        shape = shape.as_str(),
        records = records.len(),
        output_dir = %args.output_dir.display(),
        model = client.as_ref().map_or(args.model.as_str(), ImagenClient::model),
        dry_run = client.is_none(),
        "gallery requested"
    );

    let options = BatchOptions {
        output_dir: &args.output_dir,
        aspect_ratio: &args.aspect_ratio,
        delay: Duration::from_secs(args.delay_secs),
    };
    let generator = client.as_ref().map(|client| client as &dyn ImageGenerator);
    let report = run_batch(records, generator, &options);

    info!(
        generated = report.generated,
        skipped_existing = report.skipped_existing,
        skipped_without_identity = report.skipped_without_identity,
        failed = report.failed,
        dry_run = report.dry_run,
        "gallery completed"
    );
    Ok(())
}

pub fn output_path(output_dir: &Path, record: &Value) -> Option<PathBuf> {
    if let Some(id) = numeric_identity(record) {
        return Some(output_dir.join(format!("dna_{id}.png")));
    }
    module_identity(record)
        .filter(|id| !id.is_empty() && !id.contains(['/', '\\']) && !id.contains(".."))
        .map(|id| output_dir.join(format!("{}.png", id.to_lowercase())))
}

/// Without a generator every step except the remote call runs and nothing is written.
pub fn run_batch(
    records: &[Value],
    generator: Option<&dyn ImageGenerator>,
    options: &BatchOptions<'_>,
) -> GalleryReport {
    let mut report = GalleryReport::default();

    for record in records {
        let label = record_label(record);
        let Some(path) = output_path(options.output_dir, record) else {
            debug!(record = %label, "record has no usable identity; skipping");
            report.skipped_without_identity += 1;
            continue;
        };

        if path.exists() {
            debug!(record = %label, path = %path.display(), "thumbnail exists; skipping");
            report.skipped_existing += 1;
            continue;
        }

        let prompt = prompt_for_record(record);
        let Some(generator) = generator else {
            info!(
                record = %label,
                path = %path.display(),
                prompt = %prompt,
                "dry run; would request image"
            );
            report.dry_run += 1;
            continue;
        };

        match generate_one(generator, &prompt, options.aspect_ratio, &path) {
            Ok(bytes) => {
                info!(record = %label, path = %path.display(), bytes, "wrote thumbnail");
                report.generated += 1;
                if !options.delay.is_zero() {
                    thread::sleep(options.delay);
                }
            }
            Err(err) => {
                warn!(record = %label, error = %err, "image generation failed");
                report.failed += 1;
            }
        }
    }

    report
}

fn generate_one(
    generator: &dyn ImageGenerator,
    prompt: &str,
    aspect_ratio: &str,
    path: &Path,
) -> Result<usize> {
    let image = generator
        .generate(prompt, aspect_ratio, 1)?
        .into_iter()
        .next()
        .ok_or(ImagenError::Empty)?;
    write_atomic(path, &image)?;
    Ok(image.len())
}
