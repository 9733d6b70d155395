use crate::{
    catalog::{self, ConversionTask},
    magick::{Magick, Options},
};
use std::path::Path;

/// Converts every catalog entry under `base_dir` into the fixed output
/// directories, one entry at a time. A failing entry is logged and skipped;
/// the corresponding output file is simply left missing or stale.
pub async fn generate(magick: &Magick, base_dir: &Path) -> eyre::Result<()> {
    tokio::fs::create_dir_all(catalog::ICONS_OUT_DIR).await?;
    tokio::fs::create_dir_all(catalog::SYMBOLS_OUT_DIR).await?;

    tracing::info!(
        "reading material design icons/symbols from base directory {}",
        base_dir.display()
    );

    let tasks = catalog::all_tasks(base_dir);
    let mut failed = 0;
    for task in &tasks {
        if let Err(err) = convert_one(magick, task).await {
            tracing::warn!("failed to convert {}: {}", task.source.display(), err);
            failed += 1;
        }
    }

    let missing = verify_outputs(&tasks).await;
    if failed == 0 && missing == 0 {
        tracing::info!("converted {} icons/symbols", tasks.len());
    } else {
        tracing::warn!(
            "converted {} of {} icons/symbols, {} outputs missing or empty",
            tasks.len() - failed,
            tasks.len(),
            missing
        );
    }
    Ok(())
}

async fn convert_one(magick: &Magick, task: &ConversionTask) -> Result<(), crate::magick::Error> {
    tracing::info!("converting {}", task.output.display());
    magick
        .rasterize(&task.source, &task.output, &Options::inherit_output())?
        .check_wait()
        .await?;
    magick
        .strip_metadata(&task.output, &Options::inherit_output())?
        .check_wait()
        .await?;
    Ok(())
}

/// Post-run check that every expected output exists and is non-empty.
/// Returns the number of outputs that are not.
async fn verify_outputs(tasks: &[ConversionTask]) -> usize {
    let mut missing = 0;
    for task in tasks {
        match tokio::fs::metadata(&task.output).await {
            Ok(metadata) if metadata.len() > 0 => {}
            Ok(_) => {
                tracing::warn!("output {} is empty", task.output.display());
                missing += 1;
            }
            Err(_) => {
                tracing::warn!("output {} was not produced", task.output.display());
                missing += 1;
            }
        }
    }
    missing
}
