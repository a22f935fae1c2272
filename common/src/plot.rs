use core::fmt::Debug;
use std::path::{Path, PathBuf};

use dyn_clone::{DynClone, clone_trait_object};
use eyre::{Context, Result};
use tracing::debug;

use crate::{
    config::Settings,
    dataset::{Dataset, DatasetError},
};

#[typetag::serde(tag = "type")]
#[async_trait::async_trait]
pub trait Plot: Debug + DynClone + Send + Sync {
    /// Name of the plot, for identification
    fn name(&self) -> &'static str;
    /// Output filename inside the results directory
    fn filename(&self) -> &str;
    /// Renders the plot and writes it to `results_dir`
    ///
    /// Arguments:
    /// * `dataset` - The parsed benchmark results
    /// * `results_dir` - The directory holding the results CSV, ie. /results
    /// * `settings` - The settings from the config
    ///
    /// Returns the path of the written image
    async fn plot(
        &self,
        dataset: &Dataset,
        results_dir: &Path,
        settings: &Settings,
    ) -> Result<PathBuf>;
}
clone_trait_object!(Plot);

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The results CSV does not exist, nothing was written
    MissingInput(PathBuf),
    /// Paths of the written plots, in plot order
    Rendered(Vec<PathBuf>),
}

/// Loads the results CSV from `results_dir` and renders every plot in order
///
/// A missing CSV is reported on stdout and is not an error.
pub async fn generate(
    plots: &[Box<dyn Plot>],
    results_dir: &Path,
    settings: &Settings,
) -> Result<Outcome> {
    let input = results_dir.join(&settings.input);
    let dataset = match Dataset::load(&input).await {
        Ok(dataset) => dataset,
        Err(err @ DatasetError::MissingInput { .. }) => {
            println!("Error: {err}");
            return Ok(Outcome::MissingInput(input));
        }
        Err(err) => return Err(err).context(format!("Load {}", input.display())),
    };

    let mut written = Vec::with_capacity(plots.len());
    for plot in plots {
        debug!("Rendering {}", plot.name());
        let path = plot
            .plot(&dataset, results_dir, settings)
            .await
            .context(format!("Render {}", plot.name()))?;
        written.push(path);
    }
    Ok(Outcome::Rendered(written))
}
