use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Knit an Rmd file to html by driving knitr through `Rscript -e`.
///
/// Figures land in a throwaway `figure.<tag>/` folder which is removed once
/// the render finishes, whatever the exit status. The renderer's exit status
/// is returned as-is; there is no retry.
pub fn knit(rmd_path: &Path, script_args: &[String], figure_tag: &str) -> Result<ExitStatus> {
    let figure_dir = format!("figure.{figure_tag}");
    if Path::new(&figure_dir).is_dir() {
        bail!("figure folder {figure_dir} already exists");
    }

    let status = Command::new("Rscript")
        .arg("-e")
        .arg(knitr_command(rmd_path, &figure_dir))
        .args(script_args)
        .status()
        .context("failed to run Rscript; is R installed and on PATH?")?;

    if Path::new(&figure_dir).is_dir() {
        std::fs::remove_dir_all(&figure_dir)
            .with_context(|| format!("failed to remove figure folder {figure_dir}"))?;
    }

    Ok(status)
}

fn knitr_command(rmd_path: &Path, figure_dir: &str) -> String {
    // CairoPNG keeps figure rendering headless-safe,
    // cf. https://gist.github.com/taniki/5133358
    format!(
        "library(knitr); \
         opts_chunk$set(fig.path=\"{figure_dir}/\"); \
         opts_chunk$set(fig.width=11); \
         opts_chunk$set(dev=\"CairoPNG\"); \
         knit2html(\"{rmd}\", options = c(\"toc\", markdown::markdownHTMLOptions(TRUE)))",
        rmd = rmd_path.display(),
    )
}
