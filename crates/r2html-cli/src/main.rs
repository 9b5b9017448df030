use anyhow::{Context, Result};
use r2html_config::Config;
use r2html_engine::{convert, io, random_tag};
use std::path::{Path, PathBuf};
use std::{env, fs, process};

mod render;

struct Args {
    script: PathBuf,
    script_args: Vec<String>,
    keep_rmd: bool,
    keep_md: bool,
}

fn parse_args(argv: &[String]) -> Result<Args, String> {
    let mut keep_rmd = false;
    let mut keep_md = false;
    let mut script = None;
    let mut script_args = Vec::new();

    for arg in argv {
        // Everything after the script path is passed through to R.
        if script.is_some() {
            script_args.push(arg.clone());
            continue;
        }
        match arg.as_str() {
            "--keep-rmd" => keep_rmd = true,
            "--keep-md" => keep_md = true,
            flag if flag.starts_with("--") => return Err(format!("unknown option '{flag}'")),
            _ => script = Some(PathBuf::from(arg)),
        }
    }

    let script = script.ok_or_else(|| "no R script given".to_string())?;
    Ok(Args {
        script,
        script_args,
        keep_rmd,
        keep_md,
    })
}

fn main() {
    let argv: Vec<String> = env::args().collect();

    let args = match parse_args(&argv[1..]) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("Error: {msg}");
            eprintln!(
                "Usage: {} [--keep-rmd] [--keep-md] <script.R> [R script arguments...]",
                argv[0]
            );
            process::exit(2);
        }
    };

    match run(&args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<i32> {
    let config = Config::load()
        .context("failed to load config file")?
        .unwrap_or_default();

    let source = io::read_file(&args.script)
        .with_context(|| format!("cannot read script '{}'", args.script.display()))?;
    let conversion = convert(source.lines())?;
    if conversion.truncated {
        eprintln!("End tag detected, skipping the rest of the input");
    }

    // Random tag keeps parallel runs on the same script from clobbering
    // each other's intermediates.
    let tag = random_tag(config.tag_length);
    let rmd_path = PathBuf::from(format!("{}.{tag}.Rmd", args.script.display()));
    io::write_file(&rmd_path, &conversion.markdown)
        .with_context(|| format!("cannot write '{}'", rmd_path.display()))?;

    let status = render::knit(&rmd_path, &args.script_args, &tag)?;
    if !status.success() {
        eprintln!("Error: Rscript/knitr failed: {status}");
        return Ok(status.code().unwrap_or(1));
    }

    let html_path = replace_suffix(&rmd_path, ".Rmd", ".html");
    let md_path = replace_suffix(&rmd_path, ".Rmd", ".md");

    io::insert_after(&html_path, &config.insert_after_pattern, &config.extra_css)
        .with_context(|| format!("cannot post-process '{}'", html_path.display()))?;

    if !args.keep_rmd {
        fs::remove_file(&rmd_path)
            .with_context(|| format!("cannot remove '{}'", rmd_path.display()))?;
    }
    if !args.keep_md {
        fs::remove_file(&md_path)
            .with_context(|| format!("cannot remove '{}'", md_path.display()))?;
    }

    let html_out = output_name(&args.script);
    fs::rename(&html_path, &html_out)
        .with_context(|| format!("cannot rename html output to '{}'", html_out.display()))?;

    Ok(0)
}

/// Swap a known suffix on a path, appending the replacement when the suffix
/// is absent.
fn replace_suffix(path: &Path, suffix: &str, replacement: &str) -> PathBuf {
    let s = path.to_string_lossy();
    match s.strip_suffix(suffix) {
        Some(stem) => PathBuf::from(format!("{stem}{replacement}")),
        None => PathBuf::from(format!("{s}{replacement}")),
    }
}

/// Final html name: the script name with a trailing `.R` dropped.
fn output_name(script: &Path) -> PathBuf {
    let s = script.to_string_lossy();
    let stem = s.strip_suffix(".R").unwrap_or(&s);
    PathBuf::from(format!("{stem}.html"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_drops_r_extension() {
        assert_eq!(output_name(Path::new("analysis.R")), Path::new("analysis.html"));
    }

    #[test]
    fn output_name_keeps_unrecognized_names_whole() {
        assert_eq!(output_name(Path::new("analysis")), Path::new("analysis.html"));
    }

    #[test]
    fn replace_suffix_swaps_rmd_for_html() {
        assert_eq!(
            replace_suffix(Path::new("analysis.R.abc123.Rmd"), ".Rmd", ".html"),
            Path::new("analysis.R.abc123.html")
        );
    }

    #[test]
    fn parse_args_splits_flags_script_and_passthrough() {
        let argv: Vec<String> = ["--keep-rmd", "analysis.R", "--keep-md", "input.csv"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let args = parse_args(&argv).unwrap();
        assert!(args.keep_rmd);
        // After the script path, flags belong to the R script.
        assert!(!args.keep_md);
        assert_eq!(args.script, Path::new("analysis.R"));
        assert_eq!(args.script_args, ["--keep-md", "input.csv"]);
    }

    #[test]
    fn parse_args_requires_a_script() {
        assert!(parse_args(&["--keep-md".to_string()]).is_err());
    }

    #[test]
    fn parse_args_rejects_unknown_flags() {
        assert!(parse_args(&["--frobnicate".to_string()]).is_err());
    }
}
