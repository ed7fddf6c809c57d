//! `generate` subcommand.
use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Render a man page for `cmd` and for every nested subcommand into
/// `output_dir`, or the current directory when none is given.
///
/// Subcommand pages are named after their full invocation, e.g.
/// `jsonlex-generate-man.1`. Returns the paths written, in generation order.
///
/// # Errors
///
/// Returns an error if the output directory or a page file cannot be created.
pub fn generate_man_pages(
    cmd: &clap::Command,
    output_dir: Option<PathBuf>,
) -> Result<Vec<PathBuf>> {
    let output_dir = match output_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Opening current directory")?,
    };
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;

    let mut written = Vec::new();
    render_page(cmd.clone(), &output_dir, &mut written)?;
    Ok(written)
}

/// Write the page for `cmd`, then recurse into its subcommands with their
/// names prefixed by the parent's.
fn render_page(
    cmd: clap::Command,
    output_dir: &Path,
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    let name = cmd.get_name().to_string();
    let path = output_dir.join(format!("{name}.1"));

    let mut file = File::create(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    clap_mangen::Man::new(cmd.clone())
        .render(&mut file)
        .with_context(|| format!("failed to render {}", path.display()))?;
    written.push(path);

    for sub in cmd.get_subcommands() {
        // clap wants a 'static name; leaking is fine for a one-shot command
        let full_name: &'static str =
            Box::leak(format!("{name}-{}", sub.get_name()).into_boxed_str());
        let renamed = sub.clone().name(full_name).disable_help_subcommand(true);
        render_page(renamed, output_dir, written)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Arg, Command};

    #[test]
    fn writes_nested_pages() {
        let cmd = Command::new("tool")
            .disable_help_subcommand(true)
            .arg(Arg::new("input"))
            .subcommand(
                Command::new("outer")
                    .disable_help_subcommand(true)
                    .subcommand(Command::new("inner")),
            );
        let dir = tempfile::tempdir().unwrap();

        let written =
            generate_man_pages(&cmd, Some(dir.path().to_path_buf())).unwrap();

        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["tool.1", "tool-outer.1", "tool-outer-inner.1"]);
        for path in &written {
            assert!(std::fs::metadata(path).unwrap().len() > 0);
        }
    }
}
