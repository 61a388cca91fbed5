use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{OutputFormat, Settings};
use crate::domain::{locate, map_signature, Fraction, Series, Tree};
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "settings loaded");

    match &cli.command {
        Some(Commands::Fraction { fraction }) => _fraction(fraction),
        Some(Commands::Mediant { a, b }) => _mediant(a, b),
        Some(Commands::Signature { signature }) => {
            _signature(signature.as_deref().unwrap_or_default())
        }
        Some(Commands::Locate { fraction }) => _locate(fraction),
        Some(Commands::Tree {
            depth,
            left,
            right,
            format,
        }) => _tree(&settings, *depth, left.clone(), right.clone(), *format),
        Some(Commands::Series { count }) => _series(&settings, *count),
        Some(Commands::Config { command }) => _config(&settings, command),
        None => Ok(()),
    }
}

#[instrument]
fn _fraction(fraction: &Fraction) -> CliResult<()> {
    output::action("fraction", fraction);
    output::action(
        "pair",
        &format!("({}, {})", fraction.numerator(), fraction.denominator()),
    );
    match fraction.to_normalized_rational() {
        Ok(r) => output::action("rational", &r),
        Err(e) => output::unavailable("rational", &e),
    }
    Ok(())
}

#[instrument]
fn _mediant(a: &Fraction, b: &Fraction) -> CliResult<()> {
    output::info(&(a + b));
    Ok(())
}

#[instrument]
fn _signature(signature: &str) -> CliResult<()> {
    let matrix = map_signature(signature)?;
    let fraction = Fraction::from_matrix(matrix.clone(), Some(signature.to_string()));
    output::action("matrix", &matrix);
    output::action("determinant", &matrix.determinant());
    output::action("fraction", &fraction);
    output::action("left", &Fraction::from(fraction.left_ancestor()?));
    output::action("right", &Fraction::from(fraction.right_ancestor()?));
    Ok(())
}

#[instrument]
fn _locate(fraction: &Fraction) -> CliResult<()> {
    let path = locate(fraction.numerator(), fraction.denominator())?;
    if path.is_empty() {
        output::info(&"(root)");
    } else {
        output::info(&path);
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _tree(
    settings: &Settings,
    depth: Option<i64>,
    left: Option<Fraction>,
    right: Option<Fraction>,
    format: Option<OutputFormat>,
) -> CliResult<()> {
    let depth = depth.unwrap_or(settings.depth);
    if depth > settings.max_depth {
        return Err(CliError::InvalidArgs(format!(
            "depth {depth} exceeds max_depth {}",
            settings.max_depth
        )));
    }
    let (default_left, default_right) = settings.boundaries()?;
    let tree = Tree::new(
        left.unwrap_or(default_left),
        right.unwrap_or(default_right),
        depth,
    )?;
    output::info(&render_tree(&tree, format.unwrap_or(settings.format)).trim_end());
    Ok(())
}

#[instrument(skip(settings))]
fn _series(settings: &Settings, count: usize) -> CliResult<()> {
    let (left, right) = settings.boundaries()?;
    let series = Series::new(left, right);
    output::info(&series.iter().take(count).join(", "));
    Ok(())
}

fn _config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::header(&"Effective configuration");
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

/// Lays out an expanded tree for printing.
pub fn render_tree(tree: &Tree, format: OutputFormat) -> String {
    match format {
        OutputFormat::Tree => tree.to_tree_string().to_string(),
        OutputFormat::Levels => {
            let mut lines = vec![format!("0: {} {}", tree.left(), tree.right())];
            lines.extend(
                tree.levels()
                    .iter()
                    .enumerate()
                    .map(|(i, level)| format!("{}: {}", i + 1, level.iter().join(" "))),
            );
            lines.join("\n")
        }
        OutputFormat::List => tree.in_order().iter().join(", "),
    }
}
