//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::report::{filter_section, map_section, traversal_section};
use crate::application::{sample_tree, DemoReport, Section, ValueFilter};
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{RenderStyle, Settings, TraversalOrder};

/// Resolve settings from config layers and global flags.
pub fn resolve_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = Settings::load(cli.config.as_deref())?;
    Ok(apply_flags(cli, settings))
}

/// Global flags override every config layer.
pub fn apply_flags(cli: &Cli, mut settings: Settings) -> Settings {
    if let Some(render) = cli.render {
        settings.render = render;
    }
    if cli.no_color {
        settings.color = false;
    }
    settings
}

/// Forced colorization, if any. Enabled color is left to `colored`'s own
/// NO_COLOR / CLICOLOR / tty detection; only `color = false` forces it off.
pub fn color_override(settings: &Settings) -> Option<bool> {
    (!settings.color).then_some(false)
}

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = resolve_settings(cli)?;
    if let Some(colorize) = color_override(&settings) {
        colored::control::set_override(colorize);
    }
    debug!(?settings, "effective settings");

    match &cli.command {
        None | Some(Commands::Demo) => cmd_demo(&settings),
        Some(Commands::Dfs) => cmd_traverse(TraversalOrder::Dfs, &settings),
        Some(Commands::Bfs) => cmd_traverse(TraversalOrder::Bfs, &settings),
        Some(Commands::Map { case }) => {
            output::section(&map_section(&sample_tree(), *case, &settings), settings.render);
            Ok(())
        }
        Some(Commands::Filter { exclude, matching }) => {
            cmd_filter(exclude, matching.as_deref(), &settings)
        }
        Some(Commands::Show) => {
            let section = Section::new("Sample Tree", Some(sample_tree()), settings.order);
            output::section(&section, RenderStyle::Tree);
            Ok(())
        }
        Some(Commands::Config) => {
            output::info(&settings.to_toml()?);
            Ok(())
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

#[instrument(level = "debug", skip_all)]
fn cmd_demo(settings: &Settings) -> CliResult<()> {
    let report = DemoReport::build(&sample_tree(), settings)?;
    for (i, section) in report.sections.iter().enumerate() {
        if i > 0 {
            output::info("");
        }
        output::section(section, settings.render);
    }
    Ok(())
}

fn cmd_traverse(order: TraversalOrder, settings: &Settings) -> CliResult<()> {
    output::section(&traversal_section(&sample_tree(), order), settings.render);
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn cmd_filter(exclude: &[String], matching: Option<&str>, settings: &Settings) -> CliResult<()> {
    if exclude.is_empty() && matching.is_none() {
        return Err(CliError::Usage(
            "filter needs --exclude or --matching".to_string(),
        ));
    }
    let filter = ValueFilter::new(exclude.to_vec(), matching)?;
    output::section(&filter_section(&sample_tree(), &filter, settings), settings.render);
    Ok(())
}
