//! Command-line surface and dispatch.
use std::path::PathBuf;

use anyhow::{Context as _, Result, anyhow};
use clap::{Parser, Subcommand};
use roster_content::RosterLibrary;
use roster_core::{RosterConfig, UnitOracle, ValidationReport, validate_unit};

use crate::config::{CliConfig, OutputFormat};
use crate::presentation::{TextOptions, json, text};

const ENV_HELP: &str = "\
Environment:
  ROSTER_DATA_DIR   data directory (default: the bundled sample data)
  ROSTER_FORMAT     text | json (default: text)
  ROSTER_LOG_DIR    also write logs to <dir>/roster.log
  RUST_LOG          log filter (default: info)";

/// Compose unit cards and army lists from roster data
#[derive(Debug, Parser)]
#[command(name = "roster", version, long_about = None, after_help = ENV_HELP)]
pub struct Cli {
    /// Data directory (overrides ROSTER_DATA_DIR)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output format (overrides ROSTER_FORMAT)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Flags given on the command line win over the environment.
    pub fn apply_to(&self, config: &mut CliConfig) {
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List every unit with its composed points total
    Units,

    /// Show one unit with its upgrades applied
    Unit {
        #[arg(value_name = "UNIT_ID")]
        id: String,
    },

    /// Show an army list and its points against the limit
    Army {
        #[arg(value_name = "ARMY_ID")]
        id: String,
    },

    /// Check every unit's upgrade slots
    Validate,
}

/// Everything a command needs to run.
pub struct CommandContext<'a> {
    pub library: &'a RosterLibrary,
    pub settings: &'a RosterConfig,
    pub format: OutputFormat,
}

impl CommandContext<'_> {
    fn text_options(&self) -> TextOptions {
        TextOptions {
            show_attributions: self.settings.show_attributions,
        }
    }
}

/// Output of a command and whether it should fail the process.
pub struct Outcome {
    pub output: String,
    pub failed: bool,
}

impl Outcome {
    fn ok(output: String) -> Self {
        Self {
            output,
            failed: false,
        }
    }
}

pub fn run(command: &Command, ctx: &CommandContext<'_>) -> Result<Outcome> {
    match command {
        Command::Units => list_units(ctx).map(Outcome::ok),
        Command::Unit { id } => show_unit(ctx, id).map(Outcome::ok),
        Command::Army { id } => show_army(ctx, id).map(Outcome::ok),
        Command::Validate => validate(ctx),
    }
}

fn list_units(ctx: &CommandContext<'_>) -> Result<String> {
    let catalogs = ctx.library.catalogs();
    match ctx.format {
        OutputFormat::Text => {
            let entries: Vec<_> = ctx
                .library
                .units
                .iter()
                .map(|unit| (unit, catalogs.compose(unit).total_points))
                .collect();
            Ok(text::render_unit_list(&entries))
        }
        OutputFormat::Json => {
            let composed: Vec<_> = ctx
                .library
                .units
                .iter()
                .map(|unit| catalogs.compose(unit))
                .collect();
            json::render(&composed)
        }
    }
}

fn show_unit(ctx: &CommandContext<'_>, id: &str) -> Result<String> {
    let unit = ctx
        .library
        .unit(id)
        .ok_or_else(|| anyhow!("unit '{}' not found", id))?;
    let composed = ctx.library.catalogs().compose(unit);

    match ctx.format {
        OutputFormat::Text => Ok(text::render_unit(&composed, ctx.text_options())),
        OutputFormat::Json => json::render(&composed),
    }
}

fn show_army(ctx: &CommandContext<'_>, id: &str) -> Result<String> {
    let army = ctx
        .library
        .army(id)
        .with_context(|| format!("army '{}' not found", id))?;

    let mut composed = ctx.library.catalogs().compose_army(army, ctx.library);
    composed.points_limit = Some(ctx.settings.effective_limit(army.points_limit));

    if composed.over_limit() {
        tracing::warn!(
            army = %army.id,
            total = composed.total_points,
            limit = ?composed.points_limit,
            "army exceeds its points limit"
        );
    }

    match ctx.format {
        OutputFormat::Text => Ok(text::render_army(&composed, ctx.text_options())),
        OutputFormat::Json => json::render(&composed),
    }
}

fn validate(ctx: &CommandContext<'_>) -> Result<Outcome> {
    let reports: Vec<ValidationReport> = ctx
        .library
        .units
        .iter()
        .map(|unit| validate_unit(unit, ctx.library))
        .collect();
    let failed = reports.iter().filter(|report| !report.is_valid()).count();
    if failed > 0 {
        tracing::warn!(failed, "units failed validation");
    }

    let output = match ctx.format {
        OutputFormat::Text => text::render_validation(&reports),
        OutputFormat::Json => json::render(&reports)?,
    };

    Ok(Outcome {
        output,
        failed: failed > 0,
    })
}

#[cfg(test)]
mod tests {
    use roster_content::Registry;
    use roster_core::{Army, Faction, SlotKind, Unit, UnitType, UpgradeCard, UpgradeSlot};

    use super::*;

    fn library() -> RosterLibrary {
        let mut unit = Unit::new("u1", "Troopers", Faction::Rebels, UnitType::Trooper)
            .with_slot(UpgradeSlot::new(SlotKind::Gear, 1).with_equipped("hooks"));
        unit.points = 40;
        RosterLibrary {
            units: Registry::new(vec![unit]).unwrap(),
            upgrades: Registry::new(vec![UpgradeCard::new("hooks", "Grappling Hooks", 1)])
                .unwrap(),
            armies: Registry::new(vec![
                Army::new("a1", "Patrol", Faction::Rebels)
                    .with_unit("u1")
                    .with_unit("u1"),
            ])
            .unwrap(),
            ..RosterLibrary::default()
        }
    }

    #[test]
    fn test_parse_commands() {
        let cli = Cli::try_parse_from(["roster", "units"]).unwrap();
        assert_eq!(cli.command, Command::Units);

        let cli = Cli::try_parse_from(["roster", "unit", "u1"]).unwrap();
        assert_eq!(cli.command, Command::Unit { id: "u1".into() });

        assert!(Cli::try_parse_from(["roster"]).is_err());
        assert!(Cli::try_parse_from(["roster", "unit"]).is_err());
        assert!(Cli::try_parse_from(["roster", "frobnicate"]).is_err());
    }

    #[test]
    fn test_flags_override_environment() {
        let cli =
            Cli::try_parse_from(["roster", "validate", "--format", "json", "-d", "/tmp/data"])
                .unwrap();
        let mut config = CliConfig::default();

        cli.apply_to(&mut config);

        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/data"));

        let bare = Cli::try_parse_from(["roster", "units"]).unwrap();
        let mut untouched = CliConfig::default();
        bare.apply_to(&mut untouched);
        assert_eq!(untouched.format, OutputFormat::Text);
    }

    #[test]
    fn test_army_uses_configured_limit_when_unset() {
        let library = library();
        let settings = RosterConfig::new().with_points_limit(80);
        let ctx = CommandContext {
            library: &library,
            settings: &settings,
            format: OutputFormat::Text,
        };

        let outcome = run(&Command::Army { id: "a1".into() }, &ctx).unwrap();

        assert!(outcome.output.contains("Total: 82 / 80 (over by 2)"));
        assert!(!outcome.failed);
    }

    #[test]
    fn test_unknown_unit_is_an_error() {
        let library = library();
        let settings = RosterConfig::default();
        let ctx = CommandContext {
            library: &library,
            settings: &settings,
            format: OutputFormat::Json,
        };

        assert!(run(&Command::Unit { id: "nope".into() }, &ctx).is_err());
        assert!(run(&Command::Validate, &ctx).is_ok_and(|outcome| !outcome.failed));
    }
}
