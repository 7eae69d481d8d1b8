use crate::route::Route;
use anyhow::bail;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use indoc::indoc;
use std::io::Write;
use std::path::PathBuf;

const AFTER_HELP: &str = indoc! {"
    Routes:
      MAIN, LOGIN, REGISTER, USER_PROFILE, SETTING

    Files:
      ~/.config/screenhop/config.toml    settings and key bindings
      <cache dir>/screenhop/screenhop.log  log output (filter with RUST_LOG)
"};

/// Multi-screen terminal app with stack-based navigation
#[derive(Parser, Debug)]
#[command(
    name = "screenhop",
    version,
    about = "Multi-screen terminal app with stack-based navigation",
    long_about = None,
    after_help = AFTER_HELP,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Route to open first (overrides `start_route` in the config)
    #[arg(long, value_name = "ROUTE")]
    pub start: Option<Route>,

    /// Color theme (overrides `theme` in the config)
    #[arg(long, value_parser = ["dark", "light", "nocolor"])]
    pub theme: Option<String>,

    /// Disable all UI colors (same as setting NO_COLOR)
    #[arg(long)]
    pub no_colors: bool,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the registered routes
    Routes,
    /// Print shell completions
    Completions {
        /// Target shell (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Execute a subcommand. Returns `false` when there is none and the
    /// TUI should start.
    pub fn execute(&self) -> anyhow::Result<bool> {
        match &self.command {
            Some(Commands::Routes) => {
                let mut out = std::io::stdout().lock();
                write_routes(&mut out)?;
                Ok(true)
            }
            Some(Commands::Completions { shell }) => {
                generate_completions(*shell)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Print the route registry as an aligned table.
pub fn write_routes(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{:<14} {:<17} {}", "ID", "LABEL", "COLOR")?;
    for route in Route::all() {
        writeln!(
            out,
            "{:<14} {:<17} {}",
            route.id(),
            route.label(),
            route.color_hex()
        )?;
    }
    Ok(())
}

/// Generate command-line completions.
pub fn generate_completions(shell: Option<Shell>) -> anyhow::Result<()> {
    let Some(shell) = shell.or_else(Shell::from_env) else {
        bail!("Could not automatically detect shell");
    };

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
