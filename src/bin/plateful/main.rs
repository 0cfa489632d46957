mod commands;
mod config;
mod output;
mod theme;

use anyhow::Result;
use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Color as ClapColor, RgbColor, Style},
    },
};
use colored::Color as ThemeColor;

use commands::{Commands, handle};
use config::PlatefulConfig;
use output::{GlobalOptions, OutputManager};
use plateful::Repository;
use plateful::store::JsonFileStore;
use theme::THEME;

#[derive(Parser)]
#[command(name = "plateful")]
#[command(version = "0.1.0")]
#[command(
    about = "Restaurant reviews with a social twist",
    long_about = r#"A restaurant review book shared with the people you trust:

• Follow other users; a mutual follow makes you friends
• Exchange invite codes to become friends directly
• Reviews are visible to friends or kept private, your choice
• Ratings are the average of a restaurant's reviews

State lives in a single JSON file (plateful.json by default)."#
)]
#[command(subcommand_required = true, arg_required_else_help = true)]
struct Cli {
    /// Path of the JSON store file (overrides plateful.toml)
    #[arg(long)]
    store: Option<String>,

    /// Suppress output (only errors will be shown)
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

fn help_styles() -> Styles {
    let theme = &THEME;
    Styles::styled()
        .usage(style_from_color(theme.highlight).bold())
        .header(style_from_color(theme.highlight).bold())
        .literal(style_from_color(theme.info))
        .placeholder(style_from_color(theme.muted))
        .valid(style_from_color(theme.success))
        .invalid(style_from_color(theme.warning))
        .error(style_from_color(theme.error).bold())
}

fn style_from_color(color: ThemeColor) -> Style {
    Style::new().fg_color(Some(color_to_clap_color(color)))
}

fn color_to_clap_color(color: ThemeColor) -> ClapColor {
    match color {
        ThemeColor::Black => ClapColor::Ansi(AnsiColor::Black),
        ThemeColor::Red => ClapColor::Ansi(AnsiColor::Red),
        ThemeColor::Green => ClapColor::Ansi(AnsiColor::Green),
        ThemeColor::Yellow => ClapColor::Ansi(AnsiColor::Yellow),
        ThemeColor::Blue => ClapColor::Ansi(AnsiColor::Blue),
        ThemeColor::Magenta => ClapColor::Ansi(AnsiColor::Magenta),
        ThemeColor::Cyan => ClapColor::Ansi(AnsiColor::Cyan),
        ThemeColor::White => ClapColor::Ansi(AnsiColor::White),
        ThemeColor::BrightBlack => ClapColor::Ansi(AnsiColor::BrightBlack),
        ThemeColor::BrightRed => ClapColor::Ansi(AnsiColor::BrightRed),
        ThemeColor::BrightGreen => ClapColor::Ansi(AnsiColor::BrightGreen),
        ThemeColor::BrightYellow => ClapColor::Ansi(AnsiColor::BrightYellow),
        ThemeColor::BrightBlue => ClapColor::Ansi(AnsiColor::BrightBlue),
        ThemeColor::BrightMagenta => ClapColor::Ansi(AnsiColor::BrightMagenta),
        ThemeColor::BrightCyan => ClapColor::Ansi(AnsiColor::BrightCyan),
        ThemeColor::BrightWhite => ClapColor::Ansi(AnsiColor::BrightWhite),
        ThemeColor::TrueColor { r, g, b } => ClapColor::Rgb(RgbColor(r, g, b)),
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse_from_styled_args();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match execute(cli) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

impl Cli {
    fn parse_from_styled_args() -> Self {
        use clap::{CommandFactory, FromArgMatches};
        let matches = Cli::command().styles(help_styles()).get_matches();
        match Cli::from_arg_matches(&matches) {
            Ok(cli) => cli,
            Err(err) => err.exit(),
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    let output = OutputManager::new(GlobalOptions {
        quiet: cli.quiet,
        no_color: cli.no_color,
    });

    let config = PlatefulConfig::load()?;
    let store = JsonFileStore::new(config.store_path(cli.store.as_deref()));
    let mut repo = Repository::new(store);

    handle(cli.command, &mut repo, &output)
}
