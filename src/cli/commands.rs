// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands and their flags:
//
//   sheet        print (or save) a sheet of practice questions
//   reveal       worked step for one question
//   practice     interactive: Enter reveals, q quits
//   list         the built-in catalog
//   init-config  write a default config file
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};

use crate::application::sheet_use_case::{OutputFormat, SheetConfig};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a sheet of practice questions
    Sheet(SheetArgs),

    /// Show the worked answer for one question
    Reveal(RevealArgs),

    /// Work through questions interactively in the terminal
    Practice(PracticeArgs),

    /// List the built-in questions
    List,

    /// Write a default sheet config file
    InitConfig(InitConfigArgs),
}

/// Output format flag. Mirrors OutputFormat so the application
/// layer never sees clap types.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Html,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Html => OutputFormat::Html,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Flags for `sheet`. Anything left unset falls back to the
/// --config file, then to the built-in defaults.
#[derive(Args, Debug)]
pub struct SheetArgs {
    /// Number of questions (default 10)
    #[arg(long, short = 'n')]
    pub count: Option<usize>,

    /// Seed for a reproducible sheet
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format (default text)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Include every answer (answer key)
    #[arg(long)]
    pub reveal: bool,

    /// JSON config file with sheet defaults
    #[arg(long)]
    pub config: Option<String>,

    /// Write the sheet to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<String>,
}

impl SheetArgs {
    /// Layer explicit flags over a base config
    pub fn apply_to(&self, base: SheetConfig) -> SheetConfig {
        SheetConfig {
            count:      self.count.unwrap_or(base.count),
            seed:       self.seed.or(base.seed),
            format:     self.format.map(Into::into).unwrap_or(base.format),
            reveal_all: self.reveal || base.reveal_all,
        }
    }
}

#[derive(Args, Debug)]
pub struct RevealArgs {
    /// Catalog question number (see `list`); random if omitted
    #[arg(long, short = 'q')]
    pub question: Option<usize>,

    /// Seed for the random pick
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,
}

#[derive(Args, Debug)]
pub struct PracticeArgs {
    /// Number of questions
    #[arg(long, short = 'n', default_value_t = 10)]
    pub count: usize,

    /// Seed for a reproducible session
    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<PracticeArgs> for SheetConfig {
    fn from(a: PracticeArgs) -> Self {
        SheetConfig {
            count: a.count,
            seed:  a.seed,
            ..SheetConfig::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct InitConfigArgs {
    /// Where to write the config
    #[arg(default_value = "gd-practice.json")]
    pub path: String,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
