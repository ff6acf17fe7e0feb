use clap::{Args, Parser, Subcommand};
use periodica::core::models::selection::Modality;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu",
    version,
    about = "Periodica CLI - Lay out and shade the periodic table by neutron or X-ray attenuation coefficients.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the periodic table for one modality and write the drawable model as JSON.
    Render(RenderArgs),
    /// List the columns of an element table that can be shown on hover.
    Fields(FieldsArgs),
    /// Print the label and hover text of a single element.
    Inspect(InspectArgs),
}

/// Arguments shared by every command that reads an element table.
#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// Path to the element table (.csv or .xlsx).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Worksheet to read from an Excel workbook, overriding the config file.
    #[arg(long, value_name = "NAME")]
    pub sheet: Option<String>,

    /// Number of leading data rows to discard, overriding the config file.
    #[arg(long, value_name = "INT")]
    pub skip_rows: Option<usize>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S color-range.vmax=10
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Modality whose attenuation coefficient shades the cells (neutrons or x-ray).
    #[arg(short, long, value_name = "MODALITY", default_value = "neutrons")]
    pub modality: Modality,

    /// Column to show on hover. Repeat to add more; order is preserved.
    #[arg(short = 'f', long = "field", value_name = "NAME", default_values_t = [String::from("Symbol")])]
    pub fields: Vec<String>,

    /// Override the lower bound of the color range.
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub vmin: Option<f64>,

    /// Override the upper bound of the color range.
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub vmax: Option<f64>,

    /// Path for the JSON output. Defaults to standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write compact JSON instead of pretty-printed JSON.
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the `fields` subcommand.
#[derive(Args, Debug)]
pub struct FieldsArgs {
    #[command(flatten)]
    pub table: TableArgs,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Symbol of the element to inspect (case-insensitive).
    #[arg(short, long, required = true, value_name = "SYMBOL")]
    pub symbol: String,

    /// Modality whose attenuation coefficient is reported (neutrons or x-ray).
    #[arg(short, long, value_name = "MODALITY", default_value = "neutrons")]
    pub modality: Modality,

    /// Column to show on hover. Repeat to add more; order is preserved.
    #[arg(short = 'f', long = "field", value_name = "NAME", default_values_t = [String::from("Symbol")])]
    pub fields: Vec<String>,
}
