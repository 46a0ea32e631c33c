use clap::{Args, Parser, Subcommand, ValueEnum};
use enercalc::Deployment;
use std::net::IpAddr;
use std::path::PathBuf;

const ABOUT: &str = "Engineering calculators for fuel composition, electricity imbalance and grid reliability, served over HTTP or evaluated from the command line.";
const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser)]
#[command(version, about = ABOUT, help_template = HELP_TEMPLATE)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web calculator for one deployment.
    Serve(ServeArgs),

    /// Recalculate a coal sample to the dry and combustible bases and estimate its LHV.
    Fuel(FuelArgs),

    /// Convert a fuel oil analysis from the combustible basis to the working mass.
    FuelOil(FuelOilArgs),

    /// Estimate revenue and imbalance penalty of a solar plant for one day.
    Imbalance(ImbalanceArgs),

    /// Compare single- and double-circuit supply reliability.
    Reliability(ReliabilityArgs),

    /// Project expected under-supply of energy and its losses.
    Outage(OutageArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Which calculator to host. Overrides the configuration file.
    #[arg(short, long, value_enum)]
    pub deployment: Option<DeploymentArg>,

    /// Server configuration file in TOML format.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Address to listen on.
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<IpAddr>,

    /// Port to listen on.
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory the pages are served from.
    ///
    /// Defaults to `static/<deployment>` relative to the working directory.
    #[arg(long, value_name = "DIR")]
    pub static_dir: Option<PathBuf>,

    /// Custom reliability indicator table in TOML format.
    #[arg(short = 'P', long, value_name = "FILE")]
    pub indicators: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DeploymentArg {
    /// Coal composition and fuel oil conversion.
    Fuel,
    /// Electricity imbalance estimate.
    Imbalance,
    /// Circuit reliability and under-supply losses.
    Reliability,
}

impl From<DeploymentArg> for Deployment {
    fn from(arg: DeploymentArg) -> Self {
        match arg {
            DeploymentArg::Fuel => Deployment::Fuel,
            DeploymentArg::Imbalance => Deployment::Imbalance,
            DeploymentArg::Reliability => Deployment::Reliability,
        }
    }
}

/// Working-mass composition of a coal sample, in percent.
#[derive(Args)]
#[command(next_help_heading = "Composition")]
pub struct FuelArgs {
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub hydrogen: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub carbon: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub sulfur: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub nitrogen: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub oxygen: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub moisture: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub ash: f64,

    #[command(flatten)]
    pub output: OutputOptions,
}

/// Combustible-mass analysis of a fuel oil.
#[derive(Args)]
#[command(next_help_heading = "Composition")]
pub struct FuelOilArgs {
    /// Carbon, percent of combustible mass.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub carbon: f64,
    /// Hydrogen, percent of combustible mass.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub hydrogen: f64,
    /// Oxygen, percent of combustible mass.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub oxygen: f64,
    /// Sulfur, percent of combustible mass.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub sulfur: f64,
    /// Low heating value of the combustible mass, MJ/kg.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub combustible_lhv: f64,
    /// Moisture of the working mass, percent.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub raw_moisture: f64,
    /// Ash of the dry mass, percent.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub dry_ash: f64,
    /// Vanadium in the combustible mass, mg/kg.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub combustible_vanadium: f64,

    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Args)]
#[command(next_help_heading = "Forecast")]
pub struct ImbalanceArgs {
    /// Average daily capacity, MW.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub capacity: f64,
    /// Electricity cost, thousand UAH per MW·h.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub cost: f64,
    /// Standard deviation of the capacity forecast, MW.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub std_dev: f64,

    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Args)]
#[command(next_help_heading = "Circuit")]
pub struct ReliabilityArgs {
    /// Number of elements of one equipment class, as KEY=N. Repeat for every class.
    #[arg(short, long = "count", value_name = "KEY=N")]
    pub counts: Vec<String>,

    /// Custom reliability indicator table in TOML format.
    #[arg(short = 'P', long, value_name = "FILE")]
    pub indicators: Option<PathBuf>,

    /// Print the indicator table instead of evaluating a circuit.
    #[arg(long)]
    pub list: bool,

    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Args)]
#[command(next_help_heading = "Outage")]
pub struct OutageArgs {
    /// Losses per kW·h of emergency under-supply, UAH.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub losses_emergency: f64,
    /// Losses per kW·h of scheduled under-supply, UAH.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub losses_scheduled: f64,
    /// Maximum load, MW.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub pm: f64,
    /// Annual utilisation time of the maximum load, hours.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub tm: f64,
    /// Failure rate of the supply, per year.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub failure_rate: f64,
    /// Average recovery time, years.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub average_recovery_time: f64,
    /// Average planned downtime, fraction of the year.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub average_planned_downtime: f64,

    #[command(flatten)]
    pub output: OutputOptions,
}

/// Options for controlling the output format and destination.
#[derive(Args)]
#[command(next_help_heading = "Output Options")]
pub struct OutputOptions {
    /// Output file path.
    ///
    /// If not specified, results are written to standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format for the results.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Number of decimal places to display for floating-point values.
    #[arg(short, long, default_value_t = 6)]
    pub precision: usize,
}

/// Output format for the calculation results.
#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    /// Boxed table of named quantities with units.
    Pretty,
    /// Comma-separated values with columns: name, value, unit.
    Csv,
    /// The JSON document the web service returns.
    Json,
}
