//! Gaitkin CLI — Command-line interface for gait kinematics.
//!
//! Usage:
//!   gaitkin snapshot [OPTIONS]     Vectors and angles of one static pose
//!   gaitkin analyze <DATA>         Kinematics and heel strikes for a trial
//!   gaitkin info <DATA>            Show trial information

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gaitkin_common::config::AppConfig;
use gaitkin_model::Point2D;

mod commands;

#[derive(Parser)]
#[command(
    name = "gaitkin",
    about = "2-D lower-limb kinematics and heel-strike detection",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute segment vectors and angles for a single static pose
    Snapshot {
        /// Iliac crest position as X,Z
        #[arg(
            long,
            value_parser = parse_point,
            allow_hyphen_values = true,
            default_value = "-1063,955.7"
        )]
        il_crest: Point2D,

        /// Greater trochanter position as X,Z
        #[arg(
            long,
            value_parser = parse_point,
            allow_hyphen_values = true,
            default_value = "-1113,823.9"
        )]
        grt_troc: Point2D,

        /// Lateral condyle (tibial plateau) position as X,Z
        #[arg(
            long,
            value_parser = parse_point,
            allow_hyphen_values = true,
            default_value = "-1254,433.8"
        )]
        lat_con: Point2D,

        /// Lateral malleolus position as X,Z
        #[arg(
            long,
            value_parser = parse_point,
            allow_hyphen_values = true,
            default_value = "-1523.84,178.9"
        )]
        lat_mall: Point2D,
    },

    /// Compute kinematics and detect heel strikes for a trial
    Analyze {
        /// Trial data CSV
        data: PathBuf,

        /// Header CSV; without it the first row of the data file is the header
        #[arg(long)]
        headers: Option<PathBuf>,

        /// Factor applied to every non-time column (default from config: 0.001)
        #[arg(long)]
        unit_scale: Option<f64>,

        /// Joints to compute angular velocity for (comma separated)
        #[arg(long, value_delimiter = ',')]
        joints: Option<Vec<String>>,

        /// Heel height (m) at or above which a dip is not a strike
        #[arg(long)]
        height_threshold: Option<f64>,

        /// Maximum number of heel strikes to report
        #[arg(long)]
        max_strikes: Option<usize>,

        /// Fail when no heel strike is found
        #[arg(long)]
        require_strike: bool,

        /// Write the augmented series to this CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write a JSON analysis report to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Show trial information
    Info {
        /// Trial data CSV
        data: PathBuf,

        /// Header CSV; without it the first row of the data file is the header
        #[arg(long)]
        headers: Option<PathBuf>,

        /// Factor applied to every non-time column (default from config: 0.001)
        #[arg(long)]
        unit_scale: Option<f64>,
    },
}

fn parse_point(raw: &str) -> Result<Point2D, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected X,Z but got {raw:?}"))?;
    let x = x
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid X in {raw:?}: {e}"))?;
    let y = y
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid Z in {raw:?}: {e}"))?;
    Ok(Point2D::new(x, y))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load();

    // Initialize logging
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    gaitkin_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Snapshot {
            il_crest,
            grt_troc,
            lat_con,
            lat_mall,
        } => commands::snapshot::run(il_crest, grt_troc, lat_con, lat_mall),
        Commands::Analyze {
            data,
            headers,
            unit_scale,
            joints,
            height_threshold,
            max_strikes,
            require_strike,
            output,
            report,
        } => {
            let defaults = &config.analysis;
            commands::analyze::run(commands::analyze::AnalyzeOptions {
                data,
                headers,
                unit_scale: unit_scale.unwrap_or(defaults.unit_scale),
                joints: joints.unwrap_or_else(|| defaults.joints.clone()),
                height_threshold: height_threshold.unwrap_or(defaults.heel_height_threshold_m),
                max_strikes: max_strikes.unwrap_or(defaults.max_heel_strikes),
                require_strike,
                output,
                report,
            })
        }
        Commands::Info {
            data,
            headers,
            unit_scale,
        } => commands::info::run(
            data,
            headers,
            unit_scale.unwrap_or(config.analysis.unit_scale),
        ),
    }
}
