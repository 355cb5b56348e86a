//! Compute kinematics and heel strikes for a trial.

use std::path::PathBuf;

use anyhow::Context;
use gaitkin_model::export::save_kinematics_csv;
use gaitkin_model::{load_trial, Joint};
use gaitkin_processing_core::heel_strike::{require_first_heel_strike, HeelStrikeConfig};
use gaitkin_processing_core::kinematics::KinematicsConfig;
use gaitkin_processing_core::{AnalysisReport, HeelStrikeDetector, KinematicsEngine};

/// Resolved options for one analysis run.
#[derive(Debug)]
pub struct AnalyzeOptions {
    pub data: PathBuf,
    pub headers: Option<PathBuf>,
    pub unit_scale: f64,
    pub joints: Vec<String>,
    pub height_threshold: f64,
    pub max_strikes: usize,
    pub require_strike: bool,
    pub output: Option<PathBuf>,
    pub report: Option<PathBuf>,
}

pub fn run(options: AnalyzeOptions) -> anyhow::Result<()> {
    println!("Analyzing trial at: {}", options.data.display());

    let joints = Joint::parse_list(&options.joints)?;
    let series = load_trial(&options.data, options.headers.as_deref(), options.unit_scale)
        .with_context(|| format!("Failed to load trial {}", options.data.display()))?;
    println!("  Loaded {} frames", series.len());

    let engine = KinematicsEngine::new(KinematicsConfig { joints });
    let kinematics = engine
        .compute(&series)
        .context("Failed to compute kinematics")?;

    let detector = HeelStrikeDetector::new(HeelStrikeConfig {
        max_heel_height_m: options.height_threshold,
        max_events: options.max_strikes,
        ..Default::default()
    });
    let events = detector.events(&kinematics)?;

    if options.require_strike {
        let frames: Vec<usize> = events.iter().map(|e| e.frame).collect();
        require_first_heel_strike(&frames)?;
    }

    if events.is_empty() {
        println!("  No heel strikes found.");
    } else {
        let times: Vec<String> = events
            .iter()
            .map(|e| format!("{:.3}", e.time_secs))
            .collect();
        println!("  Heel strikes occur at times: [{}] seconds", times.join(", "));
        for event in &events {
            println!(
                "    frame {}: heel {:.4} m, velocity {:.4} m/s",
                event.frame, event.heel_height_m, event.heel_velocity
            );
        }
    }

    if let Some(path) = &options.output {
        save_kinematics_csv(&kinematics, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("  Kinematics saved to: {}", path.display());
    }

    if let Some(path) = &options.report {
        let report = AnalysisReport::build(&kinematics, events);
        std::fs::write(path, report.to_json_pretty()?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("  Report saved to: {}", path.display());
    }

    println!("\nAnalysis complete.");
    Ok(())
}
