// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: turn a room description (JSON) into a PDF lighting report
//!
//! Usage:
//!   lux-report room.json -o report.pdf --scene-obj room.obj

use anyhow::{Context, Result};
use clap::Parser;
use lux_lite_core::{plan, PlanRequest, UsageProfile};
use lux_lite_report::{render_report, REPORT_FILE_NAME};
use lux_lite_scene::{scene_from_plan, scene_to_json, write_obj};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lux-report")]
#[command(version, about = "Room illumination report from a room description", long_about = None)]
struct Cli {
    /// Room description JSON (dimensions, room type, colors, windows, preferred fixture)
    input: PathBuf,

    /// Where to write the PDF report
    #[arg(short, long, default_value = REPORT_FILE_NAME)]
    output: PathBuf,

    /// Also write the 3D room preview as JSON
    #[arg(long)]
    scene_json: Option<PathBuf>,

    /// Also write the 3D room preview as Wavefront OBJ
    #[arg(long)]
    scene_obj: Option<PathBuf>,

    /// Include light distribution point clouds in the OBJ export
    #[arg(long, requires = "scene_obj")]
    obj_light: bool,

    /// Also write the complete lighting plan as JSON
    #[arg(long)]
    plan_json: Option<PathBuf>,

    /// Electricity price per kWh
    #[arg(long)]
    cost_per_kwh: Option<f64>,

    /// Hours per day the lights are on
    #[arg(long)]
    daily_hours: Option<f64>,
}

/// Catalog usage with the command line overrides applied
fn usage_from_args(cost_per_kwh: Option<f64>, daily_hours: Option<f64>) -> Result<UsageProfile> {
    let mut usage = UsageProfile::default();
    if let Some(cost) = cost_per_kwh {
        usage.cost_per_kwh = cost;
    }
    if let Some(hours) = daily_hours {
        usage.daily_hours = hours;
    }
    usage
        .validate()
        .context("--daily-hours must be in (0, 24] and --cost-per-kwh must not be negative")?;
    Ok(usage)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let input = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let request: PlanRequest = serde_json::from_str(&input)
        .with_context(|| format!("parsing room description {}", cli.input.display()))?;

    let usage = usage_from_args(cli.cost_per_kwh, cli.daily_hours)?;
    let plan = plan(&request, &usage)?;
    tracing::info!(
        room_type = %plan.room.room_type,
        lumens = plan.analysis.required_lumens,
        fixtures = plan.fixture_count,
        "Planned lighting"
    );

    let pdf = render_report(&plan.report_data(), &plan.recommendations)?;
    fs::write(&cli.output, &pdf).with_context(|| format!("writing {}", cli.output.display()))?;
    println!("Report: {} ({} bytes)", cli.output.display(), pdf.len());

    if let Some(path) = &cli.plan_json {
        let json = serde_json::to_string_pretty(&plan)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        println!("Plan:   {}", path.display());
    }

    if cli.scene_json.is_some() || cli.scene_obj.is_some() {
        let scene = scene_from_plan(&plan);

        if let Some(path) = &cli.scene_json {
            fs::write(path, scene_to_json(&scene)?)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Scene:  {}", path.display());
        }
        if let Some(path) = &cli.scene_obj {
            let file = fs::File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            let mut out = BufWriter::new(file);
            write_obj(&scene, &mut out, cli.obj_light)?;
            out.flush()?;
            println!("OBJ:    {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_overrides() {
        let usage = usage_from_args(Some(12.0), None).unwrap();
        assert_eq!(usage.cost_per_kwh, 12.0);
        assert_eq!(usage.daily_hours, UsageProfile::default().daily_hours);
        assert_eq!(usage_from_args(None, None).unwrap(), UsageProfile::default());
    }

    #[test]
    fn test_unusable_overrides_are_rejected() {
        let err = usage_from_args(None, Some(0.0)).unwrap_err();
        assert!(err.to_string().contains("--daily-hours"));
        assert!(format!("{err:#}").contains("Invalid usage daily_hours: 0"));

        assert!(usage_from_args(Some(-3.0), None).is_err());
        assert!(usage_from_args(None, Some(30.0)).is_err());
    }
}
