use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use figure::{is_right_triangle, Shape};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "figure")]
#[command(about = "Areas of circles, ellipses and triangles")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Area from 1 radius (circle), 2 semi-axes (ellipse) or 3 sides (triangle)
    Area {
        #[arg(allow_negative_numbers = true)]
        sides: Vec<f64>,
        /// Write the result here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Check whether 3 sides form a right triangle
    Right {
        #[arg(allow_negative_numbers = true)]
        sides: Vec<f64>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Debug, Serialize)]
struct AreaOutput {
    shape: Shape,
    area: f64,
}

#[derive(Debug, Serialize)]
struct RightOutput {
    sides: Vec<f64>,
    right: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Area { sides, out } => {
            let res = area(&sides)?;
            emit(&res, out.as_deref(), json!({ "op": "area", "sides": sides }))
        }
        Action::Right { sides, out } => {
            let res = right(sides.clone())?;
            emit(&res, out.as_deref(), json!({ "op": "right", "sides": sides }))
        }
        Action::Report => report(),
    }
}

fn area(sides: &[f64]) -> Result<AreaOutput> {
    let computed = Shape::classify(sides).and_then(|shape| shape.area().map(|area| (shape, area)));
    match computed {
        Ok((shape, area)) => {
            tracing::info!(kind = shape.kind(), ?sides, area, "area");
            Ok(AreaOutput { shape, area })
        }
        Err(e) => {
            tracing::warn!(?sides, error = %e, "area rejected");
            Err(e.into())
        }
    }
}

fn right(sides: Vec<f64>) -> Result<RightOutput> {
    match is_right_triangle(&sides) {
        Ok(right) => {
            tracing::info!(?sides, right, "right");
            Ok(RightOutput { sides, right })
        }
        Err(e) => {
            tracing::warn!(?sides, error = %e, "right rejected");
            Err(e.into())
        }
    }
}

fn emit<T: Serialize>(value: &T, out: Option<&Path>, params: serde_json::Value) -> Result<()> {
    let Some(out) = out else {
        println!("{}", serde_json::to_string_pretty(value)?);
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let sidecar = provenance::write_sidecar(out, provenance::Payload::new(params))?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "written");
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": figure::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
