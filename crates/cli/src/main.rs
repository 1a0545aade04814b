use advmath::api::{
    approx_inverse, approx_inverse_sqrt, approx_sqrt, kernel_error_table, try_approx_inverse,
    try_approx_inverse_sqrt, try_approx_sqrt, SortedSequence,
};
use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "advmath")]
#[command(about = "Exercise the approximate kernels and linked containers")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compare the approximate kernels against std for one input
    Kernels {
        #[arg(long)]
        x: f32,
    },
    /// Write a kernel relative-error table (JSON) plus a provenance sidecar
    Sweep {
        #[arg(long, default_value_t = 1e-6)]
        min: f32,
        #[arg(long, default_value_t = 1e6)]
        max: f32,
        #[arg(long, default_value_t = 1001)]
        steps: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Insert values into a sorted container and print the result
    Sorted {
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        values: Vec<f32>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize)]
struct SweepRow {
    x: f32,
    inverse: f64,
    sqrt: f64,
    inverse_sqrt: f64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Kernels { x } => {
            println!("{}", serde_json::to_string_pretty(&kernels(x)?)?);
            Ok(())
        }
        Action::Sweep {
            min,
            max,
            steps,
            out,
        } => sweep(min, max, steps, &out).map(|_| ()),
        Action::Sorted { values } => {
            println!("{}", serde_json::to_string_pretty(&sorted(&values))?);
            Ok(())
        }
        Action::Report => report(),
    }
}

fn kernels(x: f32) -> Result<Value> {
    tracing::info!(x, "kernels");
    let inverse = try_approx_inverse(x)?;
    let sqrt = try_approx_sqrt(x)?;
    let inverse_sqrt = try_approx_inverse_sqrt(x)?;
    let exact_sqrt = (x as f64).sqrt();
    Ok(json!({
        "x": x,
        "inverse": { "approx": inverse, "exact": 1.0 / x as f64 },
        "sqrt": { "approx": sqrt, "exact": exact_sqrt },
        "inverse_sqrt": { "approx": inverse_sqrt, "exact": 1.0 / exact_sqrt },
    }))
}

/// Write the error table to `out` and its sidecar; returns the sidecar path.
fn sweep(min: f32, max: f32, steps: usize, out: &Path) -> Result<PathBuf> {
    ensure!(
        min > 0.0 && min.is_finite() && max.is_finite(),
        "sweep range must be positive and finite, got [{min}, {max}]"
    );
    ensure!(max >= min, "sweep needs min <= max, got [{min}, {max}]");
    ensure!(steps > 0, "sweep needs at least one step");
    tracing::info!(min, max, steps, out = %out.display(), "sweep");

    let rows: Vec<SweepRow> = kernel_error_table(min, max, steps)
        .into_iter()
        .map(|r| SweepRow {
            x: r.x,
            inverse: r.inverse,
            sqrt: r.sqrt,
            inverse_sqrt: r.inverse_sqrt,
        })
        .collect();
    let worst = rows
        .iter()
        .map(|r| r.inverse.max(r.sqrt).max(r.inverse_sqrt))
        .fold(0.0f64, f64::max);
    tracing::info!(rows = rows.len(), worst_rel_err = worst, "sweep_table");

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&rows)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = provenance::Payload::new(
        "sweep",
        json!({ "min": min, "max": max, "steps": steps, "worst_rel_err": worst }),
    );
    provenance::write_sidecar(out, payload)
}

fn sorted(values: &[f32]) -> Value {
    tracing::info!(count = values.len(), "sorted");
    let s: SortedSequence = values.iter().copied().collect();
    if s.len() < values.len() {
        tracing::warn!(dropped = values.len() - s.len(), "NaN values skipped");
    }
    json!({
        "values": s.to_vec(),
        "min": s.first(),
        "max": s.last(),
        "len": s.len(),
    })
}

fn report() -> Result<()> {
    let mut doc = provenance::base_doc();
    // Spot values so the report shows the constants are wired correctly.
    doc["spot"] = json!({
        "approx_inverse(4)": approx_inverse(4.0),
        "approx_sqrt(4)": approx_sqrt(4.0),
        "approx_inverse_sqrt(4)": approx_inverse_sqrt(4.0),
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
