use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pathtrace::api::{
    draw_walk_grid, format_outcome, trace_path_with, Engine, Grid, ReplayToken, RowWidth, Trace,
    TraceCfg, TraceError, WalkCfg,
};
use serde::Serialize;
use serde_json::json;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::{write_sidecar, Payload, Report};

#[derive(Parser)]
#[command(name = "pathtrace")]
#[command(about = "Trace letter paths through ASCII pipe mazes")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Trace a maze; prints letters and path, or `Error`
    Trace {
        /// Maze file, one row per line; `-` reads stdin
        #[arg(long, default_value = "-")]
        input: String,
        /// Emit JSON instead of the two-line text form
        #[arg(long)]
        json: bool,
        /// Reject rows whose width differs from the first row
        #[arg(long)]
        strict_rows: bool,
        #[arg(long, value_enum, default_value_t = EngineArg::Stack)]
        engine: EngineArg,
        /// Also write the result here, with a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Draw a random maze from a replay token
    Gen {
        #[arg(long, default_value_t = 16)]
        rows: usize,
        #[arg(long, default_value_t = 16)]
        cols: usize,
        #[arg(long, default_value_t = 64)]
        max_len: usize,
        #[arg(long, default_value_t = 0.1)]
        letter_prob: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EngineArg {
    Stack,
    Recursive,
}

impl From<EngineArg> for Engine {
    fn from(e: EngineArg) -> Self {
        match e {
            EngineArg::Stack => Engine::Stack,
            EngineArg::Recursive => Engine::Recursive,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Trace {
            input,
            json,
            strict_rows,
            engine,
            out,
        } => {
            trace(&input, json, trace_cfg(strict_rows, engine), out.as_deref())
        }
        Action::Gen {
            rows,
            cols,
            max_len,
            letter_prob,
            seed,
            index,
            out,
        } => {
            let cfg = WalkCfg {
                rows,
                cols,
                max_len,
                letter_prob,
            };
            generate(cfg, ReplayToken { seed, index }, out.as_deref())
        }
        Action::Report => report(),
    }
}

fn trace_cfg(strict_rows: bool, engine: EngineArg) -> TraceCfg {
    TraceCfg {
        row_width: if strict_rows {
            RowWidth::Strict
        } else {
            RowWidth::FirstRow
        },
        engine: engine.into(),
    }
}

/// `params` block of a `trace` sidecar.
#[derive(Serialize)]
struct TraceParams {
    command: &'static str,
    engine: String,
    strict_rows: bool,
    json: bool,
    ok: bool,
}

fn trace(input: &str, as_json: bool, cfg: TraceCfg, out: Option<&Path>) -> Result<()> {
    let text = read_input(input)?;
    let grid = Grid::parse(&text);
    tracing::info!(
        input,
        rows = grid.row_count(),
        cols = grid.first_row_width(),
        engine = ?cfg.engine,
        "trace"
    );
    let outcome = trace_path_with(&grid, cfg);
    if let Err(e) = &outcome {
        // The flat `Error` token is the contract; the detail goes to the log.
        tracing::warn!(error = %e, "trace_failed");
    }
    let rendered = if as_json {
        render_json(&outcome)?
    } else {
        format_outcome(&outcome)
    };
    println!("{rendered}");

    if let Some(out) = out {
        write_output(out, &rendered)?;
        let params = TraceParams {
            command: "trace",
            engine: format!("{:?}", cfg.engine),
            strict_rows: cfg.row_width == RowWidth::Strict,
            json: as_json,
            ok: outcome.is_ok(),
        };
        let payload = Payload::new(serde_json::to_value(params)?)
            .with_input(input)
            .with_grid(&grid)
            .with_outcome(&outcome);
        write_sidecar(out, payload)?;
    }
    Ok(())
}

fn generate(cfg: WalkCfg, tok: ReplayToken, out: Option<&Path>) -> Result<()> {
    tracing::info!(rows = cfg.rows, cols = cfg.cols, seed = tok.seed, index = tok.index, "gen");
    let grid = draw_walk_grid(cfg, tok);
    let text = grid.to_string();
    print!("{text}");
    if let Some(out) = out {
        write_output(out, &text)?;
        let payload = Payload::new(json!({
            "command": "gen",
            "rows": cfg.rows,
            "cols": cfg.cols,
            "max_len": cfg.max_len,
            "letter_prob": cfg.letter_prob,
            "seed": tok.seed,
            "index": tok.index,
        }));
        write_sidecar(out, payload)?;
    }
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&Report::current())?);
    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading maze from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(input).with_context(|| format!("reading maze {input}"))
}

fn write_output(out: &Path, content: &str) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, content).with_context(|| format!("writing {}", out.display()))
}

fn render_json(outcome: &Result<Trace, TraceError>) -> Result<String> {
    let value = match outcome {
        Ok(t) => serde_json::to_value(t)?,
        Err(e) => json!({ "error": e.to_string() }),
    };
    Ok(serde_json::to_string_pretty(&value)?)
}
