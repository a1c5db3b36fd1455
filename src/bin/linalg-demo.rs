//! linalg-demo: compute vector and matrix results and print them as JSON.
//!
//! The output is plain numeric data for a plotting front end to consume;
//! nothing is rendered here.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use linalg_primer::linalg::{
    distance, get_column, get_row, magnitude, make_matrix, shape, vector_mean, vector_sum,
};
use linalg_primer::{Matrix, Vector};
use serde::Serialize;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "linalg-demo")]
#[command(about = "Vector and matrix demonstrations with JSON output")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sum, mean, magnitudes and distance of a set of vectors
    Vectors {
        /// Comma-separated components, e.g. `1,2` (repeatable)
        #[arg(long = "vector", required = true, allow_hyphen_values = true, value_parser = parse_vector)]
        vectors: Vec<Vector<f64>>,
    },

    /// Shape, row and column of a matrix
    Matrix {
        /// Rows separated by `;`, components by `,`, e.g. `1,2;3,4;5,6`
        #[arg(long, allow_hyphen_values = true, value_parser = parse_matrix)]
        rows: Matrix<f64>,

        /// Row index to extract
        #[arg(long)]
        row: Option<usize>,

        /// Column index to extract
        #[arg(long)]
        column: Option<usize>,
    },

    /// N x N identity matrix built from an entry function
    Identity {
        /// Matrix size
        n: usize,
    },
}

#[derive(Serialize)]
struct VectorReport {
    vectors: Vec<Vector<f64>>,
    sum: Vector<f64>,
    mean: Vector<f64>,
    magnitudes: Vec<f64>,
    /// Distance between the first two vectors, when there are two
    distance: Option<f64>,
}

#[derive(Serialize)]
struct MatrixReport {
    shape: (usize, usize),
    row: Option<Vector<f64>>,
    column: Option<Vector<f64>>,
}

fn parse_components(text: &str) -> Result<Vec<f64>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }
    text.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("invalid number '{}'", part.trim()))
        })
        .collect()
}

fn parse_vector(text: &str) -> Result<Vector<f64>> {
    Ok(Vector::from_vec(parse_components(text)?))
}

fn parse_matrix(text: &str) -> Result<Matrix<f64>> {
    let rows = text
        .split(';')
        .map(parse_components)
        .collect::<Result<Vec<_>>>()?;
    Matrix::from_rows(rows).context("matrix rows must all have the same length")
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("linalg_demo=debug,linalg_primer=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn run_vectors(vectors: Vec<Vector<f64>>) -> Result<String> {
    tracing::debug!(count = vectors.len(), "summarising vectors");
    let sum = vector_sum(&vectors).context("cannot sum vectors")?;
    let mean = vector_mean(&vectors).context("cannot average vectors")?;
    let magnitudes = vectors.iter().map(magnitude).collect();
    let distance = match vectors.as_slice() {
        [first, second, ..] => Some(distance(first, second)?),
        _ => None,
    };

    let report = VectorReport {
        vectors,
        sum,
        mean,
        magnitudes,
        distance,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn run_matrix(matrix: &Matrix<f64>, row: Option<usize>, column: Option<usize>) -> Result<String> {
    tracing::debug!(shape = ?matrix.shape(), "inspecting matrix");
    let report = MatrixReport {
        shape: shape(matrix),
        row: row
            .map(|i| get_row(matrix, i))
            .transpose()
            .context("cannot extract row")?,
        column: column
            .map(|j| get_column(matrix, j))
            .transpose()
            .context("cannot extract column")?,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn run_identity(n: usize) -> Result<String> {
    tracing::debug!(n, "building identity");
    let eye = make_matrix(n, n, |i, j| if i == j { 1.0 } else { 0.0 })?;
    Ok(serde_json::to_string_pretty(&eye)?)
}

fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Commands::Vectors { vectors } => run_vectors(vectors),
        Commands::Matrix { rows, row, column } => run_matrix(&rows, row, column),
        Commands::Identity { n } => run_identity(n),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("demo failed: {e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
