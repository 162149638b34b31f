//! QCS - Quantum Circuit Simulator
//! Command-line driver for the dense state-vector engine

mod demo;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use qcs_core::{QuantumGate, QuantumSimulator, SimulatorConfig, StandardGate, StateSnapshot};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use demo::{DemoReport, run_reference_circuit};

#[derive(Parser)]
#[command(name = "qcs")]
#[command(author = "SIL Contributors")]
#[command(version = "2026.1.16")]
#[command(about = "QCS - dense state-vector quantum simulator", long_about = None)]
struct Cli {
    /// Simulator configuration file (TOML)
    #[arg(short, long, global = true, value_name = "FILE", env = "QCS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the reference circuit: H(0), CNOT(0, 1), X(1), measure(1)
    Demo {
        /// Number of qubits in the register (at least 2)
        #[arg(short, long, default_value_t = 2)]
        qubits: usize,

        /// Seed for the measurement sampler (overrides the config file)
        #[arg(short, long, env = "QCS_SEED")]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the gate catalog with its matrices
    Gates,

    /// Show conventions and the effective configuration
    Info,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qcs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Demo { qubits, seed, json } => {
            demo_command(cli.config.as_deref(), qubits, seed, json)
        }
        Commands::Gates => gates_command(),
        Commands::Info => info_command(cli.config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Defaults, then the config file, then command-line overrides
fn load_config(path: Option<&Path>, seed: Option<u64>) -> Result<SimulatorConfig> {
    let mut config = match path {
        Some(path) => SimulatorConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SimulatorConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    debug!(?config, "configuration loaded");
    Ok(config)
}

// ============================================================================
// Commands
// ============================================================================

fn demo_command(
    config_path: Option<&Path>,
    qubits: usize,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    if qubits < 2 {
        bail!("the reference circuit needs at least 2 qubits, got {}", qubits);
    }
    let config = load_config(config_path, seed)?;

    let mut sim = QuantumSimulator::from_config(qubits, config)?;
    info!(qubits, "running reference circuit");
    let report = run_reference_circuit(&mut sim)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn gates_command() -> Result<()> {
    println!("{}", "Gate catalog".bold());
    for gate in StandardGate::ALL {
        let unitary = if gate.is_unitary() { "✓".green() } else { "✗".red() };
        let qubits = gate.num_qubits()?;
        println!();
        println!(
            "{} {} ({} qubit{})",
            unitary,
            gate.name().cyan().bold(),
            qubits,
            if qubits == 1 { "" } else { "s" }
        );
        print!("{}", gate.matrix());
    }
    Ok(())
}

fn info_command(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path, None)?;

    println!("{}", "QCS - Quantum Circuit Simulator".bold());
    println!();
    println!("{}", "Conventions:".bold());
    println!("  • Qubit 0 is the most significant bit of the basis index");
    println!("  • Bitstrings print qubit 0 first");
    println!("  • Two-qubit gates: first target is the control / high bit");
    println!("  • measure(q) collapses the whole register; see measure_qubit for partial");
    println!();
    println!("{}", "Effective configuration:".bold());
    print!("{}", config.to_toml_string()?);
    Ok(())
}

// ============================================================================
// Output
// ============================================================================

fn print_report(report: &DemoReport) {
    println!("{}", "Circuit:".bold());
    for step in &report.steps {
        println!("  {}", step.cyan());
    }
    println!();
    println!(
        "{} {} (measure({}))",
        "Measurement result:".green().bold(),
        report.measurement.yellow().bold(),
        report.measured_qubit
    );
    println!();
    print_state(&report.final_state);
}

fn print_state(state: &StateSnapshot) {
    println!("{}", "Final state:".bold());
    for (index, (amplitude, probability)) in state
        .amplitudes
        .iter()
        .zip(&state.probabilities)
        .enumerate()
    {
        let ket = format!("|{:0width$b}⟩", index, width = state.num_qubits);
        let line = format!(
            "  {}  {:>8.5}{:+.5}i   p = {:.5}",
            ket, amplitude.re, amplitude.im, probability
        );
        if *probability > 0.0 {
            println!("{}", line.bold());
        } else {
            println!("{}", line.dimmed());
        }
    }
}
