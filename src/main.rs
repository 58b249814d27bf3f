//! Command line tool for transmission curves through isotopic samples

// standard library
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

// ntrans modules
use ntrans::transmission::{
    linear_grid, load_isotopes, log_grid, read_config, transmission_curves, MassTable, Result,
};
use ntrans::utils::{OptionExt, ValueExt};

// external crates
use clap::{ArgAction, Parser};
use log::{debug, error, info};

/// Transmission curves for every isotope in a configuration file
///
/// Curves are written to stdout, logging goes to stderr.
#[derive(Parser, Debug)]
#[command(name = "ntrans", version, about, long_about = None)]
struct Cli {
    /// Isotope configuration (INI, or JSON with a .json extension)
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// JSON object of atomic masses (g/mol) by isotope name
    #[arg(short, long, value_name = "FILE")]
    masses: Option<PathBuf>,

    /// Lowest energy on the grid (eV)
    #[arg(long, default_value_t = 1.0)]
    min: f64,

    /// Highest energy on the grid (eV)
    #[arg(long, default_value_t = 1.0e4)]
    max: f64,

    /// Number of grid energies
    #[arg(short, long, default_value_t = 1000)]
    points: usize,

    /// Linear rather than logarithmic energy spacing
    #[arg(long)]
    linear: bool,

    /// Write curves as JSON
    #[arg(long)]
    json: bool,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match run(&cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                error!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    // warnings are on by default
    let result = stderrlog::new()
        .modules(["ntrans", "ntrans_xs", "ntrans_transmission"])
        .quiet(cli.quiet)
        .verbosity(1 + cli.verbose as usize)
        .show_level(true)
        .init();

    if let Err(e) = result {
        eprintln!("Logging disabled: {e}");
    }
}

/// Energies to evaluate every curve on
fn energy_grid(cli: &Cli) -> Result<Vec<f64>> {
    let grid = if cli.linear {
        linear_grid(cli.min, cli.max, cli.points)?
    } else {
        log_grid(cli.min, cli.max, cli.points)?
    };
    info!(
        "{} {} energies from {} to {} eV",
        grid.len(),
        if cli.linear { "linear" } else { "log" },
        cli.min.sci(3, 2),
        cli.max.sci(3, 2)
    );
    Ok(grid)
}

/// Load everything and write the curves to `out`
fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let configs = read_config(&cli.config)?;
    info!("Found {} isotopes in {}", configs.len(), cli.config.display());

    let masses = match &cli.masses {
        Some(path) => MassTable::from_json_file(path)?,
        None => MassTable::new(),
    };
    debug!("Atomic mass table has {} entries", masses.len());

    for config in &configs {
        debug!(
            "{}: atomic mass override {}",
            config.name,
            config.atomic_mass.display()
        );
    }

    let isotopes = load_isotopes(&configs, &masses)?;
    for isotope in &isotopes {
        debug!("{isotope}");
    }

    let grid = energy_grid(cli)?;
    let curves = transmission_curves(&isotopes, &grid)?;

    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &curves)?;
        writeln!(out)?;
    } else {
        for curve in &curves {
            writeln!(out, "{curve}\n")?;
        }
    }
    out.flush()?;

    Ok(())
}
