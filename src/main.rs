use anyhow::{Context, Result};
use clap::{crate_name, crate_version, Arg, Command};
use env_logger::Builder;
use huckel::hamiltonian::{HuckelModel, SparseMatrix};
use huckel::initialization::Connectivity;
use huckel::io::{
    basis_labels, print_matrix, print_sparse_matrix, read_input, write_footer, write_header,
    write_matrix, write_sparse_matrix, Configuration,
};
use huckel::solver::logging::print_solution;
use huckel::solver::{pi_electrons, HuckelSolution};
use huckel::utils::Timer;
use log::{info, LevelFilter};
use ndarray::prelude::*;
use std::io::Write;

fn main() -> Result<()> {
    // Input.
    let matches = Command::new(crate_name!())
        .version(crate_version!())
        .about("one-electron tight-binding Hamiltonians of bonded chains")
        .arg(
            Arg::new("connectivity-file")
                .help(
                    "Sets the connectivity list to use, one bond 'A B order [pi|sigma]' per line",
                )
                .required(true)
                .index(1),
        )
        .get_matches();
    // The connectivity list is the only mandatory file to start a calculation.
    let connectivity_file: &str = matches
        .value_of("connectivity-file")
        .context("No connectivity file was given")?;
    let (connectivity, config): (Connectivity, Configuration) = read_input(connectivity_file)?;

    // Multithreading.
    rayon::ThreadPoolBuilder::new()
        .num_threads(config.parallelization.number_of_cores)
        .build_global()
        .context("Unable to initialize the thread pool")?;

    // Logging.
    // The log level is set.
    let log_level: LevelFilter = match config.verbose {
        2 => LevelFilter::Trace,
        1 => LevelFilter::Debug,
        0 => LevelFilter::Info,
        -1 => LevelFilter::Warn,
        -2 => LevelFilter::Error,
        _ => LevelFilter::Info,
    };
    // and the logger is build.
    Builder::new()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .filter(None, log_level)
        .init();

    // The program header is written to the command line.
    write_header();
    // and the total wall-time timer is started.
    let timer: Timer = Timer::start();

    let model: HuckelModel = config.build_model(connectivity)?;
    info!("{: <25} {}", "method:", model.method());
    info!("{: <25} {}", "number of sites:", model.n_sites());
    info!(
        "{: <25} {}",
        "number of bonds:",
        model.connectivity().bonds().len()
    );

    // One-body matrix.
    let spatial_basis: bool = config.model.spatial_basis;
    let labels: Vec<String> = basis_labels(model.connectivity().sites(), spatial_basis);
    if config.model.sparse {
        let h: SparseMatrix = model.one_body_sparse(spatial_basis)?;
        print_sparse_matrix(&labels, &h);
        if let Some(path) = &config.output.path {
            write_sparse_matrix(path, config.output.format, &labels, &h)?;
        }
    } else {
        let h: Array2<f64> = model.one_body(spatial_basis)?;
        print_matrix(&labels, h.view());
        if let Some(path) = &config.output.path {
            write_matrix(path, config.output.format, &labels, h.view())?;
        }
    }

    // On-site interactions.
    let u: Array1<f64> = model.onsite_interactions();
    if u.iter().any(|u_i| *u_i != 0.0) {
        info!("{: <25}", "on-site repulsion U:");
        for (label, u_i) in model.connectivity().sites().iter().zip(u.iter()) {
            info!("{: >10} {:>18.10}", label, u_i);
        }
    }

    // Hückel solution in the spatial basis.
    if config.electrons.solve {
        let n_electrons: usize = match config.electrons.n_electrons {
            Some(n) => n,
            None => pi_electrons(&model, config.electrons.charge)?,
        };
        let solution: HuckelSolution = HuckelSolution::new(&model, n_electrons)?;
        print_solution(&model, &solution);
    }

    // Finished.
    // The total wall-time is printed together with the end statement.
    write_footer(timer);
    Ok(())
}
