use crate::hamiltonian::HuckelModel;
use crate::solver::HuckelSolution;
use log::{debug, info};
use ndarray::prelude::*;

pub fn print_solution(model: &HuckelModel, solution: &HuckelSolution) {
    info!("{:^80}", "");
    info!("{: ^80}", "Hückel solution");
    info!("{:-^80}", "");
    info!("{: <25} {}", "number of orbitals:", solution.n_orbitals());
    info!("{: <25} {}", "number of electrons:", solution.occupations.sum());
    info!("{: <25} {:.10}", "total energy:", solution.total_energy());
    if let Some(gap) = solution.gap() {
        info!("{: <25} {:.10}", "HOMO-LUMO gap:", gap);
    }
    print_orbital_information(
        solution.orbital_energies.view(),
        solution.occupations.view(),
    );
    print_charges(model, solution.charges().view());
    print_bond_orders(model, solution.bond_orders().view());
}

pub fn print_orbital_information(orbe: ArrayView1<f64>, f: ArrayView1<f64>) {
    info!("{:^80} ", "");
    info!(
        "{:^8} {:^6} {:>18} | {:^8} {:^6} {:>18}",
        "Orb.", "Occ.", "Energy", "Orb.", "Occ.", "Energy"
    );
    info!("{:-^71} ", "");
    let n_orbs: usize = orbe.len();
    for i in (0..n_orbs).step_by(2) {
        if i + 1 < n_orbs {
            info!(
                "MO:{:>5} {:>6.2} {:>18.14} | MO:{:>5} {:>6.2} {:>18.14}",
                i + 1,
                f[i],
                orbe[i],
                i + 2,
                f[i + 1],
                orbe[i + 1]
            );
        } else {
            info!("MO:{:>5} {:>6.2} {:>18.14} |", i + 1, f[i], orbe[i]);
        }
    }
    info!("{:-^71} ", "");
}

pub fn print_charges(model: &HuckelModel, q: ArrayView1<f64>) {
    info!("");
    info!("{: <35} ", "π electron populations");
    info!("{:-^35}", "");
    for (idx, qi) in q.iter().enumerate() {
        info!("Site {: >8} q: {:>18.14}", model.site_label(idx), qi);
    }
    info!("{:-^35}", "");
}

pub fn print_bond_orders(model: &HuckelModel, p: ArrayView2<f64>) {
    debug!("");
    debug!("{: <35} ", "bond orders of the connectivity");
    debug!("{:-^45}", "");
    for (idx, bond) in model.connectivity().bonds().iter().enumerate() {
        let (i, j): (usize, usize) = model.connectivity().bond_pair(idx);
        debug!(
            "{: >8} - {: <8} {:>4.1} {:>18.14}",
            bond.a,
            bond.b,
            bond.order.value(),
            p[[i, j]]
        );
    }
    debug!("{:-^45}", "");
}
