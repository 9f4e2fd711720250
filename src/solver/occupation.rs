use crate::constants::DEGENERACY_THRESHOLD;
use crate::hamiltonian::{HamiltonianError, HuckelModel};
use crate::param::{rauk, Element};
use ndarray::prelude::*;

/// Number of π electrons of the neutral model minus `charge`. Carbon and hydrogen give one
/// electron, heteroatoms one or two depending on whether they are double bonded. Sites
/// without an element are counted as carbon-like sites.
pub fn pi_electrons(model: &HuckelModel, charge: i32) -> Result<usize, HamiltonianError> {
    let mut n_electrons: i64 = 0;
    for i in 0..model.n_sites() {
        n_electrons += match model.site_element(i) {
            None | Some(Element::H) => 1,
            Some(element) => rauk::pi_electrons(element, model.pi_flavour(i))? as i64,
        };
    }
    n_electrons -= charge as i64;
    if n_electrons < 0 {
        return Err(HamiltonianError::InvalidElectronCount {
            n_electrons,
            n_orbitals: model.n_sites(),
        });
    }
    Ok(n_electrons as usize)
}

/// Occupation numbers of the orbitals at zero temperature. `orbe` has to be sorted in
/// ascending order. Every orbital takes two electrons, the electrons of a partially filled
/// degenerate shell are distributed evenly over the orbitals of the shell.
pub fn aufbau_occupation(
    orbe: ArrayView1<f64>,
    n_elec: usize,
) -> Result<Array1<f64>, HamiltonianError> {
    let n_orbs: usize = orbe.len();
    if n_elec > 2 * n_orbs {
        return Err(HamiltonianError::InvalidElectronCount {
            n_electrons: n_elec as i64,
            n_orbitals: n_orbs,
        });
    }
    let mut occupation: Array1<f64> = Array1::zeros(n_orbs);
    let mut n_left: f64 = n_elec as f64;
    let mut start: usize = 0;
    while start < n_orbs && n_left > 0.0 {
        // orbitals [start, end) form a degenerate shell
        let mut end: usize = start + 1;
        while end < n_orbs && (orbe[end] - orbe[start]).abs() < DEGENERACY_THRESHOLD {
            end += 1;
        }
        let shell_size: f64 = (end - start) as f64;
        let n_shell: f64 = n_left.min(2.0 * shell_size);
        occupation
            .slice_mut(s![start..end])
            .fill(n_shell / shell_size);
        n_left -= n_shell;
        start = end;
    }
    Ok(occupation)
}
