use crate::constants::{BOHR_TO_ANGS, PAULING_BOND_ORDER_CONSTANT};
use crate::hamiltonian::HamiltonianError;
use crate::initialization::BondSymmetry;
use crate::param::{Element, ElementData, Shell};

/// Bond length in angstrom from the covalent radii and Pauling's bond order relation.
pub fn pauling_distance(a: Element, b: Element, order: f64) -> f64 {
    a.data().covalent_radius + b.data().covalent_radius
        - PAULING_BOND_ORDER_CONSTANT * order.log10()
}

// Mulliken's overlap integrals for Slater orbitals with equal exponents, p = zeta * R / a0
fn overlap_1s_1s(p: f64) -> f64 {
    (-p).exp() * (1.0 + p + p.powi(2) / 3.0)
}

fn overlap_2p_2p_pi(p: f64) -> f64 {
    (-p).exp() * (1.0 + p + 2.0 * p.powi(2) / 5.0 + p.powi(3) / 15.0)
}

fn overlap_2p_2p_sigma(p: f64) -> f64 {
    (-p).exp() * (-1.0 - p - p.powi(2) / 5.0 + 2.0 * p.powi(3) / 15.0 + p.powi(4) / 15.0)
}

/// Overlap of the valence orbitals of two atoms at `distance` angstrom. Different exponents
/// are replaced by their mean.
pub fn slater_overlap(
    a: Element,
    b: Element,
    distance: f64,
    symmetry: BondSymmetry,
) -> Result<f64, HamiltonianError> {
    let data_a: &ElementData = a.data();
    let data_b: &ElementData = b.data();
    let zeta: f64 = 0.5 * (data_a.slater_exponent + data_b.slater_exponent);
    let p: f64 = zeta * distance / BOHR_TO_ANGS;
    match (data_a.shell, data_b.shell, symmetry) {
        (Shell::S1, Shell::S1, _) => Ok(overlap_1s_1s(p)),
        (Shell::P2, Shell::P2, BondSymmetry::Pi) => Ok(overlap_2p_2p_pi(p)),
        (Shell::P2, Shell::P2, BondSymmetry::Sigma) => Ok(overlap_2p_2p_sigma(p)),
        _ => Err(HamiltonianError::UnsupportedOverlap {
            a: a.symbol().to_string(),
            b: b.symbol().to_string(),
        }),
    }
}

/// beta_ij = K * S_ij * (H_ii + H_jj) / 2
pub fn wolfsberg_helmholz(constant: f64, overlap: f64, h_ii: f64, h_jj: f64) -> f64 {
    constant * overlap * 0.5 * (h_ii + h_jj)
}
