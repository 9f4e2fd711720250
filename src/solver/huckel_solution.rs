use crate::hamiltonian::{HamiltonianError, HuckelModel};
use crate::solver::occupation::aufbau_occupation;
use crate::utils::argsort;
use log::debug;
use nalgebra::{DMatrix, SymmetricEigen};
use ndarray::prelude::*;

/// Eigenvalues and eigenvectors of the spatial one-body matrix together with the occupation
/// of the orbitals.
#[derive(Clone, Debug)]
pub struct HuckelSolution {
    /// Orbital energies in ascending order
    pub orbital_energies: Array1<f64>,
    /// MO coefficients, the k-th column belongs to the k-th orbital energy
    pub orbitals: Array2<f64>,
    pub occupations: Array1<f64>,
}

/// Eigendecomposition of a symmetric matrix with ascending eigenvalues.
pub fn diagonalize(h: ArrayView2<f64>) -> (Array1<f64>, Array2<f64>) {
    let n: usize = h.nrows();
    let eigen = SymmetricEigen::new(DMatrix::from_fn(n, n, |i, j| h[[i, j]]));
    let orbe: Array1<f64> = eigen.eigenvalues.iter().cloned().collect();
    let order: Vec<usize> = argsort(orbe.view());
    let orbe: Array1<f64> = order.iter().map(|k| orbe[*k]).collect();
    let orbs: Array2<f64> =
        Array2::from_shape_fn((n, n), |(i, k)| eigen.eigenvectors[(i, order[k])]);
    (orbe, orbs)
}

impl HuckelSolution {
    pub fn new(model: &HuckelModel, n_electrons: usize) -> Result<Self, HamiltonianError> {
        let h: Array2<f64> = model.one_body(true)?;
        let (orbe, orbs): (Array1<f64>, Array2<f64>) = diagonalize(h.view());
        let occupations: Array1<f64> = aufbau_occupation(orbe.view(), n_electrons)?;
        debug!("{} orbitals occupied by {} electrons", orbe.len(), n_electrons);
        Ok(Self {
            orbital_energies: orbe,
            orbitals: orbs,
            occupations,
        })
    }

    pub fn n_orbitals(&self) -> usize {
        self.orbital_energies.len()
    }

    /// Sum of the orbital energies weighted by their occupation.
    pub fn total_energy(&self) -> f64 {
        self.occupations.dot(&self.orbital_energies)
    }

    /// Electron population q_i = sum_k n_k c_ik^2 of every site.
    pub fn charges(&self) -> Array1<f64> {
        (&self.orbitals * &self.orbitals).dot(&self.occupations)
    }

    /// Density matrix p_ij = sum_k n_k c_ik c_jk. Its off-diagonal elements are the
    /// Coulson bond orders and its diagonal the site populations.
    pub fn bond_orders(&self) -> Array2<f64> {
        (&self.orbitals * &self.occupations).dot(&self.orbitals.t())
    }

    /// Index of the highest orbital that holds electrons.
    pub fn homo(&self) -> Option<usize> {
        self.occupations.iter().rposition(|occ| *occ > 0.0)
    }

    /// Index of the lowest empty orbital.
    pub fn lumo(&self) -> Option<usize> {
        self.occupations.iter().position(|occ| *occ == 0.0)
    }

    pub fn gap(&self) -> Option<f64> {
        match (self.homo(), self.lumo()) {
            (Some(homo), Some(lumo)) => {
                Some(self.orbital_energies[lumo] - self.orbital_energies[homo])
            }
            _ => None,
        }
    }
}
