use crate::hamiltonian::{Coupling, HamiltonianError, HuckelModel, Method, SparseMatrix};
use crate::initialization::{Bond, BondSymmetry};
use crate::param::rauk::{rauk_k, rauk_parameters};
use crate::param::wolfsberg_helmholz::{pauling_distance, slater_overlap, wolfsberg_helmholz};
use crate::param::Element;
use log::trace;
use ndarray::prelude::*;
use rayon::prelude::*;

/// Expands a matrix in the spatial basis to the spin-orbital basis. Spin orbital 2i is the
/// spin up and 2i + 1 the spin down orbital of site i. Both spin blocks are identical and
/// do not mix.
pub fn spin_orbital_basis(h: ArrayView2<f64>) -> Array2<f64> {
    let (n, m): (usize, usize) = h.dim();
    let mut h_spin: Array2<f64> = Array2::zeros((2 * n, 2 * m));
    h_spin.slice_mut(s![0..;2, 0..;2]).assign(&h);
    h_spin.slice_mut(s![1..;2, 1..;2]).assign(&h);
    h_spin
}

impl HuckelModel {
    /// Onsite energy of site `i` before the explicit onsite array is taken into account.
    fn site_energy(&self, i: usize) -> Result<f64, HamiltonianError> {
        if let Some(value) = self.lookup_site(&self.alpha_values, i) {
            return Ok(value);
        }
        let element: Element = self.table_element(i)?;
        match self.method {
            Method::Rauk => {
                let h: f64 = rauk_parameters(element, self.pi_flavour(i))?.h;
                Ok(self.alpha + h * self.beta)
            }
            Method::WolfsbergHelmholz => Ok(element.data().ionization_energy),
        }
    }

    /// The diagonal of the one-body matrix (alpha values) in site order.
    pub fn site_energies(&self) -> Result<Array1<f64>, HamiltonianError> {
        let n_sites: usize = self.n_sites();
        match &self.onsite_energies {
            Some(onsite) if onsite.len() != n_sites => {
                Err(HamiltonianError::OnsiteLengthMismatch {
                    expected: n_sites,
                    found: onsite.len(),
                })
            }
            Some(onsite) => Ok(Array1::from(onsite.clone())),
            None => (0..n_sites)
                .map(|i| self.site_energy(i))
                .collect::<Result<Array1<f64>, HamiltonianError>>(),
        }
    }

    /// Overlap of the orbitals of a bond for the Wolfsberg-Helmholz formula.
    pub fn overlap(&self, bond_index: usize) -> Result<f64, HamiltonianError> {
        let (i, j): (usize, usize) = self.connectivity.bond_pair(bond_index);
        if let Some(overlap) = self.lookup_bond(&self.overlaps, i, j) {
            return Ok(overlap);
        }
        let bond: &Bond = &self.connectivity.bonds()[bond_index];
        let element_i: Element = self.table_element(i)?;
        let element_j: Element = self.table_element(j)?;
        let distance: f64 = self
            .lookup_bond(&self.distances, i, j)
            .unwrap_or_else(|| pauling_distance(element_i, element_j, bond.order.value()));
        slater_overlap(element_i, element_j, distance, bond.symmetry())
    }

    fn coupling(
        &self,
        bond_index: usize,
        alpha: ArrayView1<f64>,
    ) -> Result<Coupling, HamiltonianError> {
        let (i, j): (usize, usize) = self.connectivity.bond_pair(bond_index);
        let value: f64 = match self.lookup_bond(&self.beta_values, i, j) {
            Some(value) => value,
            None => match self.method {
                Method::Rauk => {
                    let bond: &Bond = &self.connectivity.bonds()[bond_index];
                    if bond.symmetry() == BondSymmetry::Sigma {
                        return Err(HamiltonianError::MissingParameter(format!(
                            "the sigma bond {}-{} in Rauk's table",
                            bond.a, bond.b
                        )));
                    }
                    let k: f64 = rauk_k(
                        (self.table_element(i)?, self.pi_flavour(i)),
                        (self.table_element(j)?, self.pi_flavour(j)),
                    )?;
                    k * self.beta
                }
                Method::WolfsbergHelmholz => wolfsberg_helmholz(
                    self.wolfsberg_helmholz_constant,
                    self.overlap(bond_index)?,
                    alpha[i],
                    alpha[j],
                ),
            },
        };
        trace!(
            "beta {: >6}-{: <6} {:>14.8}",
            self.site_label(i),
            self.site_label(j),
            value
        );
        Ok(Coupling { i, j, value })
    }

    /// One coupling per bond in the order of the connectivity list. For the
    /// Wolfsberg-Helmholz method the diagonal elements enter the couplings.
    pub fn couplings(&self) -> Result<Vec<Coupling>, HamiltonianError> {
        let alpha: Array1<f64> = self.site_energies()?;
        self.couplings_from(alpha.view())
    }

    fn couplings_from(&self, alpha: ArrayView1<f64>) -> Result<Vec<Coupling>, HamiltonianError> {
        (0..self.connectivity.bonds().len())
            .into_par_iter()
            .map(|bond_index| self.coupling(bond_index, alpha))
            .collect()
    }

    /// Dense one-electron matrix. In the spatial basis it has one row per site, otherwise
    /// it is expanded to the spin-orbital basis (see [spin_orbital_basis]).
    pub fn one_body(&self, spatial_basis: bool) -> Result<Array2<f64>, HamiltonianError> {
        let alpha: Array1<f64> = self.site_energies()?;
        let couplings: Vec<Coupling> = self.couplings_from(alpha.view())?;

        let mut h: Array2<f64> = Array2::from_diag(&alpha);
        for coupling in couplings.iter() {
            h[[coupling.i, coupling.j]] = coupling.value;
            h[[coupling.j, coupling.i]] = coupling.value;
        }

        if spatial_basis {
            Ok(h)
        } else {
            Ok(spin_orbital_basis(h.view()))
        }
    }

    /// Same matrix as [HuckelModel::one_body] in coordinate format.
    pub fn one_body_sparse(&self, spatial_basis: bool) -> Result<SparseMatrix, HamiltonianError> {
        let alpha: Array1<f64> = self.site_energies()?;
        let couplings: Vec<Coupling> = self.couplings_from(alpha.view())?;

        let mut triplets: Vec<(usize, usize, f64)> =
            Vec::with_capacity(alpha.len() + 2 * couplings.len());
        triplets.extend(alpha.iter().enumerate().map(|(i, value)| (i, i, *value)));
        for coupling in couplings.iter() {
            triplets.push((coupling.i, coupling.j, coupling.value));
            triplets.push((coupling.j, coupling.i, coupling.value));
        }

        let n: usize = alpha.len();
        if spatial_basis {
            Ok(SparseMatrix::from_triplets((n, n), triplets))
        } else {
            let spin_triplets: Vec<(usize, usize, f64)> = triplets
                .into_iter()
                .flat_map(|(i, j, value)| {
                    [(2 * i, 2 * j, value), (2 * i + 1, 2 * j + 1, value)]
                })
                .collect();
            Ok(SparseMatrix::from_triplets((2 * n, 2 * n), spin_triplets))
        }
    }
}
