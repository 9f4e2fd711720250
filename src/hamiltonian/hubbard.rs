use crate::hamiltonian::HuckelModel;
use ndarray::prelude::*;

impl HuckelModel {
    /// On-site repulsion U of every site, zero where no value was given.
    pub fn onsite_interactions(&self) -> Array1<f64> {
        (0..self.n_sites())
            .map(|i| {
                self.lookup_site(&self.hubbard_u, i)
                    .or(self.uniform_u)
                    .unwrap_or(0.0)
            })
            .collect()
    }

    /// Two-electron integrals (pq|rs) of the Hubbard model in chemists' notation.
    /// In the spatial basis only (ii|ii) = U_i is non-zero. In the spin-orbital basis
    /// U_i couples the opposite spins of site i: (iσ iσ|iτ iτ) = U_i for σ ≠ τ.
    pub fn two_body(&self, spatial_basis: bool) -> Array4<f64> {
        let u: Array1<f64> = self.onsite_interactions();
        let n: usize = u.len();
        if spatial_basis {
            let mut v: Array4<f64> = Array4::zeros((n, n, n, n));
            for (i, u_i) in u.iter().enumerate() {
                v[[i, i, i, i]] = *u_i;
            }
            v
        } else {
            let mut v: Array4<f64> = Array4::zeros((2 * n, 2 * n, 2 * n, 2 * n));
            for (i, u_i) in u.iter().enumerate() {
                let (up, down): (usize, usize) = (2 * i, 2 * i + 1);
                v[[up, up, down, down]] = *u_i;
                v[[down, down, up, up]] = *u_i;
            }
            v
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hamiltonian::HuckelModelBuilder;
    use crate::initialization::{Bond, Connectivity};
    use approx::assert_abs_diff_eq;
    use hashbrown::HashMap;

    fn hubbard_dimer() -> HuckelModel {
        let mut hubbard_u: HashMap<String, f64> = HashMap::new();
        hubbard_u.insert("N".to_string(), 4.0);
        hubbard_u.insert("C3".to_string(), 2.5);
        HuckelModelBuilder::default()
            .connectivity(
                Connectivity::new(vec![Bond::from(("C1", "N2", 2)), Bond::from(("N2", "C3", 1))])
                    .unwrap(),
            )
            .hubbard_u(hubbard_u)
            .uniform_u(1.0)
            .build()
            .unwrap()
    }

    #[test]
    fn onsite_interactions_follow_lookup_order() {
        let u: Array1<f64> = hubbard_dimer().onsite_interactions();
        assert_eq!(u, array![1.0, 4.0, 2.5]);
    }

    #[test]
    fn no_interaction_without_values() {
        let model = HuckelModel::from_bonds(vec![Bond::from(("C1", "C2", 2))]).unwrap();
        assert_eq!(model.onsite_interactions(), array![0.0, 0.0]);
        assert_abs_diff_eq!(model.two_body(true).sum(), 0.0);
    }

    #[test]
    fn spatial_two_body() {
        let v: Array4<f64> = hubbard_dimer().two_body(true);
        assert_eq!(v.dim(), (3, 3, 3, 3));
        assert_abs_diff_eq!(v[[1, 1, 1, 1]], 4.0);
        assert_abs_diff_eq!(v[[0, 0, 1, 1]], 0.0);
        assert_abs_diff_eq!(v.sum(), 7.5);
    }

    #[test]
    fn spin_orbital_two_body() {
        let v: Array4<f64> = hubbard_dimer().two_body(false);
        assert_eq!(v.dim(), (6, 6, 6, 6));
        assert_abs_diff_eq!(v[[2, 2, 3, 3]], 4.0);
        assert_abs_diff_eq!(v[[3, 3, 2, 2]], 4.0);
        // no same-spin interaction
        assert_abs_diff_eq!(v[[2, 2, 2, 2]], 0.0);
        assert_abs_diff_eq!(v.sum(), 15.0);
    }
}
