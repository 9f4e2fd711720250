use crate::defaults::{ALPHA, BETA, METHOD, WOLFSBERG_HELMHOLZ_CONSTANT};
use crate::initialization::{Bond, Connectivity};
use crate::param::{pi_flavour, Element, PiFlavour};
use derive_builder::Builder;
use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use error::HamiltonianError;
pub use sparse::SparseMatrix;

mod error;
pub mod hubbard;
pub mod one_body;
mod sparse;

/// Source of the tabulated alpha and beta values.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Heteroatom scale factors h_X and k_XY from Rauk's table relative to alpha and beta.
    Rauk,
    /// Ionization energies on the diagonal and beta_ij = K S_ij (H_ii + H_jj) / 2.
    WolfsbergHelmholz,
}

impl Default for Method {
    fn default() -> Self {
        Method::Rauk
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Method::Rauk => write!(f, "Rauk's table"),
            Method::WolfsbergHelmholz => write!(f, "Wolfsberg-Helmholz"),
        }
    }
}

/// Unordered pair of labels that identifies a bond in the parameter dictionaries.
/// The labels are either two site labels ("C1-N2") or two element symbols ("C-N").
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BondKey(String, String);

impl BondKey {
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            BondKey(a.to_string(), b.to_string())
        } else {
            BondKey(b.to_string(), a.to_string())
        }
    }
}

impl From<(&str, &str)> for BondKey {
    fn from(pair: (&str, &str)) -> Self {
        BondKey::new(pair.0, pair.1)
    }
}

impl FromStr for BondKey {
    type Err = HamiltonianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('-') {
            Some((a, b)) if !a.trim().is_empty() && !b.trim().is_empty() && !b.contains('-') => {
                Ok(BondKey::new(a.trim(), b.trim()))
            }
            _ => Err(HamiltonianError::InvalidBondKey(s.to_string())),
        }
    }
}

impl fmt::Display for BondKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.0, self.1)
    }
}

/// Off-diagonal element between the sites `i` and `j`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coupling {
    pub i: usize,
    pub j: usize,
    pub value: f64,
}

/// One-electron tight-binding model of a bonded chain. The diagonal of the Hamiltonian holds
/// the site energies (alpha) and the off-diagonal the couplings (beta) of bonded sites.
/// Values are taken, in order of precedence, from the explicit onsite array, the user
/// dictionaries and finally from the selected [Method].
///
/// ```ignore
/// let model = HuckelModelBuilder::default()
///     .connectivity(Connectivity::new(bonds)?)
///     .method(Method::WolfsbergHelmholz)
///     .build()?;
/// let h = model.one_body(true)?;
/// ```
#[derive(Builder, Clone, Debug)]
#[builder(build_fn(error = "HamiltonianError", validate = "Self::validate"))]
pub struct HuckelModel {
    /// Bonds and the site order of the matrices
    connectivity: Connectivity,
    #[builder(default = "METHOD")]
    method: Method,
    /// Coulomb integral of the carbon reference site
    #[builder(default = "ALPHA")]
    alpha: f64,
    /// Resonance integral of the C-C reference bond
    #[builder(default = "BETA")]
    beta: f64,
    #[builder(default = "WOLFSBERG_HELMHOLZ_CONSTANT")]
    wolfsberg_helmholz_constant: f64,
    /// Explicit diagonal in site order
    #[builder(default, setter(strip_option))]
    onsite_energies: Option<Vec<f64>>,
    /// Site label or element symbol -> onsite energy
    #[builder(default)]
    alpha_values: HashMap<String, f64>,
    /// Bond -> coupling
    #[builder(default)]
    beta_values: HashMap<BondKey, f64>,
    /// Bond -> overlap of the two site orbitals
    #[builder(default)]
    overlaps: HashMap<BondKey, f64>,
    /// Bond -> distance in angstrom
    #[builder(default)]
    distances: HashMap<BondKey, f64>,
    /// Site label or element symbol -> on-site repulsion U
    #[builder(default)]
    hubbard_u: HashMap<String, f64>,
    /// U of every site without an entry in `hubbard_u`
    #[builder(default, setter(strip_option))]
    uniform_u: Option<f64>,
    /// Site labels or element symbols treated as lone pair donors. Needed for aromatic
    /// rings written with 1.5 bond orders, e.g. the nitrogen of pyrrole.
    #[builder(default)]
    donors: HashSet<String>,
}

impl HuckelModelBuilder {
    fn validate(&self) -> Result<(), HamiltonianError> {
        if let (Some(connectivity), Some(Some(onsite))) = (&self.connectivity, &self.onsite_energies)
        {
            if onsite.len() != connectivity.n_sites() {
                return Err(HamiltonianError::OnsiteLengthMismatch {
                    expected: connectivity.n_sites(),
                    found: onsite.len(),
                });
            }
        }
        Ok(())
    }
}

impl HuckelModel {
    /// Model with default settings for a list of bonds.
    pub fn from_bonds(bonds: Vec<Bond>) -> Result<Self, HamiltonianError> {
        HuckelModelBuilder::default()
            .connectivity(Connectivity::new(bonds)?)
            .build()
    }

    pub fn connectivity(&self) -> &Connectivity {
        &self.connectivity
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn n_sites(&self) -> usize {
        self.connectivity.n_sites()
    }

    pub fn site_label(&self, i: usize) -> &str {
        &self.connectivity.sites()[i]
    }

    pub fn site_element(&self, i: usize) -> Option<Element> {
        Element::from_label(self.site_label(i))
    }

    /// Element of site `i` for table lookups.
    pub(crate) fn table_element(&self, i: usize) -> Result<Element, HamiltonianError> {
        self.site_element(i)
            .ok_or_else(|| HamiltonianError::UnknownElement(self.site_label(i).to_string()))
    }

    /// Halogens and sites listed as donors give a lone pair, other sites follow their π
    /// bond orders.
    pub fn pi_flavour(&self, i: usize) -> PiFlavour {
        match self.site_element(i) {
            Some(element) if element.is_halogen() => PiFlavour::Donor,
            _ if self.is_donor(i) => PiFlavour::Donor,
            _ => pi_flavour(self.connectivity.max_pi_bond_order(i)),
        }
    }

    fn is_donor(&self, i: usize) -> bool {
        self.donors.contains(self.site_label(i))
            || self
                .site_element(i)
                .map_or(false, |element| self.donors.contains(element.symbol()))
    }

    /// Looks up a site value by its label first and by its element symbol second.
    pub(crate) fn lookup_site(&self, map: &HashMap<String, f64>, i: usize) -> Option<f64> {
        map.get(self.site_label(i)).copied().or_else(|| {
            self.site_element(i)
                .and_then(|element| map.get(element.symbol()).copied())
        })
    }

    /// Looks up a bond value by its label pair first and by its element pair second.
    pub(crate) fn lookup_bond(
        &self,
        map: &HashMap<BondKey, f64>,
        i: usize,
        j: usize,
    ) -> Option<f64> {
        map.get(&BondKey::new(self.site_label(i), self.site_label(j)))
            .copied()
            .or_else(|| match (self.site_element(i), self.site_element(j)) {
                (Some(a), Some(b)) => map.get(&BondKey::new(a.symbol(), b.symbol())).copied(),
                _ => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bond_keys_are_unordered() {
        assert_eq!(BondKey::new("C2", "C1"), BondKey::new("C1", "C2"));
        assert_eq!("N3-C1".parse::<BondKey>().unwrap(), BondKey::from(("C1", "N3")));
        assert_eq!(BondKey::new("O", "C").to_string(), "C-O");
        assert!("C1".parse::<BondKey>().is_err());
        assert!("C1-".parse::<BondKey>().is_err());
        assert!("C1-C2-C3".parse::<BondKey>().is_err());
    }

    #[test]
    fn builder_requires_connectivity() {
        let result = HuckelModelBuilder::default().alpha(1.0).build();
        assert_eq!(
            result.unwrap_err(),
            HamiltonianError::UninitializedField("connectivity")
        );
    }

    #[test]
    fn builder_checks_onsite_length() {
        let bonds = vec![Bond::from(("C1", "C2", 2))];
        let result = HuckelModelBuilder::default()
            .connectivity(Connectivity::new(bonds).unwrap())
            .onsite_energies(vec![0.0, 0.0, 0.0])
            .build();
        assert_eq!(
            result.unwrap_err(),
            HamiltonianError::OnsiteLengthMismatch {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn site_flavours() {
        let model = HuckelModel::from_bonds(vec![
            Bond::from(("C1", "N2", 2)),
            Bond::from(("N2", "C3", 1)),
            Bond::from(("C3", "Cl4", 2)),
            Bond::from(("C1", "O5", 1)),
        ])
        .unwrap();
        assert_eq!(model.pi_flavour(1), PiFlavour::OneElectron);
        assert_eq!(model.pi_flavour(3), PiFlavour::Donor);
        assert_eq!(model.pi_flavour(4), PiFlavour::Donor);
    }

    #[test]
    fn donors_override_bond_orders() {
        let bonds = vec![
            Bond::from(("C1", "C2", 1.5)),
            Bond::from(("C2", "C3", 1.5)),
            Bond::from(("C3", "C4", 1.5)),
            Bond::from(("C4", "N5", 1.5)),
            Bond::from(("N5", "C1", 1.5)),
        ];
        let plain = HuckelModel::from_bonds(bonds.clone()).unwrap();
        assert_eq!(plain.pi_flavour(4), PiFlavour::OneElectron);
        let by_label = HuckelModelBuilder::default()
            .connectivity(Connectivity::new(bonds.clone()).unwrap())
            .donors(["N5".to_string()].into_iter().collect())
            .build()
            .unwrap();
        assert_eq!(by_label.pi_flavour(4), PiFlavour::Donor);
        assert_eq!(by_label.pi_flavour(0), PiFlavour::OneElectron);
        let by_element = HuckelModelBuilder::default()
            .connectivity(Connectivity::new(bonds).unwrap())
            .donors(["N".to_string()].into_iter().collect())
            .build()
            .unwrap();
        assert_eq!(by_element.pi_flavour(4), PiFlavour::Donor);
    }

    #[test]
    fn lookups_prefer_labels() {
        let bonds = vec![Bond::from(("C1", "N2", 2)), Bond::from(("N2", "X3", 1))];
        let mut alpha_values: HashMap<String, f64> = HashMap::new();
        alpha_values.insert("N".to_string(), -0.7);
        alpha_values.insert("C1".to_string(), 0.2);
        let mut beta_values: HashMap<BondKey, f64> = HashMap::new();
        beta_values.insert(BondKey::new("C", "N"), -0.9);
        beta_values.insert(BondKey::new("N2", "C1"), -1.1);
        let model = HuckelModelBuilder::default()
            .connectivity(Connectivity::new(bonds).unwrap())
            .alpha_values(alpha_values.clone())
            .beta_values(beta_values.clone())
            .build()
            .unwrap();
        assert_eq!(model.lookup_site(&alpha_values, 0), Some(0.2));
        assert_eq!(model.lookup_site(&alpha_values, 1), Some(-0.7));
        assert_eq!(model.lookup_site(&alpha_values, 2), None);
        assert_eq!(model.lookup_bond(&beta_values, 1, 0), Some(-1.1));
        assert_eq!(model.lookup_bond(&beta_values, 1, 2), None);
        assert_eq!(model.site_element(2), None);
        assert!(matches!(
            model.table_element(2),
            Err(HamiltonianError::UnknownElement(_))
        ));
    }
}
