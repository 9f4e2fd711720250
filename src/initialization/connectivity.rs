use crate::hamiltonian::HamiltonianError;
use enum_as_inner::EnumAsInner;
use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bond order of a connectivity entry. Integer orders are kept as given so that the
/// connectivity can be written back unchanged.
#[derive(Copy, Clone, Debug, PartialEq, EnumAsInner)]
pub enum BondOrder {
    Integer(u32),
    Real(f64),
}

impl BondOrder {
    pub fn value(&self) -> f64 {
        match self {
            BondOrder::Integer(order) => *order as f64,
            BondOrder::Real(order) => *order,
        }
    }
}

impl From<u32> for BondOrder {
    fn from(order: u32) -> Self {
        BondOrder::Integer(order)
    }
}

impl From<f64> for BondOrder {
    fn from(order: f64) -> Self {
        BondOrder::Real(order)
    }
}

impl FromStr for BondOrder {
    type Err = std::num::ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u32>() {
            Ok(order) => Ok(BondOrder::Integer(order)),
            Err(_) => s.parse::<f64>().map(BondOrder::Real),
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BondOrder::Integer(order) => write!(f, "{}", order),
            BondOrder::Real(order) => write!(f, "{}", order),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BondSymmetry {
    Pi,
    Sigma,
}

impl Default for BondSymmetry {
    fn default() -> Self {
        BondSymmetry::Pi
    }
}

impl FromStr for BondSymmetry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pi" => Ok(BondSymmetry::Pi),
            "sigma" => Ok(BondSymmetry::Sigma),
            other => Err(format!(
                "unknown bond symmetry '{}', expected 'pi' or 'sigma'",
                other
            )),
        }
    }
}

impl fmt::Display for BondSymmetry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BondSymmetry::Pi => write!(f, "pi"),
            BondSymmetry::Sigma => write!(f, "sigma"),
        }
    }
}

/// One entry of the connectivity list: two site labels, the bond order and optionally the
/// symmetry of the bond.
#[derive(Clone, Debug, PartialEq)]
pub struct Bond {
    pub a: String,
    pub b: String,
    pub order: BondOrder,
    pub symmetry: Option<BondSymmetry>,
}

impl Bond {
    pub fn new<O: Into<BondOrder>>(a: &str, b: &str, order: O) -> Self {
        Self {
            a: a.to_string(),
            b: b.to_string(),
            order: order.into(),
            symmetry: None,
        }
    }

    pub fn with_symmetry<O: Into<BondOrder>>(
        a: &str,
        b: &str,
        order: O,
        symmetry: BondSymmetry,
    ) -> Self {
        Self {
            symmetry: Some(symmetry),
            ..Self::new(a, b, order)
        }
    }

    /// Symmetry of the bond, untagged bonds are π bonds.
    pub fn symmetry(&self) -> BondSymmetry {
        self.symmetry.unwrap_or_default()
    }
}

impl From<(&str, &str, u32)> for Bond {
    fn from(tuple: (&str, &str, u32)) -> Self {
        Bond::new(tuple.0, tuple.1, tuple.2)
    }
}

impl From<(&str, &str, f64)> for Bond {
    fn from(tuple: (&str, &str, f64)) -> Self {
        Bond::new(tuple.0, tuple.1, tuple.2)
    }
}

impl From<(&str, &str, u32, BondSymmetry)> for Bond {
    fn from(tuple: (&str, &str, u32, BondSymmetry)) -> Self {
        Bond::with_symmetry(tuple.0, tuple.1, tuple.2, tuple.3)
    }
}

impl From<(&str, &str, f64, BondSymmetry)> for Bond {
    fn from(tuple: (&str, &str, f64, BondSymmetry)) -> Self {
        Bond::with_symmetry(tuple.0, tuple.1, tuple.2, tuple.3)
    }
}

fn check_label(label: &str) -> Result<(), HamiltonianError> {
    if label.is_empty() || label.contains('-') || label.chars().any(char::is_whitespace) {
        return Err(HamiltonianError::InvalidLabel(label.to_string()));
    }
    Ok(())
}

/// Ordered list of bonds together with the sites they connect. The sites are numbered in
/// the order of their first appearance in the bond list, this numbering is the row/column
/// order of every matrix built from the connectivity.
#[derive(Clone, Debug)]
pub struct Connectivity {
    bonds: Vec<Bond>,
    sites: Vec<String>,
    index: HashMap<String, usize>,
    /// Pair of site indices for every bond
    pairs: Vec<(usize, usize)>,
}

impl Connectivity {
    pub fn new(bonds: Vec<Bond>) -> Result<Self, HamiltonianError> {
        if bonds.is_empty() {
            return Err(HamiltonianError::EmptyConnectivity);
        }
        let mut sites: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut pairs: Vec<(usize, usize)> = Vec::with_capacity(bonds.len());
        let mut seen: HashSet<(usize, usize)> = HashSet::with_capacity(bonds.len());

        for bond in bonds.iter() {
            check_label(&bond.a)?;
            check_label(&bond.b)?;
            if bond.a == bond.b {
                return Err(HamiltonianError::SelfBond(bond.a.clone()));
            }
            let order: f64 = bond.order.value();
            if !order.is_finite() || order <= 0.0 {
                return Err(HamiltonianError::InvalidBondOrder {
                    a: bond.a.clone(),
                    b: bond.b.clone(),
                    order,
                });
            }
            let mut site_index = |label: &str| -> usize {
                match index.get(label) {
                    Some(idx) => *idx,
                    None => {
                        sites.push(label.to_string());
                        index.insert(label.to_string(), sites.len() - 1);
                        sites.len() - 1
                    }
                }
            };
            let i: usize = site_index(&bond.a);
            let j: usize = site_index(&bond.b);
            if !seen.insert((i.min(j), i.max(j))) {
                return Err(HamiltonianError::DuplicateBond(
                    bond.a.clone(),
                    bond.b.clone(),
                ));
            }
            pairs.push((i, j));
        }

        Ok(Self {
            bonds,
            sites,
            index,
            pairs,
        })
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Site labels in order of first appearance.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn n_sites(&self) -> usize {
        self.sites.len()
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn bond_indices(&self) -> Vec<(usize, usize)> {
        self.pairs.clone()
    }

    /// Site indices of the bond at position `bond_index` of the bond list.
    pub fn bond_pair(&self, bond_index: usize) -> (usize, usize) {
        self.pairs[bond_index]
    }

    /// Indices of the sites bonded to site `i`, in the order of the bond list.
    pub fn neighbours(&self, i: usize) -> Vec<usize> {
        self.pairs
            .iter()
            .filter_map(|&(a, b)| {
                if a == i {
                    Some(b)
                } else if b == i {
                    Some(a)
                } else {
                    None
                }
            })
            .collect()
    }

    /// Largest order among the π bonds of site `i`, zero if the site has none.
    pub fn max_pi_bond_order(&self, i: usize) -> f64 {
        self.pairs
            .iter()
            .zip(self.bonds.iter())
            .filter(|((a, b), bond)| {
                (*a == i || *b == i) && bond.symmetry() == BondSymmetry::Pi
            })
            .map(|(_, bond)| bond.order.value())
            .fold(0.0, f64::max)
    }
}

impl TryFrom<Vec<Bond>> for Connectivity {
    type Error = HamiltonianError;

    fn try_from(bonds: Vec<Bond>) -> Result<Self, Self::Error> {
        Connectivity::new(bonds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn butadiene() -> Vec<Bond> {
        vec![
            Bond::from(("C1", "C2", 2)),
            Bond::from(("C2", "C3", 1)),
            Bond::from(("C3", "C4", 2)),
        ]
    }

    #[test]
    fn sites_in_order_of_first_appearance() {
        let bonds = vec![
            Bond::from(("C3", "C1", 1.5)),
            Bond::from(("C1", "C2", 1.5)),
            Bond::from(("C2", "C3", 1.5)),
        ];
        let connectivity = Connectivity::new(bonds).unwrap();
        assert_eq!(connectivity.sites(), &["C3", "C1", "C2"]);
        assert_eq!(connectivity.index_of("C2"), Some(2));
        assert_eq!(connectivity.index_of("C9"), None);
        assert_eq!(connectivity.bond_indices(), vec![(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn neighbours_and_bond_orders() {
        let connectivity = Connectivity::new(butadiene()).unwrap();
        assert_eq!(connectivity.n_sites(), 4);
        assert_eq!(connectivity.neighbours(1), vec![0, 2]);
        assert_eq!(connectivity.neighbours(3), vec![2]);
        assert_eq!(connectivity.max_pi_bond_order(1), 2.0);
    }

    #[test]
    fn sigma_bonds_do_not_count_as_pi_bonds() {
        let bonds = vec![
            Bond::from(("C1", "N2", 2, BondSymmetry::Sigma)),
            Bond::from(("N2", "C3", 1)),
        ];
        let connectivity = Connectivity::new(bonds).unwrap();
        assert_eq!(connectivity.max_pi_bond_order(1), 1.0);
        assert_eq!(connectivity.max_pi_bond_order(0), 0.0);
    }

    #[test]
    fn bond_order_parsing() {
        assert_eq!("2".parse::<BondOrder>().unwrap(), BondOrder::Integer(2));
        assert_eq!("1.5".parse::<BondOrder>().unwrap(), BondOrder::Real(1.5));
        assert!("one".parse::<BondOrder>().is_err());
        assert_eq!(BondOrder::Integer(3).as_integer(), Some(&3));
        assert_eq!("Sigma".parse::<BondSymmetry>().unwrap(), BondSymmetry::Sigma);
        assert!("delta".parse::<BondSymmetry>().is_err());
    }

    #[test]
    fn invalid_connectivities() {
        assert_eq!(
            Connectivity::new(vec![]).unwrap_err(),
            HamiltonianError::EmptyConnectivity
        );
        assert_eq!(
            Connectivity::new(vec![Bond::from(("C1", "C1", 1))]).unwrap_err(),
            HamiltonianError::SelfBond("C1".to_string())
        );
        assert!(matches!(
            Connectivity::new(vec![Bond::from(("C1", "C2", 0))]),
            Err(HamiltonianError::InvalidBondOrder { .. })
        ));
        assert!(matches!(
            Connectivity::new(vec![Bond::from(("C1", "C2", f64::NAN))]),
            Err(HamiltonianError::InvalidBondOrder { .. })
        ));
        assert_eq!(
            Connectivity::new(vec![
                Bond::from(("C1", "C2", 1)),
                Bond::from(("C2", "C1", 2)),
            ])
            .unwrap_err(),
            HamiltonianError::DuplicateBond("C2".to_string(), "C1".to_string())
        );
        assert_eq!(
            Connectivity::new(vec![Bond::from(("C-1", "C2", 1))]).unwrap_err(),
            HamiltonianError::InvalidLabel("C-1".to_string())
        );
        assert_eq!(
            Connectivity::new(vec![Bond::from(("", "C2", 1))]).unwrap_err(),
            HamiltonianError::InvalidLabel("".to_string())
        );
        assert_eq!(
            Connectivity::new(vec![Bond::from(("C1", "C 1", 1))]).unwrap_err(),
            HamiltonianError::InvalidLabel("C 1".to_string())
        );
    }
}
