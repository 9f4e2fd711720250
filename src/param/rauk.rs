use crate::hamiltonian::HamiltonianError;
use crate::param::Element;
use phf::phf_map;

/// Scale factors of a heteroatom X relative to the carbon reference:
/// alpha_X = alpha + h * beta and beta_CX = k * beta.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RaukParameters {
    pub h: f64,
    pub k: f64,
}

/// Heteroatoms contribute either one electron to the π system (pyridine N, carbonyl O)
/// or a lone pair (pyrrole N, furan O, halogens).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PiFlavour {
    OneElectron,
    Donor,
}

#[derive(Copy, Clone, Debug)]
struct RaukEntry {
    one_electron: RaukParameters,
    donor: RaukParameters,
    electrons: (u8, u8),
}

static RAUK_TABLE: phf::Map<&'static str, RaukEntry> = phf_map! {
    "C" => RaukEntry {
        one_electron: RaukParameters { h: 0.0, k: 1.0 },
        donor: RaukParameters { h: 0.0, k: 1.0 },
        electrons: (1, 1),
    },
    "B" => RaukEntry {
        one_electron: RaukParameters { h: -1.0, k: 0.7 },
        donor: RaukParameters { h: -1.0, k: 0.7 },
        electrons: (0, 0),
    },
    "N" => RaukEntry {
        one_electron: RaukParameters { h: 0.5, k: 1.0 },
        donor: RaukParameters { h: 1.5, k: 0.8 },
        electrons: (1, 2),
    },
    "O" => RaukEntry {
        one_electron: RaukParameters { h: 1.0, k: 1.0 },
        donor: RaukParameters { h: 2.0, k: 0.8 },
        electrons: (1, 2),
    },
    "F" => RaukEntry {
        one_electron: RaukParameters { h: 3.0, k: 0.7 },
        donor: RaukParameters { h: 3.0, k: 0.7 },
        electrons: (2, 2),
    },
    "Cl" => RaukEntry {
        one_electron: RaukParameters { h: 2.0, k: 0.4 },
        donor: RaukParameters { h: 2.0, k: 0.4 },
        electrons: (2, 2),
    },
    "Si" => RaukEntry {
        one_electron: RaukParameters { h: -0.5, k: 0.75 },
        donor: RaukParameters { h: -0.5, k: 0.75 },
        electrons: (1, 0),
    },
    "P" => RaukEntry {
        one_electron: RaukParameters { h: 0.19, k: 0.76 },
        donor: RaukParameters { h: 0.75, k: 0.76 },
        electrons: (1, 2),
    },
    "S" => RaukEntry {
        one_electron: RaukParameters { h: 0.46, k: 0.81 },
        donor: RaukParameters { h: 1.11, k: 0.69 },
        electrons: (1, 2),
    },
    "Br" => RaukEntry {
        one_electron: RaukParameters { h: 1.5, k: 0.3 },
        donor: RaukParameters { h: 1.5, k: 0.3 },
        electrons: (2, 2),
    },
};

/// A heteroatom whose π bonds are all single bonds donates its lone pair.
pub fn pi_flavour(max_pi_bond_order: f64) -> PiFlavour {
    if max_pi_bond_order > 1.0 {
        PiFlavour::OneElectron
    } else {
        PiFlavour::Donor
    }
}

fn entry(element: Element) -> Result<&'static RaukEntry, HamiltonianError> {
    RAUK_TABLE.get(element.symbol()).ok_or_else(|| {
        HamiltonianError::MissingParameter(format!("{} in Rauk's table", element))
    })
}

pub fn rauk_parameters(
    element: Element,
    flavour: PiFlavour,
) -> Result<RaukParameters, HamiltonianError> {
    let entry: &RaukEntry = entry(element)?;
    Ok(match flavour {
        PiFlavour::OneElectron => entry.one_electron,
        PiFlavour::Donor => entry.donor,
    })
}

/// Number of electrons the site contributes to the π system.
pub fn pi_electrons(element: Element, flavour: PiFlavour) -> Result<u8, HamiltonianError> {
    let entry: &RaukEntry = entry(element)?;
    Ok(match flavour {
        PiFlavour::OneElectron => entry.electrons.0,
        PiFlavour::Donor => entry.electrons.1,
    })
}

/// Resonance scale k_XY of a bond. Bonds to carbon use the tabulated k_CX and bonds between
/// two heteroatoms are approximated by k_CX * k_CY.
pub fn rauk_k(
    a: (Element, PiFlavour),
    b: (Element, PiFlavour),
) -> Result<f64, HamiltonianError> {
    let k_a: f64 = rauk_parameters(a.0, a.1)?.k;
    let k_b: f64 = rauk_parameters(b.0, b.1)?.k;
    Ok(k_a * k_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn flavour_from_bond_order() {
        assert_eq!(pi_flavour(2.0), PiFlavour::OneElectron);
        assert_eq!(pi_flavour(1.5), PiFlavour::OneElectron);
        assert_eq!(pi_flavour(1.0), PiFlavour::Donor);
        assert_eq!(pi_flavour(0.0), PiFlavour::Donor);
    }

    #[test]
    fn nitrogen_parameters() {
        let pyridine = rauk_parameters(Element::N, PiFlavour::OneElectron).unwrap();
        let pyrrole = rauk_parameters(Element::N, PiFlavour::Donor).unwrap();
        assert_abs_diff_eq!(pyridine.h, 0.5);
        assert_abs_diff_eq!(pyrrole.h, 1.5);
        assert_abs_diff_eq!(pyrrole.k, 0.8);
        assert_eq!(pi_electrons(Element::N, PiFlavour::Donor).unwrap(), 2);
    }

    #[test]
    fn third_row_parameters() {
        let thiophene = rauk_parameters(Element::S, PiFlavour::Donor).unwrap();
        assert_abs_diff_eq!(thiophene.h, 1.11);
        assert_abs_diff_eq!(thiophene.k, 0.69);
        let thione = rauk_parameters(Element::S, PiFlavour::OneElectron).unwrap();
        assert_abs_diff_eq!(thione.h, 0.46);
        assert_eq!(pi_electrons(Element::S, PiFlavour::Donor).unwrap(), 2);
        assert_eq!(pi_electrons(Element::P, PiFlavour::OneElectron).unwrap(), 1);
        assert_eq!(pi_electrons(Element::Si, PiFlavour::Donor).unwrap(), 0);
    }

    #[test]
    fn k_of_bonds() {
        let c = (Element::C, PiFlavour::OneElectron);
        let o = (Element::O, PiFlavour::Donor);
        let cl = (Element::Cl, PiFlavour::Donor);
        assert_abs_diff_eq!(rauk_k(c, c).unwrap(), 1.0);
        assert_abs_diff_eq!(rauk_k(c, o).unwrap(), 0.8);
        assert_abs_diff_eq!(rauk_k(o, cl).unwrap(), 0.32, epsilon = 1e-12);
    }

    #[test]
    fn missing_entry() {
        let result = rauk_parameters(Element::H, PiFlavour::OneElectron);
        assert!(matches!(result, Err(HamiltonianError::MissingParameter(_))));
    }
}
