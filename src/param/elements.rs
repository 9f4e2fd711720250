use phf::phf_map;
use std::fmt;

/// Valence shell that carries the orbital of a site. Only the principal quantum number and
/// the angular momentum matter for the overlap formulas.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shell {
    S1,
    P2,
    P3,
    P4,
}

/// Atomic data used to derive the Wolfsberg-Helmholz couplings.
#[derive(Copy, Clone, Debug)]
pub struct ElementData {
    /// Valence state ionization energy H_ii in eV
    pub ionization_energy: f64,
    /// Slater exponent of the valence orbital
    pub slater_exponent: f64,
    /// Single bond covalent radius in angstrom
    pub covalent_radius: f64,
    pub shell: Shell,
}

// extended Hückel Coulomb integrals and Slater exponents, covalent radii after Pauling
static ELEMENT_DATA: phf::Map<&'static str, ElementData> = phf_map! {
    "H" => ElementData { ionization_energy: -13.6, slater_exponent: 1.3, covalent_radius: 0.37, shell: Shell::S1 },
    "B" => ElementData { ionization_energy: -8.5, slater_exponent: 1.3, covalent_radius: 0.88, shell: Shell::P2 },
    "C" => ElementData { ionization_energy: -11.4, slater_exponent: 1.625, covalent_radius: 0.77, shell: Shell::P2 },
    "N" => ElementData { ionization_energy: -13.4, slater_exponent: 1.95, covalent_radius: 0.70, shell: Shell::P2 },
    "O" => ElementData { ionization_energy: -14.8, slater_exponent: 2.275, covalent_radius: 0.66, shell: Shell::P2 },
    "F" => ElementData { ionization_energy: -18.1, slater_exponent: 2.425, covalent_radius: 0.64, shell: Shell::P2 },
    "Si" => ElementData { ionization_energy: -9.2, slater_exponent: 1.383, covalent_radius: 1.17, shell: Shell::P3 },
    "P" => ElementData { ionization_energy: -14.0, slater_exponent: 1.6, covalent_radius: 1.10, shell: Shell::P3 },
    "S" => ElementData { ionization_energy: -11.0, slater_exponent: 1.817, covalent_radius: 1.04, shell: Shell::P3 },
    "Cl" => ElementData { ionization_energy: -15.0, slater_exponent: 2.033, covalent_radius: 0.99, shell: Shell::P3 },
    "Br" => ElementData { ionization_energy: -12.4, slater_exponent: 2.588, covalent_radius: 1.14, shell: Shell::P4 },
};

/// Chemical elements for which tabulated parameters exist.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    H,
    B,
    C,
    N,
    O,
    F,
    Si,
    P,
    S,
    Cl,
    Br,
}

impl Element {
    pub fn symbol(&self) -> &'static str {
        match self {
            Element::H => "H",
            Element::B => "B",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::F => "F",
            Element::Si => "Si",
            Element::P => "P",
            Element::S => "S",
            Element::Cl => "Cl",
            Element::Br => "Br",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "H" => Some(Element::H),
            "B" => Some(Element::B),
            "C" => Some(Element::C),
            "N" => Some(Element::N),
            "O" => Some(Element::O),
            "F" => Some(Element::F),
            "Si" => Some(Element::Si),
            "P" => Some(Element::P),
            "S" => Some(Element::S),
            "Cl" => Some(Element::Cl),
            "Br" => Some(Element::Br),
            _ => None,
        }
    }

    /// Reads the element from the leading symbol of a site label, e.g. "C1" -> C and
    /// "Cl2" -> Cl. An upper case letter followed by a lower case one is read as a two
    /// letter symbol, labels like "Ca3" therefore name no tabulated element.
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        let first: char = chars.next()?;
        if !first.is_ascii_uppercase() {
            return None;
        }
        if let Some(second) = chars.next() {
            if second.is_ascii_lowercase() {
                return Element::from_symbol(&label[0..2]);
            }
        }
        Element::from_symbol(&label[0..1])
    }

    pub fn data(&self) -> &'static ElementData {
        // every variant has an entry in the table
        &ELEMENT_DATA[self.symbol()]
    }

    pub fn is_halogen(&self) -> bool {
        matches!(self, Element::F | Element::Cl | Element::Br)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
