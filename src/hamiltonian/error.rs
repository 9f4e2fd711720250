use derive_builder::UninitializedFieldError;
use std::fmt;

/// Errors raised while the connectivity is read or while the matrices are assembled.
#[derive(Debug, Clone, PartialEq)]
pub enum HamiltonianError {
    /// The connectivity list contains no bonds.
    EmptyConnectivity,
    /// A bond connects a site with itself.
    SelfBond(String),
    /// The same pair of sites appears more than once.
    DuplicateBond(String, String),
    /// Bond orders have to be finite and positive.
    InvalidBondOrder { a: String, b: String, order: f64 },
    /// Labels may not be empty or contain whitespace or '-'.
    InvalidLabel(String),
    /// A bond key could not be parsed from its string form.
    InvalidBondKey(String),
    /// The explicit onsite energies do not match the number of sites.
    OnsiteLengthMismatch { expected: usize, found: usize },
    /// A tabulated value was requested for a label that names no element.
    UnknownElement(String),
    /// The parameter table has no entry for the requested quantity.
    MissingParameter(String),
    /// No overlap formula exists for this pair of valence shells.
    UnsupportedOverlap { a: String, b: String },
    /// The number of electrons is negative or does not fit into the orbitals.
    InvalidElectronCount { n_electrons: i64, n_orbitals: usize },
    /// A mandatory field of the model builder was not set.
    UninitializedField(&'static str),
}

impl fmt::Display for HamiltonianError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            HamiltonianError::EmptyConnectivity => {
                write!(f, "The connectivity list does not contain any bond")
            }
            HamiltonianError::SelfBond(label) => {
                write!(f, "The site {} is bonded to itself", label)
            }
            HamiltonianError::DuplicateBond(a, b) => {
                write!(f, "The bond {}-{} is listed more than once", a, b)
            }
            HamiltonianError::InvalidBondOrder { a, b, order } => write!(
                f,
                "The bond {}-{} has the order {}, but bond orders have to be positive",
                a, b, order
            ),
            HamiltonianError::InvalidLabel(label) => write!(
                f,
                "The site label '{}' is empty or contains whitespace or '-'",
                label
            ),
            HamiltonianError::InvalidBondKey(key) => write!(
                f,
                "The bond key '{}' is not of the form 'A-B'",
                key
            ),
            HamiltonianError::OnsiteLengthMismatch { expected, found } => write!(
                f,
                "{} onsite energies were given, but the connectivity contains {} sites",
                found, expected
            ),
            HamiltonianError::UnknownElement(label) => write!(
                f,
                "The label {} does not name an element, its value has to be given explicitly",
                label
            ),
            HamiltonianError::MissingParameter(what) => {
                write!(f, "No tabulated parameter for {}", what)
            }
            HamiltonianError::UnsupportedOverlap { a, b } => write!(
                f,
                "The overlap between {} and {} cannot be approximated, please provide it",
                a, b
            ),
            HamiltonianError::InvalidElectronCount {
                n_electrons,
                n_orbitals,
            } => write!(
                f,
                "{} electrons cannot be placed in {} spatial orbitals",
                n_electrons, n_orbitals
            ),
            HamiltonianError::UninitializedField(field) => {
                write!(f, "The field '{}' of the model has to be set", field)
            }
        }
    }
}

impl std::error::Error for HamiltonianError {}

impl From<UninitializedFieldError> for HamiltonianError {
    fn from(error: UninitializedFieldError) -> Self {
        HamiltonianError::UninitializedField(error.field_name())
    }
}
