use crate::hamiltonian::Method;
use crate::io::OutputFormat;

// MODEL
// source of the alpha and beta values
pub const METHOD: Method = Method::Rauk;
// reference Coulomb integral of a carbon 2p orbital
pub const ALPHA: f64 = 0.0;
// reference resonance integral of an aromatic C-C bond
pub const BETA: f64 = -1.0;
// proportionality constant K of the Wolfsberg-Helmholz formula
pub const WOLFSBERG_HELMHOLZ_CONSTANT: f64 = 1.75;
// return the matrix in the spatial (true) or spin-orbital basis (false)
pub const SPATIAL_BASIS: bool = true;
pub const SPARSE: bool = false;

// ELECTRONS
pub const SOLVE: bool = true;
// net charge of the π system in units of e
pub const CHARGE: i32 = 0;

// OUTPUT
pub const OUTPUT_FORMAT: OutputFormat = OutputFormat::Text;

// config file
pub const CONFIG_FILE_NAME: &str = "huckel.toml";

pub const NUMBER_OF_CORES: usize = 1;
