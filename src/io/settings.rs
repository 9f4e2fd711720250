use crate::defaults::*;
use crate::hamiltonian::{BondKey, HuckelModel, HuckelModelBuilder, Method};
use crate::initialization::Connectivity;
use crate::io::OutputFormat;
use anyhow::{bail, Context, Result};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_verbose() -> i8 {
    0
}
fn default_method() -> Method {
    METHOD
}
fn default_alpha() -> f64 {
    ALPHA
}
fn default_beta() -> f64 {
    BETA
}
fn default_wolfsberg_helmholz_constant() -> f64 {
    WOLFSBERG_HELMHOLZ_CONSTANT
}
fn default_spatial_basis() -> bool {
    SPATIAL_BASIS
}
fn default_sparse() -> bool {
    SPARSE
}
fn default_solve() -> bool {
    SOLVE
}
fn default_charge() -> i32 {
    CHARGE
}
fn default_output_format() -> OutputFormat {
    OUTPUT_FORMAT
}
fn default_number_of_cores() -> usize {
    NUMBER_OF_CORES
}
fn default_model_config() -> ModelConfig {
    let model_config: ModelConfig = toml::from_str("").unwrap();
    model_config
}
fn default_parameter_config() -> ParameterConfig {
    let parameter_config: ParameterConfig = toml::from_str("").unwrap();
    parameter_config
}
fn default_electrons_config() -> ElectronsConfig {
    let electrons_config: ElectronsConfig = toml::from_str("").unwrap();
    electrons_config
}
fn default_output_config() -> OutputConfig {
    let output_config: OutputConfig = toml::from_str("").unwrap();
    output_config
}
fn default_parallelization_config() -> ParallelizationConfig {
    let parallelization_config: ParallelizationConfig = toml::from_str("").unwrap();
    parallelization_config
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Configuration {
    #[serde(default = "default_verbose")]
    pub verbose: i8,
    #[serde(default = "default_model_config")]
    pub model: ModelConfig,
    #[serde(default = "default_parameter_config")]
    pub parameters: ParameterConfig,
    #[serde(default = "default_electrons_config")]
    pub electrons: ElectronsConfig,
    #[serde(default = "default_output_config")]
    pub output: OutputConfig,
    #[serde(default = "default_parallelization_config")]
    pub parallelization: ParallelizationConfig,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ModelConfig {
    #[serde(default = "default_method")]
    pub method: Method,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default = "default_beta")]
    pub beta: f64,
    #[serde(default = "default_wolfsberg_helmholz_constant")]
    pub wolfsberg_helmholz_constant: f64,
    #[serde(default = "default_spatial_basis")]
    pub spatial_basis: bool,
    #[serde(default = "default_sparse")]
    pub sparse: bool,
}

/// User supplied values. Site keys are labels or element symbols, bond keys are written as
/// "A-B" with two labels or two element symbols.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ParameterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onsite_energies: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uniform_u: Option<f64>,
    #[serde(default)]
    pub alpha_values: BTreeMap<String, f64>,
    #[serde(default)]
    pub beta_values: BTreeMap<String, f64>,
    #[serde(default)]
    pub overlaps: BTreeMap<String, f64>,
    #[serde(default)]
    pub distances: BTreeMap<String, f64>,
    #[serde(default)]
    pub hubbard_u: BTreeMap<String, f64>,
    /// sites (labels or element symbols) that donate a lone pair whatever their bond orders
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub donors: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ElectronsConfig {
    #[serde(default = "default_solve")]
    pub solve: bool,
    #[serde(default = "default_charge")]
    pub charge: i32,
    /// overrides the electron count derived from the connectivity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_electrons: Option<usize>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OutputConfig {
    #[serde(default = "default_output_format")]
    pub format: OutputFormat,
    /// the matrix is only written to disk if a path is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ParallelizationConfig {
    #[serde(default = "default_number_of_cores")]
    pub number_of_cores: usize,
}

/// Two keys naming the same unordered pair, e.g. "C1-C2" and "C2-C1", are rejected.
fn bond_map(map: &BTreeMap<String, f64>) -> Result<HashMap<BondKey, f64>> {
    let mut bonds: HashMap<BondKey, f64> = HashMap::with_capacity(map.len());
    let mut keys: HashMap<BondKey, &str> = HashMap::with_capacity(map.len());
    for (key, value) in map.iter() {
        let bond_key: BondKey = key
            .parse()
            .with_context(|| format!("Invalid bond key '{}' in the parameters", key))?;
        if let Some(previous) = keys.insert(bond_key.clone(), key.as_str()) {
            bail!(
                "The bond keys '{}' and '{}' in the parameters name the same pair",
                previous,
                key
            );
        }
        bonds.insert(bond_key, *value);
    }
    Ok(bonds)
}

fn site_map(map: &BTreeMap<String, f64>) -> HashMap<String, f64> {
    map.iter().map(|(key, value)| (key.clone(), *value)).collect()
}

impl Configuration {
    /// Builds the Hückel model of `connectivity` from the `[model]` and `[parameters]`
    /// sections.
    pub fn build_model(&self, connectivity: Connectivity) -> Result<HuckelModel> {
        let mut builder = HuckelModelBuilder::default();
        builder
            .connectivity(connectivity)
            .method(self.model.method)
            .alpha(self.model.alpha)
            .beta(self.model.beta)
            .wolfsberg_helmholz_constant(self.model.wolfsberg_helmholz_constant)
            .alpha_values(site_map(&self.parameters.alpha_values))
            .beta_values(bond_map(&self.parameters.beta_values)?)
            .overlaps(bond_map(&self.parameters.overlaps)?)
            .distances(bond_map(&self.parameters.distances)?)
            .hubbard_u(site_map(&self.parameters.hubbard_u))
            .donors(self.parameters.donors.iter().cloned().collect());
        if let Some(onsite) = &self.parameters.onsite_energies {
            builder.onsite_energies(onsite.clone());
        }
        if let Some(u) = self.parameters.uniform_u {
            builder.uniform_u(u);
        }
        builder
            .build()
            .context("Could not initialize the Hückel model")
    }
}

impl Default for Configuration {
    fn default() -> Self {
        toml::from_str("").unwrap()
    }
}
