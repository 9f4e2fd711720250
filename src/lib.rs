//! One-electron tight-binding Hamiltonians of bonded chains.
//!
//! A [Connectivity](initialization::Connectivity) lists the bonded sites, the
//! [HuckelModel](hamiltonian::HuckelModel) assigns site energies and couplings from Rauk's
//! table or the Wolfsberg-Helmholz approximation and assembles the one-body matrix in the
//! spatial or spin-orbital basis.

pub mod constants;
pub mod defaults;
pub mod hamiltonian;
pub mod initialization;
pub mod io;
pub mod param;
pub mod solver;
pub mod utils;

pub use hamiltonian::{
    BondKey, HamiltonianError, HuckelModel, HuckelModelBuilder, Method, SparseMatrix,
};
pub use initialization::{Bond, BondOrder, BondSymmetry, Connectivity};
pub use solver::HuckelSolution;
