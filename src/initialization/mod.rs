pub use connectivity::{Bond, BondOrder, BondSymmetry, Connectivity};

pub mod connectivity;
