mod huckel_solution;
pub mod logging;
mod occupation;

pub use huckel_solution::{diagonalize, HuckelSolution};
pub use occupation::{aufbau_occupation, pi_electrons};
