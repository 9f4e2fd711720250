pub mod elements;
pub mod rauk;
pub mod wolfsberg_helmholz;

pub use elements::{Element, ElementData, Shell};
pub use rauk::{pi_flavour, PiFlavour, RaukParameters};
