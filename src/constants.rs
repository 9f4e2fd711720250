// conversion factor between bohr and angstrom (CODATA 2018)
pub const BOHR_TO_ANGS: f64 = 0.529177210903;

// Pauling's bond length/bond order relation D(n) = D(1) - c * log10(n), c in angstrom
pub const PAULING_BOND_ORDER_CONSTANT: f64 = 0.71;

// two eigenvalues closer than this are treated as one degenerate level
pub const DEGENERACY_THRESHOLD: f64 = 1.0e-8;
