use crate::hamiltonian::SparseMatrix;
use anyhow::{Context, Result};
use log::info;
use ndarray::prelude::*;
use ndarray_npy::write_npy;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Whitespace separated rows, sparse matrices as "i j value" lines
    Text,
    Json,
    Npy,
}

#[derive(Serialize)]
struct DenseOutput<'a> {
    sites: &'a [String],
    matrix: Vec<Vec<f64>>,
}

#[derive(Serialize)]
struct SparseOutput<'a> {
    sites: &'a [String],
    shape: (usize, usize),
    entries: Vec<(usize, usize, f64)>,
}

/// Row/column labels of the matrix. In the spin-orbital basis every site label appears
/// twice, first with spin up and then with spin down.
pub fn basis_labels(sites: &[String], spatial_basis: bool) -> Vec<String> {
    if spatial_basis {
        sites.to_vec()
    } else {
        sites
            .iter()
            .flat_map(|label| [format!("{}_up", label), format!("{}_down", label)])
            .collect()
    }
}

/// Header and one line per row of the logged matrix table.
fn matrix_table(labels: &[String], matrix: ArrayView2<f64>) -> Vec<String> {
    let header: String = labels
        .iter()
        .map(|label| format!(" {: >10}", label))
        .collect();
    let rows = labels.iter().zip(matrix.outer_iter()).map(|(label, row)| {
        let values: String = row.iter().map(|value| format!(" {:>10.5}", value)).collect();
        format!("{: >10}{}", label, values)
    });
    std::iter::once(format!("{: >10}{}", "", header))
        .chain(rows)
        .collect()
}

pub fn print_matrix(labels: &[String], matrix: ArrayView2<f64>) {
    info!("{:^80}", "");
    info!("{: <25} {} x {}", "one-body Hamiltonian:", matrix.nrows(), matrix.ncols());
    info!("{:-^80}", "");
    for line in matrix_table(labels, matrix) {
        info!("{}", line);
    }
    info!("{:-^80}", "");
}

pub fn print_sparse_matrix(labels: &[String], matrix: &SparseMatrix) {
    info!("{:^80}", "");
    info!(
        "{: <25} {} x {}, {} stored elements",
        "one-body Hamiltonian:",
        matrix.shape().0,
        matrix.shape().1,
        matrix.nnz()
    );
    info!("{:-^80}", "");
    for (i, j, value) in matrix.iter() {
        info!("{: >10} {: >10} {:>18.10}", labels[*i], labels[*j], value);
    }
    info!("{:-^80}", "");
}

fn dense_text(matrix: ArrayView2<f64>) -> String {
    matrix
        .outer_iter()
        .map(|row| {
            row.iter()
                .map(|value| format!("{:.16e}", value))
                .collect::<Vec<String>>()
                .join(" ")
        })
        .collect::<Vec<String>>()
        .join("\n")
}

pub fn write_matrix(
    path: &str,
    format: OutputFormat,
    labels: &[String],
    matrix: ArrayView2<f64>,
) -> Result<()> {
    match format {
        OutputFormat::Text => fs::write(path, dense_text(matrix) + "\n")
            .with_context(|| format!("Unable to write the matrix to {}", path))?,
        OutputFormat::Json => {
            let output = DenseOutput {
                sites: labels,
                matrix: matrix.outer_iter().map(|row| row.to_vec()).collect(),
            };
            let json: String =
                serde_json::to_string_pretty(&output).context("Unable to serialize the matrix")?;
            fs::write(path, json).with_context(|| format!("Unable to write {}", path))?
        }
        OutputFormat::Npy => write_npy(path, &matrix)
            .with_context(|| format!("Unable to write the matrix to {}", path))?,
    }
    info!("matrix written to {}", path);
    Ok(())
}

/// Sparse counterpart of [write_matrix]. The npy format has no sparse layout, so the dense
/// matrix is written.
pub fn write_sparse_matrix(
    path: &str,
    format: OutputFormat,
    labels: &[String],
    matrix: &SparseMatrix,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let text: String = matrix
                .iter()
                .map(|(i, j, value)| format!("{} {} {:.16e}\n", i, j, value))
                .collect();
            fs::write(path, text)
                .with_context(|| format!("Unable to write the matrix to {}", path))?
        }
        OutputFormat::Json => {
            let output = SparseOutput {
                sites: labels,
                shape: matrix.shape(),
                entries: matrix.iter().cloned().collect(),
            };
            let json: String =
                serde_json::to_string_pretty(&output).context("Unable to serialize the matrix")?;
            fs::write(path, json).with_context(|| format!("Unable to write {}", path))?
        }
        OutputFormat::Npy => write_npy(path, &matrix.to_dense())
            .with_context(|| format!("Unable to write the matrix to {}", path))?,
    }
    info!("matrix written to {}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray_npy::read_npy;
    use std::env;

    fn labels() -> Vec<String> {
        vec!["C1".to_string(), "O2".to_string()]
    }

    fn tmp_path(name: &str) -> String {
        env::temp_dir()
            .join(format!("huckel_{}_{}", std::process::id(), name))
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn spin_orbital_labels() {
        assert_eq!(
            basis_labels(&labels(), false),
            vec!["C1_up", "C1_down", "O2_up", "O2_down"]
        );
        assert_eq!(basis_labels(&labels(), true), labels());
    }

    #[test]
    fn matrix_table_columns() {
        let h: Array2<f64> = array![[0.0, -0.8], [-0.8, -2.0]];
        let table: Vec<String> = matrix_table(&labels(), h.view());
        assert_eq!(table.len(), 3);
        assert_eq!(table[0], format!("{:>10} {:>10} {:>10}", "", "C1", "O2"));
        assert_eq!(table[1], format!("{:>10} {:>10} {:>10}", "C1", "0.00000", "-0.80000"));
        assert_eq!(table[2].len(), 32);
        assert!(table[2].ends_with("-2.00000"));
    }

    #[test]
    fn json_output() {
        let path: String = tmp_path("matrix.json");
        let h: Array2<f64> = array![[0.0, -0.8], [-0.8, -2.0]];
        write_matrix(&path, OutputFormat::Json, &labels(), h.view()).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["sites"][1], "O2");
        assert_eq!(value["matrix"][0][1], -0.8);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn npy_output() {
        let path: String = tmp_path("matrix.npy");
        let h: Array2<f64> = array![[0.0, -1.0], [-1.0, 0.0]];
        write_matrix(&path, OutputFormat::Npy, &labels(), h.view()).unwrap();
        let read: Array2<f64> = read_npy(&path).unwrap();
        assert_eq!(read, h);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn sparse_text_output() {
        let path: String = tmp_path("sparse.txt");
        let sparse = SparseMatrix::from_triplets((2, 2), vec![(0, 1, -1.0), (1, 0, -1.0)]);
        write_sparse_matrix(&path, OutputFormat::Text, &labels(), &sparse).unwrap();
        let text: String = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0 1 "));
        fs::remove_file(&path).unwrap();
    }
}
