use crate::defaults::CONFIG_FILE_NAME;
use crate::initialization::{Bond, BondOrder, BondSymmetry, Connectivity};
use crate::io::Configuration;
use anyhow::{anyhow, bail, Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Reads a connectivity list. Every line holds one bond `A B order [pi|sigma]`, everything
/// after `#` is a comment and blank lines are skipped.
pub fn parse_connectivity(input: &str) -> Result<Connectivity> {
    let mut bonds: Vec<Bond> = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let content: &str = line.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }
        let line_nr: usize = idx + 1;
        let fields: Vec<&str> = content.split_whitespace().collect();
        if fields.len() < 3 || fields.len() > 4 {
            bail!(
                "line {}: expected 'A B order [pi|sigma]', found '{}'",
                line_nr,
                content
            );
        }
        let order: BondOrder = fields[2]
            .parse()
            .with_context(|| format!("line {}: invalid bond order '{}'", line_nr, fields[2]))?;
        let bond: Bond = match fields.get(3) {
            Some(symmetry) => {
                let symmetry: BondSymmetry = symmetry
                    .parse()
                    .map_err(|err: String| anyhow!("line {}: {}", line_nr, err))?;
                Bond::with_symmetry(fields[0], fields[1], order, symmetry)
            }
            None => Bond::new(fields[0], fields[1], order),
        };
        bonds.push(bond);
    }
    debug!("{} bonds read from the connectivity list", bonds.len());
    Connectivity::new(bonds).context("Invalid connectivity list")
}

pub fn read_connectivity(connectivity_file: &str) -> Result<Connectivity> {
    let content: String = fs::read_to_string(connectivity_file)
        .with_context(|| format!("Unable to read the connectivity file {}", connectivity_file))?;
    parse_connectivity(&content)
        .with_context(|| format!("Unable to parse the connectivity file {}", connectivity_file))
}

pub fn read_input(connectivity_file: &str) -> Result<(Connectivity, Configuration)> {
    // The connectivity list is the only mandatory file to start a calculation.
    let connectivity: Connectivity = read_connectivity(connectivity_file)?;
    let config: Configuration = read_configuration(Path::new(CONFIG_FILE_NAME))?;
    Ok((connectivity, config))
}

/// Reads the configuration file. If it does not exist the default settings are used and
/// written to `config_file_path`.
pub fn read_configuration(config_file_path: &Path) -> Result<Configuration> {
    let config_string: String = if config_file_path.exists() {
        fs::read_to_string(config_file_path).context("Unable to read config file")?
    } else {
        String::from("")
    };
    let config: Configuration =
        toml::from_str(&config_string).context("Unable to parse config file")?;
    // The configuration file is saved if it does not exist already so that the user can see
    // all the used options.
    if !config_file_path.exists() {
        let config_string: String =
            toml::to_string(&config).context("Unable to serialize the configuration")?;
        fs::write(config_file_path, config_string).context("Unable to write config file")?;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hamiltonian::Method;
    use std::env;
    use std::path::PathBuf;

    fn tmp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("huckel_{}_{}", std::process::id(), name))
    }

    #[test]
    fn connectivity_with_comments() {
        let input: &str = "# acrolein\n\
                           C1 C2 2\n\
                           \n\
                           C2 C3 1   # single bond\n\
                           C3 O4 2 pi\n\
                           C1 H5 1 sigma\n";
        let connectivity: Connectivity = parse_connectivity(input).unwrap();
        assert_eq!(connectivity.sites(), &["C1", "C2", "C3", "O4", "H5"]);
        assert_eq!(connectivity.bonds()[3].symmetry, Some(BondSymmetry::Sigma));
        assert_eq!(connectivity.bonds()[0].order, BondOrder::Integer(2));
        assert_eq!(connectivity.bonds()[1].symmetry, None);
    }

    #[test]
    fn real_bond_orders() {
        let connectivity: Connectivity = parse_connectivity("C1 C2 1.5\nC2 C3 1.5").unwrap();
        assert_eq!(connectivity.bonds()[1].order, BondOrder::Real(1.5));
    }

    #[test]
    fn errors_name_the_line() {
        let err = parse_connectivity("C1 C2 2\nC2 C3").unwrap_err();
        assert!(err.to_string().contains("line 2"));
        let err = parse_connectivity("C1 C2 double").unwrap_err();
        assert!(err.to_string().contains("line 1"));
        let err = parse_connectivity("C1 C2 2\n\nC2 C3 1 delta").unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn connectivity_is_validated() {
        assert!(parse_connectivity("# nothing\n").is_err());
        assert!(parse_connectivity("C1 C1 1").is_err());
    }

    #[test]
    fn connectivity_from_file() {
        let path: PathBuf = tmp_path("butadiene.txt");
        fs::write(&path, "C1 C2 2\nC2 C3 1\nC3 C4 2\n").unwrap();
        let connectivity: Connectivity = read_connectivity(path.to_str().unwrap()).unwrap();
        assert_eq!(connectivity.n_sites(), 4);
        fs::remove_file(&path).unwrap();

        let err = read_connectivity(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Unable to read"));
    }

    #[test]
    fn missing_configuration_is_written() {
        let path: PathBuf = tmp_path("written.toml");
        let _ = fs::remove_file(&path);
        let config: Configuration = read_configuration(&path).unwrap();
        assert_eq!(config.model.method, Method::Rauk);
        assert!(path.exists());
        let written: Configuration = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.model.method, config.model.method);
        assert_eq!(written.electrons.charge, config.electrons.charge);
        assert_eq!(written.output.format, config.output.format);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn existing_configuration_is_read() {
        let path: PathBuf = tmp_path("existing.toml");
        let content: &str = "[model]\nmethod = \"wolfsberg_helmholz\"\n[electrons]\ncharge = 1\n";
        fs::write(&path, content).unwrap();
        let config: Configuration = read_configuration(&path).unwrap();
        assert_eq!(config.model.method, Method::WolfsbergHelmholz);
        assert_eq!(config.electrons.charge, 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn broken_configuration_is_an_error() {
        let path: PathBuf = tmp_path("broken.toml");
        fs::write(&path, "[model]\nmethod = 3\n").unwrap();
        assert!(read_configuration(&path).is_err());
        fs::remove_file(&path).unwrap();
    }
}
