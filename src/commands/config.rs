//! Implementation of the `ciftify-env check-config` command.

use crate::cli::CheckConfigArgs;
use crate::config::Config;
use crate::error::Result;

/// Load and validate a config, then print it back as normalized YAML.
///
/// Without a path the bundled config is checked.
pub fn cmd_check_config(args: CheckConfigArgs) -> Result<()> {
    print!("{}", normalized(&args)?);
    Ok(())
}

fn normalized(args: &CheckConfigArgs) -> Result<String> {
    let config = match &args.path {
        Some(path) => Config::load(path)?,
        None => Config::bundled()?,
    };
    config.to_yaml()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn bundled_config_is_printed_in_normalized_form() {
        let yaml = normalized(&CheckConfigArgs { path: None }).unwrap();

        assert_eq!(
            Config::from_yaml(&yaml).unwrap(),
            Config::bundled().unwrap()
        );
    }

    #[test]
    fn unknown_keys_survive_normalization() {
        let file = config_file(
            r#"
high_res: 164
low_res: [32]
grayord_res: [2]
notes: keep me
"#,
        );
        let args = CheckConfigArgs {
            path: Some(file.path().to_path_buf()),
        };

        let yaml = normalized(&args).unwrap();
        let config = Config::from_yaml(&yaml).unwrap();
        assert_eq!(config.high_res.as_str(), "164");
        assert!(yaml.contains("notes: keep me"));
    }

    #[test]
    fn invalid_config_is_a_config_failure() {
        let file = config_file("high_res: 164\nlow_res: []\ngrayord_res: [2]\n");
        let args = CheckConfigArgs {
            path: Some(file.path().to_path_buf()),
        };

        let err = cmd_check_config(args).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::CONFIG_FAILURE);
    }
}
