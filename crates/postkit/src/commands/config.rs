//! `postkit config`: set a value in a configuration array.

use std::path::PathBuf;

use pk_edit::{Edit, PhpFile, Scalar};

use super::read_file;
use crate::CliError;

pub const CONFIG_USAGE: &str = "Usage: postkit config <file> <key.path> <value> [--dry-run]";

#[derive(Clone, Debug, PartialEq)]
pub struct ConfigArgs {
    pub file: PathBuf,
    pub key: String,
    pub value: Scalar,
    pub dry_run: bool,
}

pub fn parse_config_args(args: &[String]) -> Result<ConfigArgs, CliError> {
    let dry_run = args.iter().any(|arg| arg == "--dry-run");
    let positional: Vec<&String> = args.iter().filter(|arg| *arg != "--dry-run").collect();
    let [file, key, value] = positional.as_slice() else {
        return Err(CliError::Usage(CONFIG_USAGE.to_owned()));
    };
    Ok(ConfigArgs {
        file: PathBuf::from(file),
        key: (*key).clone(),
        value: Scalar::parse_cli(value)?,
        dry_run,
    })
}

pub fn run_config(args: &ConfigArgs) -> Result<(), CliError> {
    let edit = Edit::set_config(args.key.as_str(), args.value.clone());
    if args.dry_run {
        let source = read_file(&args.file)?;
        print!("{}", pk_edit::apply(&source, &[edit])?);
        return Ok(());
    }

    let mut file = PhpFile::new(&args.file);
    file.push(edit);
    file.save()?;
    println!("Set {} in {}", args.key, args.file.display());
    Ok(())
}
