//! `postkit php`: queue edits against one PHP file.

use std::path::{Path, PathBuf};

use pk_edit::{Edit, PhpFile, Scalar};

use super::read_file;
use crate::CliError;

pub const PHP_USAGE: &str = "Usage: postkit php <file> [edits...] [--dry-run]

Edits, applied in the order given:
  --add-trait=<name>             --remove-trait=<name>
  --add-interface=<name>         --remove-interface=<name>
  --add-import=<name>            --remove-import=<name>
  --add-method=<snippet-file>    --remove-method=<name>
  --add-to-array=<target>,[<key>,]<value>
  --remove-from-array=<target>,<search>

Values are JSON scalars when they parse as JSON, strings otherwise.";

#[derive(Clone, Debug, PartialEq)]
pub struct PhpArgs {
    pub file: PathBuf,
    pub edits: Vec<Edit>,
    pub dry_run: bool,
}

/// Parse the arguments after `php`.
pub fn parse_php_args(args: &[String]) -> Result<PhpArgs, CliError> {
    let mut file = None;
    let mut edits = Vec::new();
    let mut dry_run = false;

    for arg in args {
        if arg == "--dry-run" {
            dry_run = true;
        } else if let Some((flag, value)) = arg.split_once('=').filter(|_| arg.starts_with("--")) {
            edits.push(edit_flag(flag, value)?);
        } else if arg.starts_with('-') {
            return Err(CliError::Usage(format!("unknown option `{arg}`")));
        } else if file.is_none() {
            file = Some(PathBuf::from(arg));
        } else {
            return Err(CliError::Usage(format!("unexpected argument `{arg}`")));
        }
    }

    let file = file.ok_or_else(|| CliError::Usage("missing file path".to_owned()))?;
    if edits.is_empty() {
        return Err(CliError::Usage("no edits given".to_owned()));
    }
    Ok(PhpArgs {
        file,
        edits,
        dry_run,
    })
}

fn edit_flag(flag: &str, value: &str) -> Result<Edit, CliError> {
    let edit = match flag {
        "--add-trait" => Edit::add_trait(value),
        "--remove-trait" => Edit::remove_trait(value),
        "--add-interface" => Edit::add_interface(value),
        "--remove-interface" => Edit::remove_interface(value),
        "--add-import" => Edit::add_import(value),
        "--remove-import" => Edit::remove_import(value),
        "--add-method" => Edit::add_method(read_file(Path::new(value))?),
        "--remove-method" => Edit::remove_method(value),
        "--add-to-array" => {
            let parts: Vec<&str> = value.splitn(3, ',').collect();
            match parts.as_slice() {
                [target, value] => Edit::add_to_array(*target, Scalar::parse_cli(value)?),
                [target, key, value] => {
                    Edit::add_to_array_keyed(*target, *key, Scalar::parse_cli(value)?)
                }
                _ => {
                    return Err(CliError::Usage(
                        "--add-to-array expects <target>,[<key>,]<value>".to_owned(),
                    ))
                }
            }
        }
        "--remove-from-array" => {
            let (target, search) = value.split_once(',').ok_or_else(|| {
                CliError::Usage("--remove-from-array expects <target>,<search>".to_owned())
            })?;
            Edit::remove_from_array(target, search)
        }
        _ => return Err(CliError::Usage(format!("unknown option `{flag}`"))),
    };
    Ok(edit)
}

/// Apply the edits; with `--dry-run`, print the result instead of writing.
pub fn run_php(args: &PhpArgs) -> Result<(), CliError> {
    if args.dry_run {
        let source = read_file(&args.file)?;
        print!("{}", pk_edit::apply(&source, &args.edits)?);
        return Ok(());
    }

    let mut file = PhpFile::new(&args.file);
    for edit in &args.edits {
        file.push(edit.clone());
    }
    file.save()?;
    println!("Updated {}", args.file.display());
    Ok(())
}
