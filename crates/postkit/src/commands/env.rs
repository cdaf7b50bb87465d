//! `postkit env`: set a key in the project's `.env`.

use std::path::PathBuf;

use pk_tools::Env;

use crate::CliError;

pub const ENV_USAGE: &str = "Usage: postkit env <KEY> <VALUE> [--dir=<project>]";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvArgs {
    pub dir: PathBuf,
    pub key: String,
    pub value: String,
}

pub fn parse_env_args(args: &[String]) -> Result<EnvArgs, CliError> {
    let mut dir = PathBuf::from(".");
    let mut positional = Vec::new();
    for arg in args {
        match arg.strip_prefix("--dir=") {
            Some(path) => dir = PathBuf::from(path),
            None => positional.push(arg.as_str()),
        }
    }
    let [key, value] = positional.as_slice() else {
        return Err(CliError::Usage(ENV_USAGE.to_owned()));
    };
    Ok(EnvArgs {
        dir,
        key: (*key).to_owned(),
        value: (*value).to_owned(),
    })
}

pub fn run_env(args: &EnvArgs) -> Result<(), CliError> {
    Env::new(&args.dir).set(&args.key, &args.value)?;
    println!("Set {} in {}", args.key, args.dir.join(".env").display());
    Ok(())
}
