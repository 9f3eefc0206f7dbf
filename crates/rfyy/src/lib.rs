use std::ffi::OsString;
use std::io::Write;

use clap::Parser;
use rfyy_target::Environment;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Print the detected environment as JSON instead of a target triple
    #[clap(long)]
    json: bool,
}

/// Runs the command line with the given arguments, printing to stdout.
pub fn run_with_args<T, I>(args: I) -> Result<(), anyhow::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    run_with_args_and_output(args, &mut std::io::stdout().lock())
}

/// Runs the command line with the given arguments, printing the result to `out`.
pub fn run_with_args_and_output<T, I, W>(args: I, out: &mut W) -> Result<(), anyhow::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let args = Args::parse_from(args);

    log::trace!("detecting host environment");
    let env = rfyy_target::detect()?;

    print_environment(&env, args.json, out)
}

fn print_environment<W: Write>(env: &Environment, json: bool, out: &mut W) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer(&mut *out, env)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{env}")?;
    }
    Ok(())
}
