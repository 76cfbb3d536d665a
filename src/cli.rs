use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use clap::Parser;
use substvar::key_value::Pair;
use substvar::Config;

#[derive(Parser, Debug)]
#[command(
    name = "substvar",
    version,
    about = "Replaces variables of the form `${KEY}` in the input text with their values."
)]
pub struct Cli {
    /// The input text file to use; '-' for stdin.
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub input: String,

    /// The output text file to use; '-' for stdout.
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub output: String,

    /// A variable KEY=VALUE pair; takes precedence over the environment.
    #[arg(short = 'D', long = "variable", value_name = "KEY=VALUE", value_parser = Pair::parse)]
    pub variables: Vec<Pair>,

    /// Do not use environment variables for substitution.
    #[arg(long)]
    pub no_env: bool,

    /// Leave placeholders without a value in place instead of failing.
    #[arg(short, long)]
    pub keep_missing: bool,

    /// Treat `$${` as two ordinary dollars instead of an escaped `${`.
    #[arg(long)]
    pub no_escapes: bool,

    /// Only list the keys found in the input, one per line, in order
    /// and with duplicates, then exit.
    #[arg(short, long)]
    pub list: bool,

    /// More verbose logging, down to every resolved key (useful for debugging).
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            fail_on_missing: !self.keep_missing,
            escapes: !self.no_escapes,
        }
    }

    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "trace"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

/// Creates a reader from a path; `-` means stdin.
pub fn create_input_reader(ident: &str) -> io::Result<Box<dyn BufRead>> {
    match ident {
        "-" => Ok(Box::new(BufReader::new(io::stdin()))),
        path => Ok(Box::new(BufReader::new(File::open(path)?))),
    }
}

/// Creates a writer from a path; `-` means stdout.
pub fn create_output_writer(ident: &str) -> io::Result<Box<dyn Write>> {
    match ident {
        "-" => Ok(Box::new(BufWriter::new(io::stdout()))),
        path => Ok(Box::new(BufWriter::new(File::create(path)?))),
    }
}
