use anyhow::Result;

use svr_cli::pipeline::{self, ConvertOutcome, OutputConfig};

use crate::cli::{CheckArgs, ConvertArgs};

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertOutcome> {
    let validator = pipeline::load_validator(args.rules.as_deref())?;
    let output = (!args.dry_run).then(|| {
        let format = args.format.into();
        OutputConfig {
            path: args
                .output
                .clone()
                .unwrap_or_else(|| pipeline::default_output_path(&args.document, format)),
            format,
        }
    });
    pipeline::convert(&args.document, &validator, output.as_ref())
}

pub fn run_check(args: &CheckArgs) -> Result<ConvertOutcome> {
    let validator = pipeline::load_validator(args.rules.as_deref())?;
    pipeline::convert(&args.document, &validator, None)
}
