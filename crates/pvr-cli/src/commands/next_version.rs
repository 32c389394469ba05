use std::error::Error;

use clap::Args;
use pvr_query::next_patch_version;

#[derive(Args, Debug)]
pub struct NextVersionArgs {
    pub version: String,
}

pub fn run(args: &NextVersionArgs) -> Result<(), Box<dyn Error>> {
    println!("{}", next_patch_version(&args.version));
    Ok(())
}
