use std::cmp::Ordering;
use std::error::Error;

use clap::Args;
use pvr_core::Version;
use pvr_query::compare_version_strings;

#[derive(Args, Debug)]
pub struct CompareArgs {
    pub a: String,
    pub b: String,
    /// Reject anything that is not a full MAJOR.MINOR.PATCH version.
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: &CompareArgs) -> Result<(), Box<dyn Error>> {
    let ordering = if args.strict {
        Version::parse(&args.a)?.cmp(&Version::parse(&args.b)?)
    } else {
        compare_version_strings(&args.a, &args.b)
    };
    let code = match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    };
    println!("{code}");
    Ok(())
}
