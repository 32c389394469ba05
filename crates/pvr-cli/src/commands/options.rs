use std::error::Error;

use crate::config::PvrConfig;
use crate::output::print_json;

pub fn run(config: &PvrConfig) -> Result<(), Box<dyn Error>> {
    let catalog = config.open_catalog()?;
    print_json(&catalog.filter_options())
}
