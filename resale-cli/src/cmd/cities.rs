use anyhow::Result;

use crate::cmd::{Cli, load_policies};
use crate::report;

pub fn run(cli: &Cli) -> Result<()> {
    let policies = load_policies(cli.cities_file.as_deref())?;

    for policy in &policies {
        print!("{}", report::render_city(policy));
    }

    Ok(())
}
