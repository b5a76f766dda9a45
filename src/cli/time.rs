use repostore::error::Result;
use repostore::timefmt::{format_timestamp, parse_timestamp};

/// Print epoch seconds as a local date string
pub fn format(timestamp: f64) -> Result<()> {
    println!("{}", format_timestamp(timestamp)?);
    Ok(())
}

/// Print a local date string as epoch seconds
pub fn parse(date: &str) -> Result<()> {
    println!("{}", parse_timestamp(date)?);
    Ok(())
}
