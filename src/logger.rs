use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;

pub fn init(level: LevelFilter) -> Result<()> {
    SimpleLogger::new().with_level(level).init()?;

    Ok(())
}
