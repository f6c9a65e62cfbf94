use serde_json::Value;
use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;

pub fn write_event_log(path: &Path, events: &[Value]) -> Result<(), Error> {
    let mut file = File::create(path)?;
    for event in events {
        writeln!(file, "{event}")?;
    }
    Ok(())
}
