use std::fs;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub fn setup() -> Result<TempDir, anyhow::Error> {
    let dir = tempfile::Builder::new()
        .prefix("arcade-records-test-")
        .tempdir()?;
    Ok(dir)
}

#[allow(dead_code)]
pub fn copy_fixture(name: &str, dir: &Path) -> Result<PathBuf, anyhow::Error> {
    let source = PathBuf::from("./tests/fixtures/").join(name);
    let target = dir.join(name);
    fs::copy(source, &target)?;
    Ok(target)
}

#[allow(dead_code)]
pub fn write_lines(path: &Path, lines: &[&str]) -> Result<(), anyhow::Error> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

#[allow(dead_code)]
pub fn read_lines(path: &Path) -> Result<Vec<String>, anyhow::Error> {
    let reader = BufReader::new(File::open(path)?);
    let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;
    Ok(lines)
}
