
use regex::Regex;

use arcade_records::batch::Batch;

mod common;

#[test]
fn test_batch_fixture() -> Result<(), anyhow::Error> {
    let dir = common::setup()?;
    let database = common::copy_fixture("games.dat", dir.path())?;
    let commands = common::copy_fixture("commands.txt", dir.path())?;
    let output = dir.path().join("freeplay.dat");

    let mut batch = Batch::new(database.clone(), commands);
    batch.with_output(output.clone());
    let mut reports = Vec::new();
    batch.run_with_writer(&mut reports)?;

    let expected_reports = [
        "RECORD ADDED\nName: Asteroids\nHigh Score: 99000\nInitials: JD\nPlays: 20\nRevenue: $5.00\n\n",
        "Pac-Man FOUND\nHigh Score: 100000\nInitials: ABC\nPlays: 50\nRevenue: $12.50\n\n",
        "Ms. Pac-Man FOUND\nHigh Score: 90000\nInitials: XYZ\nPlays: 40\nRevenue: $10.00\n\n",
        "Galaga UPDATED\nUPDATE TO plays - VALUE 40\nName: Galaga\nHigh Score: 31500\nInitials: JMK\nPlays: 40\nRevenue: $10.00\n\n",
        "RECORD DELETED\nName: Donkey Kong\nHigh Score: 1247700\nInitials: SW\nPlays: 300\nRevenue: $75.00\n\n",
        "RECORDS SORTED BY plays\n",
        "Asteroids, 99000, JD, 20, $5.00\n",
        "Galaga, 31500, JMK, 0040, $10.00\n",
        "Ms. Pac-Man, 90000, XYZ, 40, $10.00\n",
        "Pac-Man, 100000, ABC, 50, $12.50\n\n",
        "zaxxon NOT FOUND\n",
        "Record to edit was not found.\n",
    ].concat();
    assert_eq!(String::from_utf8(reports)?, expected_reports);

    let lines = common::read_lines(&output)?;
    assert_eq!(
        lines,
        vec![
            "Asteroids, 99000, JD, 20, $5.00",
            "Galaga, 31500, JMK, 0040, $10.00",
            "Ms. Pac-Man, 90000, XYZ, 40, $10.00",
            "Pac-Man, 100000, ABC, 50, $12.50",
        ]
    );

    // the database file itself is left untouched
    assert_eq!(common::read_lines(&database)?.len(), 4);
    Ok(())
}

#[test]
fn test_missing_database_starts_empty() -> Result<(), anyhow::Error> {
    let dir = common::setup()?;
    let database = dir.path().join("missing.dat");
    let commands = dir.path().join("commands.txt");
    let output = dir.path().join("out.dat");
    common::write_lines(&commands, &[r#"1 "Qix" 5000 TT 8 $2.00"#, "5 name"])?;

    let mut batch = Batch::new(database, commands);
    batch.with_output(output.clone());
    let mut reports = Vec::new();
    batch.run_with_writer(&mut reports)?;

    // sorting a single record reports nothing
    assert_eq!(
        String::from_utf8(reports)?,
        "RECORD ADDED\nName: Qix\nHigh Score: 5000\nInitials: TT\nPlays: 8\nRevenue: $2.00\n\n"
    );
    assert_eq!(common::read_lines(&output)?, vec!["Qix, 5000, TT, 8, $2.00"]);
    Ok(())
}

#[test]
fn test_missing_batch_file() -> Result<(), anyhow::Error> {
    let dir = common::setup()?;
    let output = dir.path().join("out.dat");
    let mut batch = Batch::new(dir.path().join("games.dat"), dir.path().join("missing.txt"));
    batch.with_output(output.clone());
    let mut reports = Vec::new();
    assert!(batch.run_with_writer(&mut reports).is_err());
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_malformed_database_aborts() -> Result<(), anyhow::Error> {
    let dir = common::setup()?;
    let database = dir.path().join("games.dat");
    let commands = dir.path().join("commands.txt");
    let output = dir.path().join("out.dat");
    common::write_lines(&database, &["Tron, 10, FL, 5, $1.25", "Robotron, 20, EJ"])?;
    common::write_lines(&commands, &["2 tron"])?;

    let mut batch = Batch::new(database, commands);
    batch.with_output(output.clone());
    let mut reports = Vec::new();
    let result = batch.run_with_writer(&mut reports);
    assert!(result.is_err());
    assert!(reports.is_empty());
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_non_numeric_plays_sort_aborts() -> Result<(), anyhow::Error> {
    let dir = common::setup()?;
    let database = dir.path().join("games.dat");
    let commands = dir.path().join("commands.txt");
    let output = dir.path().join("out.dat");
    common::write_lines(&database, &["Tron, 10, FL, 5, $1.25", "Robotron, 20, EJ, 8, $2.00"])?;
    common::write_lines(&commands, &[r#"1 "Defender" 100 DF lots $3.00"#, "5 plays"])?;

    let mut batch = Batch::new(database, commands);
    batch.with_output(output.clone());
    let mut reports = Vec::new();
    assert!(batch.run_with_writer(&mut reports).is_err());
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_empty_and_ignored_lines() -> Result<(), anyhow::Error> {
    let dir = common::setup()?;
    let database = dir.path().join("games.dat");
    let commands = dir.path().join("commands.txt");
    let output = dir.path().join("out.dat");
    common::write_lines(&database, &["Tron, 10, FL, 5, $1.25", "", "Robotron, 20, EJ, 8, $2.00\r"])?;
    common::write_lines(&commands, &["# delete tron", "4 tron", "", "9 unknown directive"])?;

    let mut batch = Batch::new(database, commands);
    batch.with_output(output.clone());
    batch.with_ignore_lines(Regex::new("^#")?);
    let mut reports = Vec::new();
    batch.run_with_writer(&mut reports)?;

    assert_eq!(
        String::from_utf8(reports)?,
        "RECORD DELETED\nName: Tron\nHigh Score: 10\nInitials: FL\nPlays: 5\nRevenue: $1.25\n\n"
    );
    assert_eq!(common::read_lines(&output)?, vec!["Robotron, 20, EJ, 8, $2.00"]);
    Ok(())
}

#[test]
fn test_keep_empty_database_line_is_an_error() -> Result<(), anyhow::Error> {
    let dir = common::setup()?;
    let database = dir.path().join("games.dat");
    let commands = dir.path().join("commands.txt");
    common::write_lines(&database, &["Tron, 10, FL, 5, $1.25", ""])?;
    common::write_lines(&commands, &["2 tron"])?;

    let mut batch = Batch::new(database, commands);
    batch.with_output(dir.path().join("out.dat"));
    batch.with_ignore_empty(false);
    let mut reports = Vec::new();
    assert!(batch.run_with_writer(&mut reports).is_err());
    Ok(())
}
