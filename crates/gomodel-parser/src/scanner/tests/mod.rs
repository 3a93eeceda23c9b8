use gomodel_config::{ScanOption, ScanOptions};
use gomodel_core::{ArrayLength, ChanDirection, File, Type, TypeKind};

use super::*;
use crate::error::{ParserError, ResolutionError};
use crate::lower::lower;
use crate::parser::parse_go;

mod imports;
mod interfaces;
mod round_trip;
mod suppression;

const FULL: &str = include_str!("../../../tests/fixtures/full.go");
const INTERFACES: &str = include_str!("../../../tests/fixtures/interfaces.go");

fn try_scan(source: &str, options: &ScanOptions) -> Result<File, ParserError> {
    let syntax = lower(&parse_go(source))?;
    Ok(scan_file(&syntax, options)?)
}

fn scan_with(source: &str, options: &ScanOptions) -> File {
    try_scan(source, options).expect("scan should succeed")
}

fn parse_and_scan(source: &str) -> File {
    scan_with(source, &ScanOptions::default())
}

fn scan_err(source: &str) -> ScanError {
    match try_scan(source, &ScanOptions::default()) {
        Err(ParserError::Scan(err)) => err,
        other => panic!("expected scan error, got {other:?}"),
    }
}

fn docs(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| (*l).to_string()).collect()
}
