use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context};

use crate::AppResult;

/// Decode a program written as hexadecimal text. Bytes may be separated by
/// whitespace, `#` starts a comment running to the end of the line.
pub fn parse_program(text: &str) -> AppResult<Vec<u8>> {
    let digits: String = text
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .flat_map(|line| line.split_whitespace())
        .collect();

    if digits.is_empty() {
        return Err(anyhow!("the program is empty"));
    }

    hex::decode(&digits).with_context(|| format!("invalid program text '{}'", text.trim()))
}

pub fn read_program_file(path: &Path) -> AppResult<Vec<u8>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read program file {}", path.display()))?;

    parse_program(&text)
}

/// Parse a `START:END` hexadecimal address range, both ends included.
pub fn parse_address_range(text: &str) -> AppResult<(u16, u16)> {
    let (start, end) = text
        .split_once(':')
        .ok_or_else(|| anyhow!("address range '{}' must look like START:END", text))?;
    let start = parse_address(start)?;
    let end = parse_address(end)?;

    if start > end {
        return Err(anyhow!(
            "address range start 0x{:04X} is after its end 0x{:04X}",
            start,
            end
        ));
    }

    Ok((start, end))
}

fn parse_address(text: &str) -> AppResult<u16> {
    let digits = text.trim().trim_start_matches("0x").trim_start_matches('$');
    u16::from_str_radix(digits, 16).with_context(|| format!("invalid address '{}'", text))
}
