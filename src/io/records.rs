// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Plain-text record format.
//!
//! ```text
//! N
//! x1 y1 z1 x2 y2 z2 x3 y3 z3
//! ...            (N records)
//! ```
//!
//! Tokens are whitespace separated, line breaks carry no meaning and `#`
//! starts a comment that runs to the end of the line.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
    str::FromStr,
};

use tracing::debug;

use crate::{
    error::{IntersectError, IntersectResult},
    numeric::scalar::Scalar,
    objects::RawRecord,
};

fn tokenize<R: BufRead>(r: R) -> IntersectResult<Vec<String>> {
    let mut toks = Vec::new();
    for line in r.lines() {
        let l = line?;
        let trimmed = l.split('#').next().unwrap_or("").trim();
        if trimmed.is_empty() {
            continue;
        }
        toks.extend(trimmed.split_whitespace().map(str::to_string));
    }
    Ok(toks)
}

/// Read a record count followed by that many nine-number records.
/// Tokens after the last record are ignored.
pub fn read_records<T, R>(reader: R) -> IntersectResult<Vec<RawRecord<T>>>
where
    T: Scalar + FromStr,
    R: BufRead,
{
    let toks = tokenize(reader)?;
    let mut it = toks.iter();

    let count: usize = it
        .next()
        .ok_or_else(|| IntersectError::parse("missing record count"))?
        .parse()
        .map_err(|_| IntersectError::parse("record count is not a non-negative integer"))?;

    let mut records = Vec::with_capacity(count);
    for index in 0..count {
        let mut c = [T::zero(); 9];
        for (k, slot) in c.iter_mut().enumerate() {
            let tok = it.next().ok_or_else(|| {
                IntersectError::parse(format!(
                    "input ends inside record {index} (expected {count} records)"
                ))
            })?;
            *slot = tok.parse().map_err(|_| {
                IntersectError::parse(format!("record {index}, value {k}: '{tok}' is not a number"))
            })?;
        }
        records.push(RawRecord::from_coords(c));
    }

    let trailing = it.count();
    debug!(records = records.len(), trailing, "Read records");
    Ok(records)
}

pub fn read_records_from_path<T, P>(path: P) -> IntersectResult<Vec<RawRecord<T>>>
where
    T: Scalar + FromStr,
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    read_records(BufReader::new(file))
}

/// Write records in the format [`read_records`] accepts, one per line.
pub fn write_records<T: Scalar, W: Write>(records: &[RawRecord<T>], writer: W) -> IntersectResult<()> {
    let mut out = BufWriter::new(writer);
    writeln!(out, "{}", records.len())?;
    for r in records {
        let line = r.coords().iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ");
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_records_to_path<T: Scalar, P: AsRef<Path>>(records: &[RawRecord<T>], path: P) -> IntersectResult<()> {
    let file = File::create(path)?;
    write_records(records, file)
}
