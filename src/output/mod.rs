//! Output rendering
//!
//! Two policies, selected by command: id lists are natural-sorted and
//! printed one per line; relationship lists arrive from the server in
//! reverse-chronological page order and get a single full reversal so they
//! print oldest-first as `id,username` lines.

use crate::api::Follow;
use std::cmp::Ordering;
use std::io::Write;

/// Write the bare account id, no trailing newline.
pub fn write_id<W: Write>(out: &mut W, id: &str) -> std::io::Result<()> {
    write!(out, "{id}")
}

/// Sort ids in natural order and write one per line.
pub fn write_ids<W: Write>(out: &mut W, mut ids: Vec<String>) -> std::io::Result<()> {
    ids.sort_by(|a, b| natural_cmp(a, b));
    for id in &ids {
        writeln!(out, "{id}")?;
    }
    Ok(())
}

/// Write `id,username` lines in chronological order.
///
/// One reversal of the aggregate, nothing more; intra-page order was already
/// preserved during aggregation.
pub fn write_follows<W: Write>(out: &mut W, follows: &[Follow]) -> std::io::Result<()> {
    for follow in follows.iter().rev() {
        writeln!(out, "{},{}", follow.id, follow.username)?;
    }
    Ok(())
}

/// Natural-order comparison: digit runs compare by value, everything else
/// byte-wise.
///
/// "9" sorts before "10"; leading zeros do not change a run's value.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let run_a = digit_run(a, &mut i);
            let run_b = digit_run(b, &mut j);
            let ordering = run_a
                .len()
                .cmp(&run_b.len())
                .then_with(|| run_a.cmp(run_b));
            if ordering != Ordering::Equal {
                return ordering;
            }
        } else {
            let ordering = a[i].cmp(&b[j]);
            if ordering != Ordering::Equal {
                return ordering;
            }
            i += 1;
            j += 1;
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

/// Advance past the digit run starting at `*pos` and return it with leading
/// zeros stripped.
fn digit_run<'a>(s: &'a [u8], pos: &mut usize) -> &'a [u8] {
    let start = *pos;
    while *pos < s.len() && s[*pos].is_ascii_digit() {
        *pos += 1;
    }
    let run = &s[start..*pos];
    let significant = run.iter().position(|&c| c != b'0').unwrap_or(run.len());
    &run[significant..]
}

#[cfg(test)]
mod tests;
