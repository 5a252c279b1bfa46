//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::collections::VecDeque;
use std::io::{self, BufReader, Read};

enum Step {
    Data(Vec<u8>),
    Interrupt,
    Fail,
}

/// A reader that hands out its input one fragment per `read` call.
///
/// Wrapped in a `BufReader`, each fragment becomes exactly one `fill_buf`,
/// which is how a pipe delivering a line in pieces looks to the accumulator.
pub struct Fragmented {
    steps: VecDeque<Step>,
}

impl Fragmented {
    pub fn new(parts: &[&[u8]]) -> Self {
        Self {
            steps: parts.iter().map(|p| Step::Data(p.to_vec())).collect(),
        }
    }

    /// Buffered reader over `parts`, one fragment per fill.
    pub fn reader(parts: &[&[u8]]) -> BufReader<Self> {
        BufReader::new(Self::new(parts))
    }

    /// Like [`Fragmented::reader`] but every fragment is preceded by an
    /// `Interrupted` error.
    pub fn reader_with_interrupts(parts: &[&[u8]]) -> BufReader<Self> {
        let steps = parts
            .iter()
            .flat_map(|p| [Step::Interrupt, Step::Data(p.to_vec())])
            .collect();
        BufReader::new(Self { steps })
    }

    /// Delivers `parts`, then fails with `BrokenPipe`.
    pub fn reader_failing_after(parts: &[&[u8]]) -> BufReader<Self> {
        let mut reader = Self::new(parts);
        reader.steps.push_back(Step::Fail);
        BufReader::new(reader)
    }
}

impl Read for Fragmented {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        match self.steps.pop_front() {
            None => Ok(0),
            Some(Step::Interrupt) => Err(io::Error::from(io::ErrorKind::Interrupted)),
            Some(Step::Fail) => Err(io::Error::from(io::ErrorKind::BrokenPipe)),
            Some(Step::Data(mut data)) => {
                let n = data.len().min(out.len());
                out[..n].copy_from_slice(&data[..n]);
                if n < data.len() {
                    self.steps.push_front(Step::Data(data.split_off(n)));
                }
                Ok(n)
            }
        }
    }
}

/// Split `data` into fragments at the given cut points.
///
/// Cut points are taken modulo `data.len() + 1`, sorted and deduplicated, so
/// any `Vec<usize>` from a property strategy is a valid input.
pub fn split_at_points(data: &[u8], cuts: &[usize]) -> Vec<Vec<u8>> {
    let mut points: Vec<usize> = cuts.iter().map(|c| c % (data.len() + 1)).collect();
    points.sort_unstable();
    points.dedup();

    let mut parts = Vec::with_capacity(points.len() + 1);
    let mut start = 0;
    for point in points {
        if point > start {
            parts.push(data[start..point].to_vec());
            start = point;
        }
    }
    if start < data.len() {
        parts.push(data[start..].to_vec());
    }
    parts
}
