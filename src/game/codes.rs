use rand::seq::SliceRandom;
use rand::thread_rng;
use std::collections::HashSet;
use tracing::{debug, info};

use crate::shared::AppError;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of letters in a session code
pub const CODE_LEN: usize = 4;

/// Pre-generated, exhaustive sequence of 4-letter session codes,
/// consumed front-to-back.
///
/// The alphabet is shuffled independently per letter position rather
/// than shuffling the full code list, so people cannot predict which
/// code the next game will get. A code is never handed out twice: the
/// cursor only advances.
pub struct CodeAllocator {
    codes: Vec<String>,
    cursor: usize,
}

impl CodeAllocator {
    /// Generates all 26^4 codes once, skipping any code already taken
    /// by a game restored from disk.
    pub fn new(taken: &HashSet<String>) -> Self {
        let mut rng = thread_rng();

        let mut positions: [[u8; 26]; CODE_LEN] = [*ALPHABET; CODE_LEN];
        for letters in positions.iter_mut() {
            letters.shuffle(&mut rng);
        }

        let code_space = 26usize.pow(CODE_LEN as u32);
        let mut codes = Vec::with_capacity(code_space.saturating_sub(taken.len()));
        for &ch1 in &positions[0] {
            for &ch2 in &positions[1] {
                for &ch3 in &positions[2] {
                    for &ch4 in &positions[3] {
                        let code: String =
                            [ch1, ch2, ch3, ch4].iter().map(|&b| b as char).collect();
                        if !taken.contains(&code) {
                            codes.push(code);
                        }
                    }
                }
            }
        }

        info!(
            code_count = codes.len(),
            skipped = taken.len(),
            "Generated session code sequence"
        );

        Self { codes, cursor: 0 }
    }

    /// Hands out the next unused code
    pub fn next_code(&mut self) -> Result<String, AppError> {
        let code = self.codes.get(self.cursor).ok_or(AppError::CodesExhausted)?;
        self.cursor += 1;
        debug!(code = %code, cursor = self.cursor, "Allocated session code");
        Ok(code.clone())
    }

    /// Number of codes not yet handed out
    pub fn remaining(&self) -> usize {
        self.codes.len() - self.cursor
    }
}
