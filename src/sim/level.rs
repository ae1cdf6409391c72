//! Platforms and the level that holds them
//!
//! A level file is a stream of whitespace-separated numbers read four at a
//! time as `x y w h`. Line breaks carry no meaning beyond error reporting.

use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Height of generated platforms (world units)
pub const PLATFORM_HEIGHT: f64 = 1.0;

/// An axis-aligned platform in world units.
///
/// `(x, y)` is the top-left corner; the body spans `x..x + w` horizontally
/// and `y - h..y` vertically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Platform {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y - self.h
    }
}

/// Errors produced while reading level data
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level file: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: `{token}` is not a number")]
    InvalidNumber { line: usize, token: String },
    #[error("line {line}: platform record has {found} of 4 fields")]
    Truncated { line: usize, found: usize },
    #[error("line {line}: platform values must be finite")]
    NonFinite { line: usize },
    #[error("line {line}: platform width and height must not be negative")]
    NegativeSize { line: usize },
}

/// An ordered, immutable set of platforms
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Level {
    platforms: Vec<Platform>,
    platform_count: usize,
}

impl Level {
    pub fn new(platforms: Vec<Platform>) -> Self {
        let platform_count = platforms.len();
        Self {
            platforms,
            platform_count,
        }
    }

    /// Platforms in collision-evaluation order
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn platform_count(&self) -> usize {
        self.platform_count
    }

    pub fn is_empty(&self) -> bool {
        self.platform_count == 0
    }

    /// Parse level text (`x y w h` per platform)
    pub fn parse(text: &str) -> Result<Self, LevelError> {
        let mut platforms = Vec::new();
        let mut fields = [0.0f64; 4];
        let mut filled = 0;
        let mut record_line = 0;

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            for token in line.split_whitespace() {
                let value: f64 = token.parse().map_err(|_| LevelError::InvalidNumber {
                    line: line_no,
                    token: token.to_string(),
                })?;
                if !value.is_finite() {
                    return Err(LevelError::NonFinite { line: line_no });
                }
                if filled == 0 {
                    record_line = line_no;
                }
                fields[filled] = value;
                filled += 1;

                if filled == 4 {
                    let [x, y, w, h] = fields;
                    if w < 0.0 || h < 0.0 {
                        return Err(LevelError::NegativeSize { line: record_line });
                    }
                    platforms.push(Platform::new(x, y, w, h));
                    filled = 0;
                }
            }
        }

        if filled != 0 {
            return Err(LevelError::Truncated {
                line: record_line,
                found: filled,
            });
        }

        Ok(Self::new(platforms))
    }

    /// Read and parse a level file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let level = Self::parse(&text)?;
        log::info!(
            "Loaded level {} ({} platforms)",
            path.display(),
            level.platform_count()
        );
        Ok(level)
    }
}

/// Snap to half-unit steps so generated levels read cleanly
fn half_step(v: f64) -> f64 {
    (v * 2.0).round() / 2.0
}

/// Generate a run of `count` platforms from a seed.
///
/// The first platform sits under the spawn point. Every later platform is
/// placed after a gap the auto-runner can clear, at most two units above or
/// below its predecessor.
pub fn generate_level(seed: u64, count: usize) -> Level {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut platforms = Vec::with_capacity(count);

    let mut x = -2.0;
    let mut y = 1.0;
    for i in 0..count {
        let w = if i == 0 {
            12.0
        } else {
            half_step(rng.random_range(4.0..12.0))
        };
        platforms.push(Platform::new(x, y, w, PLATFORM_HEIGHT));

        x += w + half_step(rng.random_range(1.0..4.0));
        y = half_step((y + rng.random_range(-2.0..=2.0)).clamp(-4.0, 6.0));
    }

    log::info!("Generated level from seed {} ({} platforms)", seed, count);
    Level::new(platforms)
}
