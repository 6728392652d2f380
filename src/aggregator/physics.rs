//! Composite physics/worker time.
//!
//! Physics runs on worker threads whose stat names depend on the engine
//! configuration, so the contributing columns are discovered from the
//! table's schema instead of being declared up front.

use super::config::PhysicsPatterns;
use crate::parser::Table;
use crate::utils::error::ConfigError;
use log::debug;
use regex::Regex;

/// Compiled column-name predicates for physics stats
#[derive(Debug, Clone)]
pub struct PhysicsMatcher {
    worker: Regex,
    exclusive: Regex,
}

impl PhysicsMatcher {
    /// # Errors
    /// * `ConfigError::InvalidPattern` - naming whichever pattern failed to compile
    pub fn new(patterns: &PhysicsPatterns) -> Result<Self, ConfigError> {
        Ok(Self {
            worker: compile(&patterns.worker_pattern)?,
            exclusive: compile(&patterns.exclusive_pattern)?,
        })
    }

    /// True if either predicate matches anywhere in the column name
    pub fn matches(&self, column: &str) -> bool {
        self.worker.is_match(column) || self.exclusive.is_match(column)
    }

    /// Positions of every matching column in the table's schema
    pub fn discover(&self, table: &Table) -> PhysicsColumns {
        let positions: Vec<usize> = table
            .columns()
            .iter()
            .enumerate()
            .filter(|(_, name)| self.matches(name))
            .map(|(position, _)| position)
            .collect();

        debug!("Discovered {} physics columns", positions.len());

        PhysicsColumns { positions }
    }
}

fn compile(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Physics columns resolved against one table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhysicsColumns {
    positions: Vec<usize>,
}

impl PhysicsColumns {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Sum of the frame's physics cells
    ///
    /// A blank or non-numeric cell in any matched column makes the frame's
    /// total NaN. With no matched columns the total is 0.
    pub fn frame_total(&self, table: &Table, frame: usize) -> f64 {
        self.positions
            .iter()
            .map(|&position| table.value_at(frame, position))
            .fold(0.0, |total, value| total + value)
    }
}
