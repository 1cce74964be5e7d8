use enum_dispatch::enum_dispatch;

use crate::collections::{AHashLinkedHashSet, RangeSet};
use crate::error::{DeadEnd, InvalidPuzzle, SolveError};
use crate::puzzle::{CellId, Value};
use crate::solve::{calculate_distinct_partitions, PartitionCache};

/// A group of cells bound by a shared constraint
#[derive(Clone, Debug)]
pub struct Section {
    cell_ids: Vec<CellId>,
    constraint: SectionKind,
}

impl Section {
    /// Creates a section whose cells must be distinct and sum to `clue`
    pub fn sum(clue: u32, cell_ids: Vec<CellId>) -> Result<Self, InvalidPuzzle> {
        if clue == 0 {
            return Err(InvalidPuzzle::new("sum clue must be greater than 0"));
        }
        Self::with_constraint(cell_ids, SumConstraint { clue }.into())
    }

    /// Creates a section whose cells must be distinct
    pub fn unique(cell_ids: Vec<CellId>) -> Result<Self, InvalidPuzzle> {
        Self::with_constraint(cell_ids, UniqueConstraint.into())
    }

    fn with_constraint(
        cell_ids: Vec<CellId>,
        constraint: SectionKind,
    ) -> Result<Self, InvalidPuzzle> {
        if cell_ids.is_empty() {
            return Err(InvalidPuzzle::new("section cell_ids must not be empty"));
        }
        Ok(Self {
            cell_ids,
            constraint,
        })
    }

    pub fn cell_ids(&self) -> &[CellId] {
        &self.cell_ids
    }

    pub fn clue(&self) -> Option<u32> {
        match &self.constraint {
            SectionKind::Sum(constraint) => Some(constraint.clue),
            SectionKind::Unique(_) => None,
        }
    }

    /// Values the unsolved member cells may take, given the member values in
    /// section order (`0` for unsolved)
    pub(crate) fn possible_values(
        &self,
        values: &[Value],
        cache: &mut PartitionCache,
    ) -> Result<Vec<Value>, SolveError> {
        self.constraint.possible_values(values, cache)
    }

    pub(crate) fn is_solved(&self, values: &[Value]) -> bool {
        self.constraint.is_solved(values)
    }
}

#[enum_dispatch]
trait Constraint {
    fn possible_values(
        &self,
        values: &[Value],
        cache: &mut PartitionCache,
    ) -> Result<Vec<Value>, SolveError>;

    fn is_solved(&self, values: &[Value]) -> bool;
}

#[enum_dispatch(Constraint)]
#[derive(Clone, Debug)]
enum SectionKind {
    Sum(SumConstraint),
    Unique(UniqueConstraint),
}

#[derive(Clone, Copy, Debug)]
struct SumConstraint {
    clue: u32,
}

impl Constraint for SumConstraint {
    fn possible_values(
        &self,
        values: &[Value],
        cache: &mut PartitionCache,
    ) -> Result<Vec<Value>, SolveError> {
        let unsolved = values.iter().filter(|&&v| v == 0).count();
        if unsolved == 0 {
            return Ok(Vec::new());
        }
        let solved_sum: u32 = values.iter().sum();
        let remaining = match self.clue.checked_sub(solved_sum) {
            Some(remaining) if remaining > 0 => remaining,
            _ => return Err(DeadEnd::new(self.clue, unsolved).into()),
        };
        if unsolved == 1 {
            return Ok(vec![remaining]);
        }
        let max = if remaining <= 9 { remaining - 1 } else { 9 };
        let partitions = calculate_distinct_partitions(remaining, unsolved, 1, max, cache)?;
        let mut possible = AHashLinkedHashSet::default();
        for partition in &partitions {
            if partition.iter().any(|v| values.contains(v)) {
                continue;
            }
            possible.extend(partition.iter().copied());
        }
        Ok(possible.into_iter().collect())
    }

    fn is_solved(&self, values: &[Value]) -> bool {
        all_solved_and_distinct(values) && values.iter().sum::<u32>() == self.clue
    }
}

#[derive(Clone, Copy, Debug)]
struct UniqueConstraint;

impl Constraint for UniqueConstraint {
    fn possible_values(
        &self,
        values: &[Value],
        _cache: &mut PartitionCache,
    ) -> Result<Vec<Value>, SolveError> {
        let mut digits = RangeSet::with_all(10);
        digits.remove(0);
        for &value in values {
            if value != 0 {
                digits.remove(value as usize);
            }
        }
        Ok(digits.iter().map(|d| d as Value).collect())
    }

    fn is_solved(&self, values: &[Value]) -> bool {
        all_solved_and_distinct(values)
    }
}

fn all_solved_and_distinct(values: &[Value]) -> bool {
    let mut seen = RangeSet::new(10);
    values.iter().all(|&v| v != 0 && seen.insert(v as usize))
}
