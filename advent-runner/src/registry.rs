//! Solution registry for resolving solutions by coordinate and name

use crate::coordinate::PuzzleCoordinate;
use crate::error::{LoadError, RegistrationError};
use crate::solution::DynSolution;
use std::collections::{BTreeMap, HashMap};

type SolutionsByName = BTreeMap<&'static str, &'static dyn DynSolution>;

/// Name of the solution used when no alternate is requested
pub const DEFAULT_SOLUTION: &str = "solution";

/// Builder for constructing a [`SolutionRegistry`]
///
/// Detects duplicate registrations; the built registry is immutable.
///
/// # Example
///
/// ```
/// use advent_runner::{ParseError, PuzzleCoordinate, RegistryBuilder, Solution};
///
/// struct Day1;
///
/// impl Solution for Day1 {
///     type Data = Vec<String>;
///
///     fn parse_input(lines: Vec<String>) -> Result<Self::Data, ParseError> {
///         Ok(lines)
///     }
/// }
///
/// let coordinate = PuzzleCoordinate::new(2023, 1).unwrap();
/// let registry = RegistryBuilder::new()
///     .register(coordinate, "solution", &Day1)
///     .unwrap()
///     .build();
/// assert!(registry.contains(coordinate, "solution"));
/// ```
pub struct RegistryBuilder {
    solutions: HashMap<PuzzleCoordinate, SolutionsByName>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            solutions: HashMap::new(),
        }
    }

    /// Register a solution under a coordinate and name
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solution registered, ready for chaining
    /// * `Err(RegistrationError)` - A solution with this coordinate and name already exists
    pub fn register(
        mut self,
        coordinate: PuzzleCoordinate,
        name: &'static str,
        solution: &'static dyn DynSolution,
    ) -> Result<Self, RegistrationError> {
        let by_name = self.solutions.entry(coordinate).or_default();
        if by_name.contains_key(name) {
            return Err(RegistrationError::DuplicateSolution { coordinate, name });
        }
        by_name.insert(name, solution);
        Ok(self)
    }

    /// Register every solution submitted via `inventory::submit!`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solution_plugins(|_| true)
    }

    /// Register the submitted solutions that match `filter`
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use advent_runner::RegistryBuilder;
    /// // Only 2023 solutions
    /// let registry = RegistryBuilder::new()
    ///     .register_solution_plugins(|plugin| plugin.year == 2023)
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solution_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolutionPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolutionPlugin>() {
            if filter(plugin) {
                let coordinate = PuzzleCoordinate::new(plugin.year, plugin.day).map_err(
                    |source| RegistrationError::InvalidCoordinate {
                        name: plugin.name,
                        source,
                    },
                )?;
                self = self.register(coordinate, plugin.name, plugin.solution)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolutionRegistry {
        tracing::debug!(puzzles = self.solutions.len(), "solution registry built");
        SolutionRegistry {
            solutions: self.solutions,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup from `(coordinate, name)` to a solution
pub struct SolutionRegistry {
    solutions: HashMap<PuzzleCoordinate, SolutionsByName>,
}

impl SolutionRegistry {
    /// Resolve a solution, failing cleanly when it was never registered
    pub fn load(
        &self,
        coordinate: PuzzleCoordinate,
        name: &str,
    ) -> Result<&'static dyn DynSolution, LoadError> {
        self.solutions
            .get(&coordinate)
            .and_then(|by_name| by_name.get(name))
            .copied()
            .ok_or_else(|| LoadError::NotFound {
                coordinate,
                name: name.to_string(),
            })
    }

    /// Check whether a solution is registered
    pub fn contains(&self, coordinate: PuzzleCoordinate, name: &str) -> bool {
        self.solutions
            .get(&coordinate)
            .is_some_and(|by_name| by_name.contains_key(name))
    }

    /// Names of all solutions registered for a coordinate, sorted
    pub fn names(&self, coordinate: PuzzleCoordinate) -> Vec<&'static str> {
        self.solutions
            .get(&coordinate)
            .map(|by_name| by_name.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Total number of registered solutions across all puzzles
    pub fn len(&self) -> usize {
        self.solutions.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}

/// Plugin information for automatic solution registration
///
/// Normally produced by `#[derive(AutoRegisterSolution)]`.
///
/// # Example
///
/// ```no_run
/// use advent_runner::{ParseError, Solution, SolutionPlugin};
///
/// struct Day1;
///
/// impl Solution for Day1 {
///     type Data = ();
///
///     fn parse_input(_: Vec<String>) -> Result<(), ParseError> {
///         Ok(())
///     }
/// }
///
/// advent_runner::inventory::submit! {
///     SolutionPlugin {
///         year: 2023,
///         day: 1,
///         name: "solution",
///         solution: &Day1,
///     }
/// }
/// ```
pub struct SolutionPlugin {
    /// The event year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Solution file name without extension (`solution`, `solution2`, ...)
    pub name: &'static str,
    /// The solution (type-erased)
    pub solution: &'static dyn DynSolution,
}

inventory::collect!(SolutionPlugin);
