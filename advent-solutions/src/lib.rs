//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions live in `{year}/{day}/{name}.rs` next to their prompt and input
//! files. Each one derives `AutoRegisterSolution`, so linking this crate is
//! enough for the runner to find them. `advent get puzzle` prints the module
//! line to add here for every new skeleton.

#[path = "2015/01/solution.rs"]
mod y2015_d01_solution;
#[path = "2015/01/solution2.rs"]
mod y2015_d01_solution2;
