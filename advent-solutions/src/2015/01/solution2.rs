//! Advent of Code 2015
//! https://adventofcode.com/2015/day/1
//! Not Quite Lisp, traced floor by floor

use advent_runner::{Answer, AutoRegisterSolution, ParseError, Solution, SolveError};

#[derive(AutoRegisterSolution)]
#[solution(year = 2015, day = 1, name = "solution2")]
pub struct Day01Trace;

impl Solution for Day01Trace {
    type Data = String;

    fn parse_input(lines: Vec<String>) -> Result<Self::Data, ParseError> {
        lines
            .into_iter()
            .next()
            .ok_or_else(|| ParseError::MissingData("empty input".into()))
    }

    // Every visited floor; the runner keeps the last one
    fn part1(data: Self::Data) -> Result<Answer, SolveError> {
        let floors = data
            .into_bytes()
            .into_iter()
            .filter(|b| matches!(b, b'(' | b')'))
            .scan(0i64, |floor, b| {
                *floor += if b == b'(' { 1 } else { -1 };
                Some(*floor)
            });
        Ok(Answer::trace(floors))
    }
}
