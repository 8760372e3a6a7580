//! Advent of Code 2015
//! https://adventofcode.com/2015/day/1
//! Not Quite Lisp

use advent_runner::{Answer, AutoRegisterSolution, ParseError, Solution, SolveError};

#[derive(AutoRegisterSolution)]
#[solution(year = 2015, day = 1)]
pub struct Day01;

/// Floor change for each instruction, `(` up and `)` down
fn moves(line: &str) -> Result<Vec<i64>, ParseError> {
    line.chars()
        .map(|c| match c {
            '(' => Ok(1),
            ')' => Ok(-1),
            other => Err(ParseError::InvalidFormat(format!(
                "unexpected instruction {other:?}"
            ))),
        })
        .collect()
}

impl Solution for Day01 {
    type Data = Vec<i64>;

    fn parse_input(lines: Vec<String>) -> Result<Self::Data, ParseError> {
        let line = lines
            .first()
            .ok_or_else(|| ParseError::MissingData("empty input".into()))?;
        moves(line.trim())
    }

    fn part1(data: Self::Data) -> Result<Answer, SolveError> {
        Ok(data.iter().sum::<i64>().into())
    }

    fn part2(data: Self::Data) -> Result<Answer, SolveError> {
        data.iter()
            .scan(0, |floor, step| {
                *floor += step;
                Some(*floor)
            })
            .position(|floor| floor < 0)
            .map(|index| Answer::from(index + 1))
            .ok_or_else(|| SolveError::failed("Santa never enters the basement"))
    }
}
