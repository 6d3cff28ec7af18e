use advent_harness::{Answer, ParseError, PartSpec, Puzzle, SolveError};
use advent_harness_macros::AutoRegisterPuzzle;
use anyhow::anyhow;
use std::collections::HashMap;

#[derive(AutoRegisterPuzzle)]
#[puzzle(year = 2024, day = 1, tags = ["2024", "lists"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl Puzzle for Solver {
    type State = SharedData;

    const PARTS: &'static [PartSpec<Self::State>] =
        &[PartSpec::new(1, part_1), PartSpec::new(2, part_2)];

    fn load(input: &str) -> Result<Self::State, ParseError> {
        let mut left = Vec::new();
        let mut right = Vec::new();
        for (line_idx, line) in input.trim().lines().enumerate() {
            let (l, r) = parse_pair(line)
                .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e)))?;
            left.push(l);
            right.push(r);
        }
        if left.is_empty() {
            return Err(ParseError::MissingData(
                "no location pairs in input".to_string(),
            ));
        }
        left.sort_unstable();
        right.sort_unstable();
        Ok(SharedData { left, right })
    }
}

fn parse_pair(line: &str) -> anyhow::Result<(i64, i64)> {
    let mut fields = line.split_whitespace();
    let left = fields.next().ok_or_else(|| anyhow!("expected two values"))?;
    let right = fields.next().ok_or_else(|| anyhow!("expected two values"))?;
    if fields.next().is_some() {
        return Err(anyhow!("expected exactly two values"));
    }
    Ok((left.parse()?, right.parse()?))
}

fn part_1(shared: &mut SharedData) -> Result<Answer, SolveError> {
    let total: i64 = shared
        .left
        .iter()
        .zip(&shared.right)
        .map(|(l, r)| (l - r).abs())
        .sum();
    Ok(Answer::new(total))
}

fn part_2(shared: &mut SharedData) -> Result<Answer, SolveError> {
    let mut counts: HashMap<i64, i64> = HashMap::new();
    for &r in &shared.right {
        *counts.entry(r).or_insert(0) += 1;
    }
    let score: i64 = shared
        .left
        .iter()
        .map(|l| l * counts.get(l).copied().unwrap_or(0))
        .sum();
    Ok(Answer::new(score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_harness::{ExecutionTimer, MemoryStore, PuzzleRunner};

    const SAMPLE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

    #[test]
    fn sample_answers() {
        let store = MemoryStore::new().with_input(0, SAMPLE);
        let mut timer = ExecutionTimer::new();
        let mut runner = PuzzleRunner::<Solver>::new(2024, 1, &store, &mut timer);

        let answers = runner.solve_all_parts(0, false).unwrap();
        let rendered: Vec<String> = answers.iter().map(|a| a.to_string()).collect();
        assert_eq!(rendered, vec!["11", "31"]);
    }

    #[test]
    fn rejects_malformed_lines() {
        let store = MemoryStore::new().with_input(0, "3 4\nnope\n");
        let mut timer = ExecutionTimer::new();
        let mut runner = PuzzleRunner::<Solver>::new(2024, 1, &store, &mut timer);

        let err = runner.solve_part(1, 0, false).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
