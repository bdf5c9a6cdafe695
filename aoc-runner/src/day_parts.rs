// Code generated by `aoc gen`. DO NOT EDIT.

use aoc_solver::{DayPart, DaySpec};

pub static DAY_PARTS: &[DayPart] = &[
];

pub const CURRENT_DAY: Option<DaySpec> = None;
