//! Command-line arguments for the `blastzone` binary.
//!
//! Usage:
//!   blastzone levels/arena.txt --script BRD --max-ticks 1000
//!   blastzone levels/arena.txt --rules rules.json --seed 7 --realtime

use std::path::PathBuf;

use thiserror::Error;

use blastzone_core::commands::PlayerCommand;
use blastzone_core::config::ConfigError;
use blastzone_core::constants::TICK_RATE;
use blastzone_core::enums::Direction;
use blastzone_sim::level::LevelError;

use crate::game_loop::LoopOptions;

/// One minute of simulated play.
pub const DEFAULT_MAX_TICKS: u64 = 60 * TICK_RATE as u64;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("{0}")]
    Usage(String),
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub level: PathBuf,
    pub rules: Option<PathBuf>,
    pub seed: u64,
    /// One entry per tick; `None` is an idle tick.
    pub script: Vec<Option<PlayerCommand>>,
    pub max_ticks: u64,
    pub realtime: bool,
    /// Print the final snapshot as JSON on stdout.
    pub json: bool,
}

impl Args {
    /// Parse arguments, excluding the program name.
    pub fn parse(args: &[String]) -> Result<Self, AppError> {
        let mut level = None;
        let mut rules = None;
        let mut seed = 42;
        let mut script = Vec::new();
        let mut max_ticks = DEFAULT_MAX_TICKS;
        let mut realtime = false;
        let mut json = false;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--rules" => rules = Some(PathBuf::from(value(&mut iter, arg)?)),
                "--seed" => seed = parse_number(value(&mut iter, arg)?, arg)?,
                "--script" => script = parse_script(value(&mut iter, arg)?)?,
                "--max-ticks" => max_ticks = parse_number(value(&mut iter, arg)?, arg)?,
                "--realtime" => realtime = true,
                "--json" => json = true,
                other if other.starts_with("--") => {
                    return Err(AppError::Usage(format!("unknown option: {other}")));
                }
                path => {
                    if level.is_some() {
                        return Err(AppError::Usage(format!("unexpected argument: {path}")));
                    }
                    level = Some(PathBuf::from(path));
                }
            }
        }

        let level = level.ok_or_else(|| AppError::Usage("missing level path".into()))?;
        if max_ticks == 0 {
            return Err(AppError::Usage("--max-ticks must be at least 1".into()));
        }

        Ok(Self {
            level,
            rules,
            seed,
            script,
            max_ticks,
            realtime,
            json,
        })
    }

    pub fn loop_options(&self) -> LoopOptions {
        LoopOptions {
            max_ticks: self.max_ticks,
            realtime: self.realtime,
        }
    }
}

/// Translate an input script into per-tick commands.
/// `U D L R` move, `B` places a bomb, `.` idles. Whitespace is ignored.
pub fn parse_script(script: &str) -> Result<Vec<Option<PlayerCommand>>, AppError> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_ascii_uppercase() {
            'U' => Ok(Some(PlayerCommand::Move {
                direction: Direction::Up,
            })),
            'D' => Ok(Some(PlayerCommand::Move {
                direction: Direction::Down,
            })),
            'L' => Ok(Some(PlayerCommand::Move {
                direction: Direction::Left,
            })),
            'R' => Ok(Some(PlayerCommand::Move {
                direction: Direction::Right,
            })),
            'B' => Ok(Some(PlayerCommand::PlaceBomb)),
            '.' => Ok(None),
            other => Err(AppError::Usage(format!("invalid script symbol: {other:?}"))),
        })
        .collect()
}

pub fn print_usage() {
    eprintln!(
        "blastzone: grid arena simulation\n\
         \n\
         Usage: blastzone <level> [options]\n\
         \n\
           --rules <path>     JSON rules file (defaults for omitted fields)\n\
           --seed <n>         RNG seed for enemy wandering (default: 42)\n\
           --script <moves>   One input per tick: U D L R move, B bomb, . idle\n\
           --max-ticks <n>    Stop after n ticks (default: {DEFAULT_MAX_TICKS})\n\
           --realtime         Pace ticks at {TICK_RATE} Hz\n\
           --json             Print the final snapshot as JSON\n"
    );
}

fn value<'a>(iter: &mut std::slice::Iter<'a, String>, flag: &str) -> Result<&'a str, AppError> {
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| AppError::Usage(format!("{flag} requires a value")))
}

fn parse_number(raw: &str, flag: &str) -> Result<u64, AppError> {
    raw.parse()
        .map_err(|_| AppError::Usage(format!("{flag} expects a non-negative integer, got {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_defaults() {
        let args = Args::parse(&strings(&["levels/arena.txt"])).unwrap();
        assert_eq!(args.level, PathBuf::from("levels/arena.txt"));
        assert_eq!(args.rules, None);
        assert_eq!(args.seed, 42);
        assert!(args.script.is_empty());
        assert_eq!(args.max_ticks, 6000);
        assert!(!args.realtime);
        assert!(!args.json);
    }

    #[test]
    fn test_parse_all_options() {
        let args = Args::parse(&strings(&[
            "--seed",
            "7",
            "level",
            "--rules",
            "rules.json",
            "--script",
            "B.R",
            "--max-ticks",
            "500",
            "--realtime",
            "--json",
        ]))
        .unwrap();
        assert_eq!(args.level, PathBuf::from("level"));
        assert_eq!(args.rules, Some(PathBuf::from("rules.json")));
        assert_eq!(args.seed, 7);
        assert_eq!(args.script.len(), 3);
        assert_eq!(args.loop_options().max_ticks, 500);
        assert!(args.realtime);
        assert!(args.json);
    }

    #[test]
    fn test_parse_errors() {
        for bad in [
            vec![],
            vec!["level", "other"],
            vec!["level", "--seed"],
            vec!["level", "--seed", "-1"],
            vec!["level", "--max-ticks", "0"],
            vec!["level", "--fast"],
            vec!["level", "--script", "BX"],
        ] {
            let result = Args::parse(&strings(&bad));
            assert!(
                matches!(result, Err(AppError::Usage(_))),
                "expected usage error for {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_script_symbols() {
        let script = parse_script("U d L r\nB.").unwrap();
        assert_eq!(
            script,
            vec![
                Some(PlayerCommand::Move {
                    direction: Direction::Up
                }),
                Some(PlayerCommand::Move {
                    direction: Direction::Down
                }),
                Some(PlayerCommand::Move {
                    direction: Direction::Left
                }),
                Some(PlayerCommand::Move {
                    direction: Direction::Right
                }),
                Some(PlayerCommand::PlaceBomb),
                None,
            ]
        );
    }
}
