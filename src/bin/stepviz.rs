use std::env;
use std::time::Duration;

use rand::{rngs::StdRng, SeedableRng};
use stepviz::playback::{BusyPolicy, Presenter, RunId, ScheduledStep};
use stepviz::problems::{knapsack::KnapsackProblem, lcs::LcsProblem, matrix_chain::MatrixChainProblem};
use stepviz::sudoku::{self, Grid};
use stepviz::{InputError, PlayerBuilder, StepTrace, Table, TraceEngine};

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("stepviz: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&options) {
        eprintln!("stepviz: {err}");
        std::process::exit(1);
    }
}

fn run(options: &Options) -> Result<(), InputError> {
    match &options.command {
        Command::Knapsack {
            weights,
            values,
            capacity,
        } => {
            let problem = KnapsackProblem::new(weights.clone(), values.clone(), *capacity)?;
            let solution = TraceEngine::new(problem).run();
            replay(options, solution.trace);
            print_table(&solution.table);
            println!("Best value: {}", solution.answer);
        }
        Command::Lcs { seq1, seq2 } => {
            let a: Vec<char> = seq1.chars().collect();
            let b: Vec<char> = seq2.chars().collect();
            let solution = TraceEngine::new(LcsProblem::new(&a, &b)).run();
            replay(options, solution.trace);
            print_table(&solution.table);
            println!("LCS length: {}", solution.answer);
        }
        Command::MatrixChain { dims } => {
            let problem = MatrixChainProblem::new(dims.clone())?;
            let solution = TraceEngine::new(problem).run();
            replay(options, solution.trace);
            print_table(&solution.table);
            println!("Minimum multiplication cost: {}", solution.answer);
        }
        Command::Sudoku { grid, seed } => {
            let mut grid = match grid {
                Some(g) => *g,
                None => {
                    let mut rng = match seed {
                        Some(s) => StdRng::seed_from_u64(*s),
                        None => StdRng::from_entropy(),
                    };
                    sudoku::generate_random_sudoku(&mut rng)
                }
            };
            println!("Puzzle:\n{grid}");
            let run = sudoku::solve_animated(&mut grid);
            replay(options, run.trace);
            if run.solved {
                println!("Solution:\n{grid}");
            } else {
                println!("No solution.");
            }
        }
    }
    Ok(())
}

struct ExplainPresenter {
    lines: usize,
}

impl Presenter for ExplainPresenter {
    fn present(&mut self, scheduled: ScheduledStep<'_>) {
        let (row, col) = scheduled.step.cell();
        println!(
            "[{:>6} ms] #{:<5} ({row}, {col}) -> {:<6} {}",
            scheduled.offset.as_millis(),
            scheduled.index,
            scheduled.step.shown_value(),
            scheduled.step
        );
        self.lines += 1;
    }

    fn finished(&mut self, _run: RunId) {
        eprintln!("replayed {} steps", self.lines);
    }
}

fn replay(options: &Options, trace: StepTrace) {
    if options.quiet {
        eprintln!("{} steps recorded", trace.len());
        return;
    }
    let mut player = PlayerBuilder::new()
        .with_speed_ms(options.speed_ms)
        .with_busy_policy(BusyPolicy::Reject)
        .build();
    let mut presenter = ExplainPresenter { lines: 0 };
    if let Err(err) = player.start(trace) {
        eprintln!("stepviz: {err}");
        return;
    }
    if options.speed_ms == 0 {
        player.tick(Duration::MAX, &mut presenter);
    } else {
        player.play_blocking(&mut presenter);
    }
}

fn print_table<T: std::fmt::Display>(table: &Table<T>) {
    for row in table.iter_rows() {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:>7}")).collect();
        println!("{}", cells.join(" "));
    }
}

enum Command {
    Knapsack {
        weights: Vec<usize>,
        values: Vec<u64>,
        capacity: usize,
    },
    Lcs {
        seq1: String,
        seq2: String,
    },
    MatrixChain {
        dims: Vec<u64>,
    },
    Sudoku {
        grid: Option<Grid>,
        seed: Option<u64>,
    },
}

struct Options {
    command: Command,
    speed_ms: u64,
    quiet: bool,
}

impl Options {
    fn parse<I, T>(args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut args = args.map(Into::into);
        let command_name = args.next().ok_or_else(|| "missing command".to_string())?;
        if command_name == "--help" || command_name == "-h" {
            Options::print_help();
            std::process::exit(0);
        }

        let mut speed_ms = stepviz::playback::DEFAULT_SPEED_MS;
        let mut quiet = false;
        let mut flags: Vec<(String, String)> = Vec::new();
        let mut random = false;

        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if arg == "--no-delay" {
                speed_ms = 0;
            } else if arg == "--quiet" {
                quiet = true;
            } else if arg == "--random" {
                random = true;
            } else if let Some(flag) = arg.strip_prefix("--") {
                let (key, value) = match flag.split_once('=') {
                    Some((k, v)) => (k.to_string(), v.to_string()),
                    None => {
                        let value = args
                            .next()
                            .ok_or_else(|| format!("missing value after --{flag}"))?;
                        (flag.to_string(), value)
                    }
                };
                if key == "speed" {
                    speed_ms = value
                        .parse::<u64>()
                        .map_err(|_| "speed must be a non-negative integer (ms)".to_string())?;
                } else {
                    flags.push((key, value));
                }
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        let take = |name: &str| {
            flags
                .iter()
                .rev()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        };
        let require = |name: &str| take(name).ok_or_else(|| format!("missing --{name}"));

        let command = match command_name.as_str() {
            "knapsack" => Command::Knapsack {
                weights: parse_list(&require("weights")?).map_err(|e| e.to_string())?,
                values: parse_list(&require("values")?).map_err(|e| e.to_string())?,
                capacity: require("capacity")?
                    .trim()
                    .parse()
                    .map_err(|_| "capacity must be a non-negative integer".to_string())?,
            },
            "lcs" => Command::Lcs {
                seq1: require("seq1")?,
                seq2: require("seq2")?,
            },
            "matrix-chain" => Command::MatrixChain {
                dims: parse_list(&require("dims")?).map_err(|e| e.to_string())?,
            },
            "sudoku" => {
                let grid = match take("grid") {
                    Some(text) if !random => Some(text.parse::<Grid>().map_err(|e| e.to_string())?),
                    _ => None,
                };
                let seed = take("seed")
                    .map(|s| s.parse::<u64>())
                    .transpose()
                    .map_err(|_| "seed must be an unsigned integer".to_string())?;
                Command::Sudoku { grid, seed }
            }
            other => return Err(format!("unknown command '{other}'")),
        };

        Ok(Self {
            command,
            speed_ms,
            quiet,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: stepviz <command> [options]

Commands:
  knapsack      --weights 1,3,4,5 --values 1,4,5,7 --capacity 7
  lcs           --seq1 ABCBDAB --seq2 BDCABA
  matrix-chain  --dims 30,35,15,5,10,20,25
  sudoku        [--grid <81 cells, 0 or . for empty>] [--random] [--seed N]

Options:
  --speed <ms>      Delay between steps in milliseconds (default: 100)
  --no-delay        Print every step immediately
  --quiet           Skip playback, only print the result
  -h, --help        Print this help message
"
        );
    }
}

fn parse_list<T: std::str::FromStr>(text: &str) -> Result<Vec<T>, InputError> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<T>().map_err(|_| InputError::Parse {
                what: "number list",
                detail: format!("'{s}' is not a non-negative integer"),
            })
        })
        .collect()
}
