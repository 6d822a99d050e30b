//! Command-line front end.
use crate::*;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub enum Command {
    #[command(
        about = "Find equilibria reachable by best-response dynamics",
        alias = "it"
    )]
    Iterative {
        #[arg(long, help = "JSON file with run parameters")]
        config: Option<PathBuf>,
        #[arg(short, long)]
        n: Option<usize>,
        #[arg(short, long)]
        m: Option<usize>,
        #[arg(short, long)]
        trials: Option<usize>,
        #[arg(short, long, value_enum)]
        density: Option<Density>,
        #[arg(short, long)]
        points: Option<Weight>,
        #[arg(short, long, value_enum)]
        order: Option<PlayerOrder>,
        #[arg(short, long)]
        seed: Option<u64>,
        #[arg(long, help = "Print results as JSON")]
        json: bool,
    },
    #[command(
        about = "Find every pure equilibrium from the full payoff tensor",
        alias = "ex"
    )]
    Exhaustive {
        #[arg(long, help = "JSON file with run parameters")]
        config: Option<PathBuf>,
        #[arg(short, long)]
        n: Option<usize>,
        #[arg(short, long)]
        m: Option<usize>,
        #[arg(short, long, value_enum)]
        density: Option<Density>,
        #[arg(long, help = "Print results as JSON")]
        json: bool,
    },
    #[command(
        about = "Check best-response equilibria against the exhaustive search",
        alias = "cc"
    )]
    Check {
        #[arg(short, long, default_value_t = 2)]
        n: usize,
        #[arg(short, long, default_value_t = 5)]
        m: usize,
        #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
        trials: usize,
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
}

impl Command {
    pub fn run(self) -> anyhow::Result<()> {
        match self {
            Self::Iterative {
                config,
                n,
                m,
                trials,
                density,
                points,
                order,
                seed,
                json,
            } => {
                let base = load::<Iterative>(config)?;
                let ref params = Iterative {
                    n: n.unwrap_or(base.n),
                    m: m.unwrap_or(base.m),
                    trials: trials.unwrap_or(base.trials),
                    density: density.unwrap_or(base.density),
                    points: points.unwrap_or(base.points),
                    order: order.unwrap_or(base.order),
                    seed: seed.unwrap_or(base.seed),
                };
                match (solve_iterative(params)?, json) {
                    (None, true) => println!("null"),
                    (None, false) => println!("no equilibria found"),
                    (Some(equilibria), true) => println!("{}", serde_json::to_string_pretty(&equilibria)?),
                    (Some(equilibria), false) => {
                        println!("{}", equilibria);
                        println!("frequencies: {:?}", equilibria.frequencies());
                    }
                }
                Ok(())
            }
            Self::Exhaustive {
                config,
                n,
                m,
                density,
                json,
            } => {
                let base = load::<Exhaustive>(config)?;
                let ref params = Exhaustive {
                    n: n.unwrap_or(base.n),
                    m: m.unwrap_or(base.m),
                    density: density.unwrap_or(base.density),
                };
                let equilibria = solve_exhaustive(params)?;
                match json {
                    true => println!("{}", serde_json::to_string_pretty(&equilibria)?),
                    false => equilibria
                        .iter()
                        .map(|tuple| Assignment::from(tuple.clone()))
                        .enumerate()
                        .for_each(|(i, tuple)| println!("{:>4}. {}", i + 1, tuple)),
                }
                Ok(())
            }
            Self::Check { n, m, trials, seed } => {
                let missing = crosscheck(n, m, trials, seed)?;
                match missing.is_empty() {
                    true => Ok(println!("every best-response equilibrium is an exhaustive equilibrium")),
                    false => Err(anyhow::anyhow!(
                        "occupancies missing from exhaustive search: {}",
                        missing
                            .iter()
                            .map(|o| o.to_string())
                            .collect::<Vec<_>>()
                            .join(", ")
                    )),
                }
            }
        }
    }
}

/// Parameters from a JSON file, or the defaults when none is given.
fn load<T>(path: Option<PathBuf>) -> anyhow::Result<T>
where
    T: Default + serde::de::DeserializeOwned,
{
    match path {
        None => Ok(T::default()),
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .map_err(|e| anyhow::anyhow!("read {}: {}", path.display(), e))?;
            serde_json::from_str(&text).map_err(|e| anyhow::anyhow!("parse {}: {}", path.display(), e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iterative_flags() {
        let command = Command::try_parse_from([
            "hotelling", "iterative", "-n", "3", "-m", "7", "--density", "normal", "--order", "multiset",
        ])
        .expect("valid arguments");
        match command {
            Command::Iterative { n, m, density, order, trials, .. } => {
                assert_eq!(n, Some(3));
                assert_eq!(m, Some(7));
                assert_eq!(density, Some(Density::Normal));
                assert_eq!(order, Some(PlayerOrder::Multiset));
                assert_eq!(trials, None);
            }
            _ => panic!("expected iterative"),
        }
    }

    #[test]
    fn check_has_defaults() {
        match Command::try_parse_from(["hotelling", "check"]).expect("valid arguments") {
            Command::Check { n, m, trials, seed } => {
                assert_eq!((n, m, trials, seed), (2, 5, DEFAULT_TRIALS, DEFAULT_SEED));
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn missing_config_defaults() {
        assert_eq!(load::<Exhaustive>(None).expect("defaults"), Exhaustive::default());
        assert!(load::<Exhaustive>(Some(PathBuf::from("does/not/exist.json"))).is_err());
    }
}
