//! Shows rounding error piling up in single precision: random values are
//! added to and then subtracted from an accumulator that should stay at 1.0.
use clap::{value_t, App, Arg, ArgMatches};
use rand::rngs::StdRng;
use rand::{FromEntropy, Rng, SeedableRng};

#[derive(Debug, PartialEq)]
struct Options {
    iterations: usize,
    seed: Option<u64>,
}

fn app() -> App<'static, 'static> {
    App::new("float_error")
        .about("Accumulates f32 rounding error over add/subtract round trips")
        .arg(
            Arg::with_name("iterations")
                .short("n")
                .long("iterations")
                .takes_value(true)
                .default_value("2000")
                .help("Number of add/subtract round trips"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .help("PRNG seed, for repeatable runs"),
        )
}

/// Rejects values that do not parse instead of falling back to defaults.
fn options(matches: &ArgMatches) -> Result<Options, clap::Error> {
    let iterations = value_t!(matches, "iterations", usize)?;
    let seed = if matches.is_present("seed") {
        Some(value_t!(matches, "seed", u64)?)
    } else {
        None
    };
    Ok(Options { iterations, seed })
}

fn main() {
    env_logger::init();

    let matches = app().get_matches();
    let opts = options(&matches).unwrap_or_else(|e| e.exit());

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut f = 1.0f32;
    for i in 0..opts.iterations {
        let x: f32 = rng.gen();
        let y: f32 = rng.gen();

        f += x;
        f += y;
        f -= x;
        f -= y;

        println!("Loop #{}: F: {}; X: {}; Y: {}", i, f, x, y);
    }
    log::info!("drift after {} iterations: {:e}", opts.iterations, f - 1.0);
}


#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options, clap::Error> {
        let matches = app().get_matches_from_safe(args.iter())?;
        options(&matches)
    }

    #[test]
    fn test_defaults() {
        assert_eq!(parse(&["float_error"]).unwrap(), Options { iterations: 2000, seed: None });
    }

    #[test]
    fn test_explicit_values() {
        let opts = parse(&["float_error", "-n", "5", "--seed", "42"]).unwrap();
        assert_eq!(opts, Options { iterations: 5, seed: Some(42) });
    }

    #[test]
    fn test_bad_seed_is_an_error() {
        let err = parse(&["float_error", "--seed", "notanumber", "-n", "2"]).unwrap_err();
        assert_eq!(err.kind, clap::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_bad_iteration_count_is_an_error() {
        let err = parse(&["float_error", "-n", "abc"]).unwrap_err();
        assert_eq!(err.kind, clap::ErrorKind::ValueValidation);
    }
}
