use std::time::Duration;

use blockfall_engine::PieceSeed;
use blockfall_runtime::Runtime;

use self::app::{PlayApp, Timing};

mod app;
mod input;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Piece sequence seed (32 hex digits); random if omitted
    #[clap(long)]
    seed: Option<PieceSeed>,
    /// Gravity period in milliseconds
    #[clap(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    gravity_ms: u64,
    /// Gravity period in milliseconds while soft drop is held
    #[clap(long, default_value_t = 50, value_parser = clap::value_parser!(u64).range(1..))]
    soft_drop_ms: u64,
    /// Render period in milliseconds
    #[clap(long, default_value_t = 50, value_parser = clap::value_parser!(u64).range(1..))]
    render_ms: u64,
    /// How long soft drop stays active without key repeats, on terminals that
    /// cannot report key releases
    #[clap(long, default_value_t = 150, value_parser = clap::value_parser!(u64).range(1..))]
    soft_drop_hold_ms: u64,
}

impl PlayArg {
    fn timing(&self) -> Timing {
        Timing {
            gravity: Duration::from_millis(self.gravity_ms),
            soft_drop: Duration::from_millis(self.soft_drop_ms),
            render: Duration::from_millis(self.render_ms),
            soft_drop_hold: Duration::from_millis(self.soft_drop_hold_ms),
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let mut app = PlayApp::new(arg.seed, arg.timing());

    Runtime::new().run(&mut app)?;

    let engine = app.engine();
    let stats = engine.stats();
    println!(
        "score: {}  lines: {}  pieces: {}",
        stats.score(),
        stats.cleared_lines(),
        stats.locked_pieces()
    );
    println!("seed: {}", engine.seed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestArgs {
        #[clap(flatten)]
        play: PlayArg,
    }

    #[test]
    fn test_defaults() {
        let args = TestArgs::try_parse_from(["blockfall"]).unwrap();
        assert_eq!(args.play.seed, None);
        let timing = args.play.timing();
        assert_eq!(timing.gravity, Duration::from_millis(1000));
        assert_eq!(timing.soft_drop, Duration::from_millis(50));
        assert_eq!(timing.render, Duration::from_millis(50));
        assert_eq!(timing.soft_drop_hold, Duration::from_millis(150));
    }

    #[test]
    fn test_explicit_values() {
        let args = TestArgs::try_parse_from([
            "blockfall",
            "--seed",
            "0123456789abcdef0123456789abcdef",
            "--gravity-ms",
            "700",
            "--soft-drop-ms",
            "30",
        ])
        .unwrap();
        assert_eq!(
            args.play.seed,
            Some("0123456789abcdef0123456789abcdef".parse().unwrap())
        );
        assert_eq!(args.play.timing().gravity, Duration::from_millis(700));
        assert_eq!(args.play.timing().soft_drop, Duration::from_millis(30));
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(TestArgs::try_parse_from(["blockfall", "--gravity-ms", "0"]).is_err());
        assert!(TestArgs::try_parse_from(["blockfall", "--seed", "xyz"]).is_err());
    }
}
