// DeFi Degen Cycle Simulator - CLI
// Single entry point for playing, batch-simulating, and inspecting the catalog

use std::cell::RefCell;
use std::rc::Rc;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::error;

use degen_cycle_sim::progress::BatchProgress;
use degen_cycle_sim::{
    autoplay, autoplay_with, policy, report, BatchAnalyzer, Config, CycleEngine, EventCatalog,
    LogNotifier, NullNotifier, OutcomeKind, Payout, PlayerProfile, SimResult,
};

#[derive(Parser)]
#[command(name = "degen-cycle")]
#[command(version = "0.2.0")]
#[command(about = "DeFi Degen: Survive the Cycle - trading simulator", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize configuration
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Play one full cycle under a policy
    Play {
        /// Decision policy: ignore, steady, cautious, degen, random
        #[arg(short, long, default_value = "steady")]
        policy: String,

        /// Stake percent for steady/cautious policies
        #[arg(long, default_value = "25")]
        percent: u8,

        /// Seed for reproducible runs
        #[arg(short, long)]
        seed: Option<u64>,

        /// Player alias shown in the share line
        #[arg(short, long, default_value = "CryptoLearn")]
        username: String,

        /// Write the run report to this JSON file
        #[arg(long)]
        report: Option<String>,
    },

    /// Simulate many cycles and aggregate statistics
    Batch {
        /// Number of runs
        #[arg(short, long, default_value = "100")]
        runs: usize,

        /// Decision policy: ignore, steady, cautious, degen, random
        #[arg(short, long, default_value = "steady")]
        policy: String,

        /// Stake percent for steady/cautious policies
        #[arg(long, default_value = "25")]
        percent: u8,

        /// Base seed; run i uses seed + i
        #[arg(short, long)]
        seed: Option<u64>,

        /// Write all run reports to this JSON file
        #[arg(long)]
        report: Option<String>,
    },

    /// List the event catalog
    Catalog {
        /// Show payout details and hints
        #[arg(short, long)]
        detailed: bool,

        /// Only show guaranteed-loss traps
        #[arg(long)]
        risky_only: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    if let Err(err) = run(cli) {
        error!("{}", err.user_message());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> SimResult<()> {
    match cli.command {
        Commands::Init { force } => cmd_init(&cli.config, force),
        Commands::Play {
            policy,
            percent,
            seed,
            username,
            report,
        } => cmd_play(&cli.config, &policy, percent, seed, &username, report),
        Commands::Batch {
            runs,
            policy,
            percent,
            seed,
            report,
        } => cmd_batch(&cli.config, runs, &policy, percent, seed, report),
        Commands::Catalog {
            detailed,
            risky_only,
        } => cmd_catalog(detailed, risky_only),
    }
}

fn cmd_init(path: &str, force: bool) -> SimResult<()> {
    if std::path::Path::new(path).exists() && !force {
        println!("Config file {} already exists. Use --force to overwrite.", path);
        return Ok(());
    }
    let config = Config::default();
    config.to_file(path)?;
    println!("✅ Wrote default configuration to {}", path);
    Ok(())
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn cmd_play(
    config_path: &str,
    policy_name: &str,
    percent: u8,
    seed: Option<u64>,
    username: &str,
    report_path: Option<String>,
) -> SimResult<()> {
    let config = Config::load_or_create(config_path)?;
    let profile = Rc::new(RefCell::new(PlayerProfile::new(username)));

    let mut engine = CycleEngine::with_rng(
        config.clone(),
        EventCatalog::builtin(),
        rng_for(seed),
        Box::new(profile.clone()),
        Box::new(LogNotifier),
    );
    let mut policy = policy::policy_by_name(
        policy_name,
        percent,
        rng_for(seed.map(|s| s.wrapping_add(1))),
    )?;

    println!(
        "🧠 Starting the cycle: ${:.2} DAI, {} days, policy '{}'",
        config.game.initial_balance, config.game.max_days, policy_name
    );

    let run_report = autoplay_with(&mut engine, policy.as_mut(), seed, |day, outcome, balance| {
        let marker = match outcome.kind {
            OutcomeKind::Positive => "📈",
            OutcomeKind::Negative => "📉",
            OutcomeKind::Neutral => "ℹ️",
        };
        println!("{} Day {:>2}: {}", marker, day, outcome.description);
        println!("   Balance: ${:.2} DAI", balance);
    })?;

    println!();
    println!("🏁 Cycle Ended!");
    println!(
        "   Survived {} days | Final: ${:.2} DAI | Ponzi Score: {} | XP: {}",
        run_report.days_survived,
        run_report.final_balance,
        run_report.ponzi_score,
        run_report.xp_awarded
    );
    {
        let profile = profile.borrow();
        println!(
            "   {} is level {} ({:.0}/{:.0} XP)",
            username,
            profile.level(),
            profile.xp(),
            profile.next_level_xp()
        );
    }
    println!("   Flex: {}", run_report.share_line(username));
    if run_report.is_moonshot() {
        println!("   \"When Richard arrives and exposes the moles...privacy appears\"");
    }

    if let Some(path) = report_path {
        run_report.save(&path)?;
        println!("📝 Report written to {}", path);
    }

    Ok(())
}

fn cmd_batch(
    config_path: &str,
    runs: usize,
    policy_name: &str,
    percent: u8,
    seed: Option<u64>,
    report_path: Option<String>,
) -> SimResult<()> {
    let config = Config::load_or_create(config_path)?;
    let profile = Rc::new(RefCell::new(PlayerProfile::new("CryptoLearn")));
    let mut policy = policy::policy_by_name(
        policy_name,
        percent,
        rng_for(seed.map(|s| s.wrapping_add(1))),
    )?;

    let progress = BatchProgress::new(runs);
    let mut reports = Vec::with_capacity(runs);

    for i in 0..runs {
        let run_seed = seed.map(|s| s.wrapping_add(i as u64));
        let mut engine = CycleEngine::with_rng(
            config.clone(),
            EventCatalog::builtin(),
            rng_for(run_seed),
            Box::new(profile.clone()),
            Box::new(NullNotifier),
        );
        let run_report = autoplay(&mut engine, policy.as_mut(), run_seed)?;
        progress.update(i + 1, run_report.final_balance, run_report.xp_awarded);
        reports.push(run_report);
    }

    let summary = BatchAnalyzer::new().summarize(&reports);
    progress.finish(summary.win_rate_pct);

    println!();
    println!("📊 Batch summary ({} runs, policy '{}')", summary.runs, policy_name);
    println!(
        "   Final balance: mean ${:.2} | median ${:.2} | best ${:.2} | worst ${:.2}",
        summary.mean_final_balance,
        summary.median_final_balance,
        summary.best_final_balance,
        summary.worst_final_balance
    );
    println!(
        "   Win rate: {:.1}% | Ruin rate: {:.1}% | Moonshots: {}",
        summary.win_rate_pct, summary.ruin_rate_pct, summary.moonshots
    );
    println!(
        "   XP: mean {:.1} | total {} | mean ponzi score {:.1}",
        summary.mean_xp, summary.total_xp, summary.mean_ponzi_score
    );
    println!(
        "   Ledger: level {} after the batch",
        profile.borrow().level()
    );

    if let Some(path) = report_path {
        report::save_batch(&reports, &path)?;
        println!("📝 Reports written to {}", path);
    }

    Ok(())
}

fn cmd_catalog(detailed: bool, risky_only: bool) -> SimResult<()> {
    let catalog = EventCatalog::builtin();

    println!("📜 Event catalog ({} entries)", catalog.len());
    for event in catalog.events() {
        if risky_only && !event.payout.is_guaranteed_loss() {
            continue;
        }

        let payout = match event.payout {
            Payout::GuaranteedLoss => "guaranteed loss".to_string(),
            Payout::FixedLoss { severity, .. } => format!("fixed loss {:.0}%", severity * 100.0),
            Payout::ColdMarketFlop { multiplier, .. } => {
                format!("{}x, flops in cold markets", multiplier)
            }
            Payout::GuaranteedProfit { multiplier } => format!("guaranteed {}x", multiplier),
            Payout::Speculative { multiplier } => format!("speculative {}x", multiplier),
            Payout::Contrarian { multiplier } => format!("contrarian {}x", multiplier),
        };

        println!("  #{:>2} [{}] {} — {}", event.id, event.kind, event.title, payout);
        if detailed {
            println!("      {}", event.description);
            if let Some(clue) = event.clue {
                println!("      Hint: {}", clue);
            }
        }
    }

    Ok(())
}
