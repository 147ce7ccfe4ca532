//! # Dashboard Command
//!
//! File: cli/src/commands/dashboard.rs
//!
//! Prints the dashboard counters for the showcase profile, or for the guest
//! profile with `--guest`.
//!
use clap::Parser;
use educirculos::core::config::Config;
use educirculos::core::error::Result;
use educirculos::platform::dashboard::DashboardStats;
use educirculos::platform::session::Session;
use tracing::info;

#[derive(Parser, Debug)]
pub struct DashboardArgs {
    /// Show the guest profile's dashboard.
    #[arg(long)]
    pub guest: bool,
}

pub async fn handle_dashboard(args: DashboardArgs, cfg: &Config) -> Result<()> {
    info!("Handling dashboard command...");
    let mut session = Session::new(cfg.platform.clone());
    if args.guest {
        session.guest();
    }
    let user = session.ensure_user();
    let stats = DashboardStats::for_profile(user, &cfg.platform);

    println!("{} · {}", user.name, user.level);
    for (label, value) in stats.rows() {
        println!("  {:<20} {:>8}", label, value);
    }
    Ok(())
}
