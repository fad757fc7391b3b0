//! Rollbook CLI entry point.
//!
//! # Responsibility
//! - Run each core exercise as a subcommand with deterministic output.
//! - Resolve strategy and logging configuration from flags or environment.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rollbook_core::console::maths::{add, divide, divide_variant};
use rollbook_core::console::run_sum_session;
use rollbook_core::vehicle::{
    charging_guidelines, describe, safety_tip, Bike, Chargeable, DieselCar, Drivable,
    ElectricCar, PetrolCar, Trunk,
};
use rollbook_core::{
    default_log_level, init_logging, queue_for, render_queue, QueueKind, Record, RosterService,
};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rollbook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Student roster, queue and console exercises", long_about = None)]
struct Cli {
    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true, env = "ROLLBOOK_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rotating log files; logging is off when unset
    #[arg(long, global = true, env = "ROLLBOOK_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enroll, update and remove students in a roster
    Roster {
        /// Backing store: array, linked or vector
        #[arg(short, long, env = "ROLLBOOK_STRATEGY", default_value = "array")]
        strategy: String,

        /// Print the final roster as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve students from a queue
    Queue {
        /// Serve highest score first
        #[arg(long, conflicts_with = "linked")]
        priority: bool,

        /// Use the linked-list FIFO
        #[arg(long)]
        linked: bool,
    },

    /// Add pairs of integers read from stdin until 1 is entered
    Sum,

    /// Show which division variant the operand types select
    Divide,

    /// Drive each vehicle in the fleet
    Vehicles,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        let dir = dir
            .to_str()
            .context("log directory must be valid UTF-8")?;
        init_logging(level, dir)
            .map_err(anyhow::Error::msg)
            .context("failed to initialize logging")?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Roster { strategy, json } => run_roster(&mut out, &strategy, json),
        Commands::Queue { priority, linked } => {
            let kind = if priority {
                QueueKind::Priority
            } else if linked {
                QueueKind::LinkedFifo
            } else {
                QueueKind::Fifo
            };
            run_queue(&mut out, kind)
        }
        Commands::Sum => {
            let summary = run_sum_session(io::stdin().lock(), &mut out)
                .context("sum session failed")?;
            info!(
                "event=cli_sum module=cli status=ok sums={} end={:?}",
                summary.sums.len(),
                summary.end
            );
            Ok(())
        }
        Commands::Divide => run_divide(&mut out),
        Commands::Vehicles => run_vehicles(&mut out),
    }
}

fn run_roster(out: &mut impl Write, strategy: &str, json: bool) -> Result<()> {
    let mut roster = RosterService::open(strategy)
        .with_context(|| format!("cannot build roster with strategy `{strategy}`"))?;
    writeln!(out, "Strategy: {}", roster.strategy())?;

    roster.enroll(1, "Amit", 85.5);
    roster.enroll(2, "Neha", 90.0);
    roster.enroll(3, "Raj", 78.0);

    writeln!(out, "All Students:")?;
    write_lines(out, &roster.render_lines())?;

    writeln!(out, "\nUpdating marks for ID 2...")?;
    roster.update_score(2, 95.0);

    writeln!(out, "\nStudent with ID 2:")?;
    match roster.find(2) {
        Some(record) => writeln!(out, "{record}")?,
        None => writeln!(out, "not found")?,
    }

    writeln!(out, "\nRemoving student ID 3...")?;
    roster.remove(3);

    writeln!(out, "\nFinal Student List:")?;
    if json {
        let body = serde_json::to_string_pretty(&roster.records())
            .context("failed to serialize roster")?;
        writeln!(out, "{body}")?;
    } else {
        write_lines(out, &roster.render_lines())?;
    }

    writeln!(out, "\nTotal Students: {}", roster.count())?;
    Ok(())
}

fn run_queue(out: &mut impl Write, kind: QueueKind) -> Result<()> {
    let mut queue = queue_for(kind);
    writeln!(out, "Queue: {kind:?}")?;

    queue.enqueue(Record::new(1, "Amit", 85.5));
    queue.enqueue(Record::new(2, "Neha", 90.0));
    queue.enqueue(Record::new(3, "Raj", 78.0));

    write_lines(out, &render_queue(queue.as_ref()))?;
    if let Some(next) = queue.peek() {
        writeln!(out, "\nNext student: {next}")?;
    }

    while let Some(served) = queue.dequeue() {
        writeln!(out, "Serving: {served}")?;
    }
    write_lines(out, &render_queue(queue.as_ref()))?;
    Ok(())
}

fn run_divide(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", divide_variant::<i32, i32>())?;
    writeln!(out, "7 / 2 = {}", divide(7_i32, 2_i32)?)?;

    writeln!(out, "{}", divide_variant::<f64, f64>())?;
    writeln!(out, "7.0 / 2.0 = {}", divide(7.0_f64, 2.0_f64))?;

    writeln!(out, "{}", divide_variant::<f32, f32>())?;
    writeln!(out, "7.0 / 2.0 = {}", divide(7.0_f32, 2.0_f32))?;

    writeln!(out, "{}", divide_variant::<f32, i32>())?;
    writeln!(out, "7.0 / 2 = {}", divide(7.0_f32, 2_i32))?;

    writeln!(out, "{}", divide_variant::<&str, &str>())?;
    writeln!(out, "\" 12\" / \"4\" = {}", divide(" 12", "4")?)?;

    match divide(1_i32, 0_i32) {
        Ok(value) => writeln!(out, "1 / 0 = {value}")?,
        Err(err) => writeln!(out, "1 / 0 failed: {err}")?,
    }

    writeln!(out, "add({}, 1) = {}", i32::MAX, add(i32::MAX, 1))?;
    Ok(())
}

fn run_vehicles(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", safety_tip())?;

    let mut bike = Bike::new("Hero");
    writeln!(out, "{}", bike.start())?;
    writeln!(out, "{}", bike.kick_start())?;
    writeln!(out, "{}", bike.advance())?;
    writeln!(out, "{}", bike.speed_report())?;
    writeln!(out, "{}", bike.honk())?;
    writeln!(out, "{}", bike.stop())?;
    writeln!(out, "{}", describe(&bike))?;

    let mut tesla = ElectricCar::new("Tesla");
    writeln!(out, "{}", tesla.advance())?;
    writeln!(out, "{}", tesla.speed_report())?;
    write_lines(out, &tesla.open_trunk())?;
    writeln!(out, "{}", tesla.plug_in())?;
    writeln!(out, "{}", charging_guidelines())?;
    writeln!(out, "{}", tesla.charge_battery())?;
    writeln!(out, "{}", describe(&tesla))?;

    let mut petrol = PetrolCar::new("Honda");
    writeln!(out, "{}", petrol.advance())?;
    writeln!(out, "{}", petrol.speed_report())?;
    writeln!(out, "{}", petrol.fuel_type())?;
    writeln!(out, "{}", petrol.use_petrol_mode())?;
    writeln!(out, "{}", petrol.refuel(20))?;

    let mut diesel = DieselCar::new("Tata");
    writeln!(out, "{}", diesel.advance())?;
    writeln!(out, "{}", diesel.speed_report())?;
    writeln!(out, "{}", diesel.fuel_type())?;
    writeln!(out, "{}", diesel.use_diesel_mode())?;
    write_lines(out, &diesel.open_trunk())?;
    writeln!(out, "{}", describe(&diesel))?;
    Ok(())
}

fn write_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
