use leverage_calculator::*;

use anyhow::Result;
use clap::Parser;
use colored::*;
use command::{Command, HELP};
use config::{Args, Config};
use domain::InputField;
use log::info;
use std::io::{self, BufRead, Write};
use store::{FileStore, KeyValueStore, NullStore};

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();

    let args = Args::parse();
    let config = Config::load(&args.config)?;

    // ===============================
    // STORE SELECTION
    // ===============================
    if args.demo {
        info!("🧪 Demo mode — nothing is saved");
        return run(LeverageCalculator::demo(), &args);
    }

    if args.no_persist || !config.storage.enabled {
        info!("🚫 Persistence disabled");
        return run(LeverageCalculator::new(NullStore), &args);
    }

    let path = config.state_path();
    info!("💾 State file: {}", path.display());
    run(LeverageCalculator::new(FileStore::open(path)), &args)
}

fn run<S: KeyValueStore>(mut calc: LeverageCalculator<S>, args: &Args) -> Result<()> {
    let given = [
        (InputField::Balance, &args.balance),
        (InputField::RiskAmount, &args.risk),
        (InputField::EntryPrice, &args.entry),
        (InputField::StopLossPrice, &args.stop_loss),
    ];

    for (field, value) in given {
        if let Some(v) = value {
            calc.set(field, v.as_str());
        }
    }

    if args.has_values() {
        return print_result(&calc, args.json);
    }

    interactive(calc, args.json)
}

fn print_result<S: KeyValueStore>(calc: &LeverageCalculator<S>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&calc.result())?);
    } else {
        print!("{}", display::render_result(calc.result()));
    }
    Ok(())
}

// ===============================
// INTERACTIVE SESSION
// ===============================
fn interactive<S: KeyValueStore>(mut calc: LeverageCalculator<S>, json: bool) -> Result<()> {
    println!("{}", "LEVERAGE & RISK CALCULATOR".bold());
    println!("Type `help` for commands.\n");
    print!("{}", display::render_inputs(calc.inputs()));
    print_result(&calc, json)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Set(field, value)) => {
                calc.set(field, value);
                print_result(&calc, json)?;
            }
            Ok(Command::Clear(field)) => {
                calc.clear(field);
                print_result(&calc, json)?;
            }
            Ok(Command::Show) => {
                print!("{}", display::render_inputs(calc.inputs()));
                print_result(&calc, json)?;
            }
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Quit) => break,
            Err(e) => println!("{} {}", "❌".red(), e),
        }
    }

    Ok(())
}
