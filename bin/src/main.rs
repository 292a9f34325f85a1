use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, Parser};
use light::{Backlight, Result};

/// Adjust a backlight device along a perceptual brightness curve.
#[derive(Parser, Debug)]
#[command(name = "light", version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
#[command(group(
            ArgGroup::new("action")
                .required(true)
                .args(["current", "max", "increase", "decrease"]),
        ))]
struct Args {
    /// Print the current raw brightness of the device.
    #[arg(short = 'C', value_name = "dev")]
    current: Option<PathBuf>,

    /// Print the maximum raw brightness of the device.
    #[arg(short = 'M', value_name = "dev")]
    max: Option<PathBuf>,

    /// Increase brightness by a number of percentage points.
    #[arg(short = 'I', value_name = "dev", requires = "percent", requires = "min_brightness")]
    increase: Option<PathBuf>,

    /// Decrease brightness by a number of percentage points.
    #[arg(short = 'D', value_name = "dev", requires = "percent", requires = "min_brightness")]
    decrease: Option<PathBuf>,

    /// Percentage points to move along the curve.
    #[arg(value_name = "percent")]
    percent: Option<f64>,

    /// Raw brightness floor the device is never stepped below.
    #[arg(value_name = "min_brightness")]
    min_brightness: Option<u32>,
}

fn main() -> ExitCode {
    env_logger::init();

    // a bare invocation prints usage and is not an error
    if std::env::args_os().len() <= 1 {
        let _ = Args::command().print_help();
        return ExitCode::SUCCESS;
    }

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(1);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("light: {e}");
            ExitCode::from(1)
        }
    }
}

fn run(args: Args) -> Result<()> {
    if let Some(dev) = args.current {
        println!("{}", Backlight::new(dev).brightness()?);
    } else if let Some(dev) = args.max {
        println!("{}", Backlight::new(dev).max_brightness()?);
    } else if let (Some(dev), Some(percent), Some(floor)) =
        (args.increase, args.percent, args.min_brightness)
    {
        Backlight::new(dev).adjust_percent(percent, floor)?;
    } else if let (Some(dev), Some(percent), Some(floor)) =
        (args.decrease, args.percent, args.min_brightness)
    {
        Backlight::new(dev).adjust_percent(-percent, floor)?;
    }
    Ok(())
}
