use clap::{value_parser, Arg, ArgAction, Command};
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

mod cross_check;
mod digit_table;
mod render;

// -------------------------------------------------------------------------------------------------
// MAIN
// -------------------------------------------------------------------------------------------------

fn main() -> Result<(), std::io::Error> {
    // We parse the input args
    let matches = Command::new("tasks")
        .about("charconv developer tasks")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Prints debug messages"),
        )
        .subcommand(
            Command::new("render")
                .about("Convert a 128 bits integer to text in a fixed size buffer")
                .arg(
                    Arg::new("value")
                        .required(true)
                        .allow_hyphen_values(true)
                        .help("Decimal value, signed or unsigned"),
                )
                .arg(
                    Arg::new("base")
                        .long("base")
                        .default_value("10")
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("capacity")
                        .long("capacity")
                        .default_value("130")
                        .value_parser(value_parser!(usize))
                        .help("Size of the destination buffer"),
                ),
        )
        .subcommand(
            Command::new("cross-check")
                .about("Compare every Emulated128 operator against the native u128")
                .arg(
                    Arg::new("iterations")
                        .long("iterations")
                        .default_value("100000")
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_parser(value_parser!(u64))
                        .help("Seed of the operand generator, random if absent"),
                ),
        )
        .subcommand(Command::new("digit-table").about("Check the digit lookup tables"))
        .arg_required_else_help(true)
        .get_matches();

    // We initialize the logger with proper verbosity
    let verb = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    CombinedLogger::init(vec![TermLogger::new(
        verb,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .map_err(std::io::Error::other)?;

    match matches.subcommand() {
        Some(("render", sub_matches)) => {
            let value = sub_matches
                .get_one::<String>("value")
                .map(String::as_str)
                .unwrap_or_default();
            let base = sub_matches.get_one::<u32>("base").copied().unwrap_or(10);
            let capacity = sub_matches
                .get_one::<usize>("capacity")
                .copied()
                .unwrap_or(130);
            render::render(value, base, capacity)?;
        }
        Some(("cross-check", sub_matches)) => {
            let iterations = sub_matches
                .get_one::<u64>("iterations")
                .copied()
                .unwrap_or(100_000);
            let seed = sub_matches.get_one::<u64>("seed").copied();
            cross_check::cross_check(iterations, seed)?;
        }
        Some(("digit-table", _)) => {
            digit_table::check_digit_table()?;
        }
        _ => {}
    }

    Ok(())
}
