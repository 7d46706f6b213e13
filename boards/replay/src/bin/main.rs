#[macro_use]
extern crate log;

use std::io::{BufRead, BufReader, Read};

use env_logger::Env;
use pro_pfd::config::{Config, Path, PathSet, Value};
use pro_pfd::pfd::PFD;
use pro_pfd::types::telemetry::TelemetrySnapshot;
use replay::sweep::Sweep;
use replay::Records;

fn load_config<'a>(matches: &'a clap::ArgMatches<'a>) -> Result<Config, String> {
    let mut config = match matches.value_of("config") {
        Some(config_path) => {
            let mut file = std::fs::File::open(config_path)
                .map_err(|e| format!("Read config file {} failed: {}", config_path, e))?;
            let mut buffer = String::new();
            file.read_to_string(&mut buffer).map_err(|_| "Unable to read config-file")?;
            serde_json::from_str(&buffer).map_err(|e| format!("Bad config file: {}", e))?
        }
        None => Config::default(),
    };
    if let Some(values) = matches.values_of("set") {
        let values: Vec<&str> = values.collect();
        for pair in values.chunks(2) {
            let (path, value) = (pair[0], pair.get(1).copied());
            config
                .set(Path::from(path), Value(value))
                .map_err(|e| format!("Set {} failed: {}", path, e))?;
        }
    }
    debug!("Config: {}", config);
    Ok(config)
}

fn play<I: Iterator<Item = (TelemetrySnapshot, bool)>>(pfd: &mut PFD, records: I) -> usize {
    let mut count = 0;
    for (telemetry, forward) in records {
        println!("{}", pfd.tick(&telemetry, forward));
        count += 1;
    }
    count
}

fn init<'a>(matches: &'a clap::ArgMatches<'a>) -> Result<(), String> {
    let mut pfd = PFD::new(load_config(matches)?);
    let count = if let Some(ticks) = matches.value_of("sweep") {
        let ticks = ticks.parse::<usize>().map_err(|_| format!("Sweep not a number"))?;
        play(&mut pfd, Sweep::new(ticks).map(|telemetry| (telemetry, true)))
    } else {
        let reader: Box<dyn BufRead> = match matches.value_of("FILE") {
            Some(path) => {
                let file = std::fs::File::open(path)
                    .map_err(|e| format!("Open telemetry file {} failed: {}", path, e))?;
                Box::new(BufReader::new(file))
            }
            None => Box::new(BufReader::new(std::io::stdin())),
        };
        let records = Records::new(reader).map(|record| (record.telemetry, record.forward));
        play(&mut pfd, records)
    };
    info!("Replayed {} ticks", count);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let matches = clap::App::new("replay")
        .version("0.1")
        .author("qiuchengxuan")
        .about("Lay out primary flight display frames from recorded telemetry")
        .arg(clap::Arg::with_name("config").long("config").help("Config file").takes_value(true))
        .arg(
            clap::Arg::with_name("set")
                .long("set")
                .help("Override a config path, e.g. --set speed.floor none")
                .number_of_values(2)
                .multiple(true)
                .takes_value(true),
        )
        .arg(clap::Arg::with_name("sweep").long("sweep").help("Synthetic ticks").takes_value(true))
        .arg(clap::Arg::with_name("FILE").help("Telemetry json-lines, stdin if absent").index(1))
        .get_matches();
    if let Some(error) = init(&matches).err() {
        println!("{}", error);
    }
}
