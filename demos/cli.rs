extern crate chrono;
extern crate env_logger;
extern crate xcscore;

use std::env;
use std::path::PathBuf;

use chrono::NaiveDate;
use xcscore::{Analysis, ScoringConfig, Strategy};

struct Options {
    config: ScoringConfig,
    export_dir: Option<PathBuf>,
    /// Used when a file has no date header
    date: Option<NaiveDate>,
    paths: Vec<String>,
}

fn main() {
    env_logger::init();

    let options = match parse_args(env::args().skip(1)) {
        Some(options) => options,
        None => return help(),
    };

    options.paths.iter().for_each(|path| analyze(path, &options));
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Option<Options> {
    let mut config = ScoringConfig::default();
    let mut export_dir = None;
    let mut date = None;
    let mut paths = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--chain-sum" => config.strategy = Strategy::ChainSum,
            "--max-pair" => config.strategy = Strategy::MaxPair,
            "--export" => export_dir = Some(PathBuf::from(args.next()?)),
            "--date" => match NaiveDate::parse_from_str(&args.next()?, "%Y-%m-%d") {
                Ok(value) => date = Some(value),
                Err(error) => {
                    eprintln!("invalid date: {}", error);
                    return None;
                }
            },
            // later flags override values from the file
            "--config" => match ScoringConfig::from_json_file(args.next()?) {
                Ok(loaded) => config = loaded,
                Err(error) => {
                    eprintln!("{}", error);
                    return None;
                }
            },
            _ if arg.starts_with("--") => return None,
            _ => paths.push(arg),
        }
    }

    if paths.is_empty() {
        return None;
    }

    Some(Options { config, export_dir, date, paths })
}

fn analyze(path: &str, options: &Options) {
    println!("--- {}", path);

    let analysis = match Analysis::from_file(path, &options.config, options.date) {
        Ok(analysis) => analysis,
        Err(error) => {
            println!("error: {}", error);
            return;
        }
    };

    let summary = &analysis.summary;
    println!("num points:   {}", analysis.track.len());
    println!("glider:       {}", summary.aircraft_type.as_deref().unwrap_or("-"));
    println!("takeoff:      {}", summary.takeoff_time);
    println!("landing:      {}", summary.landing_time);
    println!("max altitude: {} m", summary.max_altitude);
    println!("start:  {:5}  {:?}", analysis.score.start_index, analysis.score.start);
    println!("end:    {:5}  {:?}", analysis.score.end_index, analysis.score.end);
    println!("distance: {:.3} km ({:?})", summary.distance, analysis.score.strategy);
    println!("points:   {:.3}", summary.points);

    if let Some(dir) = &options.export_dir {
        let base_id = std::path::Path::new(path)
            .file_stem()
            .map_or_else(|| "track".to_string(), |stem| stem.to_string_lossy().into_owned());

        match analysis.export(dir, &base_id) {
            Ok(path) => println!("snapshot: {}", path.display()),
            Err(error) => println!("snapshot failed: {}", error),
        }
    }
    println!();
}

fn help() {
    println!("usage: cli [--chain-sum | --max-pair] [--config <json>] [--export <dir>] [--date <yyyy-mm-dd>] <igc-file>...");
}
