#[macro_use]
extern crate log;

use avl_set::AvlSet;
use simplelog::{Config, LevelFilter, SimpleLogger};
use std::env;

const DEFAULT_VALUES: [i64; 6] = [10, 20, 30, 40, 50, 25];
const LOG_LEVEL_VAR: &str = "AVL_LOG";

fn log_level() -> LevelFilter {
    match env::var(LOG_LEVEL_VAR) {
        Ok(level) => level.parse().unwrap_or_else(|_| {
            eprintln!("unknown log level {:?}, using info", level);
            LevelFilter::Info
        }),
        Err(_) => LevelFilter::Info,
    }
}

fn values() -> Vec<i64> {
    let args = env::args().skip(1).collect::<Vec<String>>();
    if args.is_empty() {
        return DEFAULT_VALUES.to_vec();
    }

    args.iter()
        .filter_map(|arg| match arg.parse() {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("skipping {:?}: {}", arg, err);
                None
            },
        })
        .collect()
}

fn main() {
    if let Err(err) = SimpleLogger::init(log_level(), Config::default()) {
        eprintln!("failed to initialize logger: {}", err);
    }

    let mut set = AvlSet::new();
    for value in values() {
        if set.insert(value) {
            info!("inserted {}, height {}", value, set.height());
        }
        println!("After inserting {}:", value);
        print!("{}", set.structure());
        println!();
    }

    let inorder = set.inorder().collect::<Vec<(&i64, i32)>>();
    println!("Inorder with balance factors: {:?}", inorder);

    if let Err(err) = set.validate() {
        error!("invalid tree: {}", err);
    }
}
