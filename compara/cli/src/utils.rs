use clap::{ArgAction, Args};
use log::LevelFilter;

#[derive(Args, Debug, Clone, Default)]
pub struct UtilsArgs {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl UtilsArgs {
    pub fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn setup(&self) {
        let mut builder = pretty_env_logger::formatted_builder();
        match std::env::var("RUST_LOG") {
            Ok(filters) => builder.parse_filters(&filters),
            Err(_) => builder.filter_level(self.level()),
        };
        if builder.try_init().is_err() {
            log::debug!("Logger is already initialized");
        }
    }
}
