reexport!(testing, test);
reexport!(error);
reexport!(config);
reexport!(cli);
reexport!(sql);
reexport!(extract);
reexport!(metadata);
reexport!(seeder);
reexport!(display);
reexport!(prompt);
reexport!(app);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, trace, warn};

use clap::Parser as _;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run_cli(&args) {
        Ok(written) => {
            debug!("Wrote {} seeder files", written.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!("Run failed: {err:?}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run_cli(args: &Args) -> Result<Vec<std::path::PathBuf>> {
    let config = Config::load()?;
    let settings = Settings::resolve(args, &config)?;
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    run(&args.file, &settings, &mut prompter)
}

/// Logs go to stderr so they never interleave with prompts on stdout.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,sqlseed=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
