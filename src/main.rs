mod cli;

use clap::Parser;
use cli::{Arguments, Options, execute};
use std::{
    io::{stderr, stdout},
    process::exit,
};

fn main() {
    let arguments = Arguments::parse();
    let result = execute(
        &arguments.operation,
        &Options {
            debug: arguments.debug,
        },
        &mut stdout().lock(),
        &mut stderr().lock(),
    );

    if let Err(error) = result {
        eprintln!(
            "{}{}",
            arguments.log_prefix.as_deref().unwrap_or_default(),
            error
        );

        exit(1)
    }
}
