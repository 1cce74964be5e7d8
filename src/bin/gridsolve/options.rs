use std::path::{Path, PathBuf};

use clap::ArgMatches;

#[derive(Clone)]
pub(crate) struct Options {
    input: PathBuf,
}

impl Options {
    pub fn from_args() -> Self {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Self {
        let input = PathBuf::from(matches.value_of("input").expect("input is required"));
        Self { input }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, Arg};

    App::new("Gridsolve")
        .author("Cameron Steffen <cam.steffen94@gmail.com>")
        .help_message("Solve grid number puzzles")
        .arg(
            Arg::with_name("input")
                .value_name("PATH")
                .required(true)
                .help("read a puzzle from a file (.kak or .sud)"),
        )
}
