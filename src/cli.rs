pub mod cli_main;

pub mod cli_examples;
pub mod quiz_cli;
pub mod quiz_help;
