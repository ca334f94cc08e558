mod cli;
mod error;
mod prompt;
