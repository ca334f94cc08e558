mod client;
mod config;
mod helpers;
