mod account;
mod catalog;
mod droplets;
mod errors;
