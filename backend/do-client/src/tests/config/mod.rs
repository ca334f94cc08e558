mod file;
mod paths;
mod resolve;
