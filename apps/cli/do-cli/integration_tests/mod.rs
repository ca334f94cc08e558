mod binary;
mod commands;
mod helpers;
