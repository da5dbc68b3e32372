pub mod config;
pub mod instructions;
pub mod recipes;
pub mod serve;
pub mod show;
