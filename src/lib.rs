#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Quiz;
#[allow(non_snake_case)]
pub mod Stoichiometry;
pub mod cli;
