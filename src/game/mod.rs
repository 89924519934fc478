pub mod computer_vs_computer;
pub mod engine;
pub mod position_counter;
