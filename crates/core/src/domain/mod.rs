pub mod momentum;
pub mod quote;
pub mod sentiment;
