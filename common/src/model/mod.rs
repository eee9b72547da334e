pub mod participant;
pub mod spin_result;
