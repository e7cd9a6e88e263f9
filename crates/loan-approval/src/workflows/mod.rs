pub mod intake;
pub mod loan;
