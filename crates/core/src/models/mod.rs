pub mod aggregation;
pub mod chart;
pub mod ledger;
pub mod lot;
pub mod settings;
