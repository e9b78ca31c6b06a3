pub mod aggregation_service;
pub mod chart_service;
pub mod coercion;
pub mod ledger_service;
pub mod summary_service;
