pub mod reference_report;
