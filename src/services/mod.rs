pub mod booking_service;
pub mod currency;
pub mod handoff_service;
pub mod pricing_service;
pub mod report_service;
