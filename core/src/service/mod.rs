pub mod aggregator;
pub mod dto;
pub mod signal_service;
pub mod streak_service;
