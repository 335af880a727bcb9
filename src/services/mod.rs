// services/mod.rs - Background services

pub mod queue_listener;
