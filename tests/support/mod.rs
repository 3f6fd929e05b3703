#![allow(dead_code)]

pub mod fake_processor;
pub mod in_memory_payment_repository;
pub mod redis_container;
