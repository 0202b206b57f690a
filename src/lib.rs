//! Vibe Quiz - Personality quiz service
//!
//! Runs a ten-question personality quiz and turns the answers into an
//! MBTI-style result. Analysis goes through Mistral when a key is
//! configured, with a keyword scorer as the fallback.

pub mod adapters;
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
