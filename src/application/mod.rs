//! Application layer: applies the PayNow business rules to a fresh copy of
//! the profile and hands the result to the encoder.

pub mod generator;
