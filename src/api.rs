//! One module per resource group.
//!
//! Every endpoint comes in two halves: a free builder function that validates
//! its parameters and returns [`RequestArgs`](common::request::RequestArgs)
//! without touching the network, and a method on the group's façade that
//! builds and dispatches in one go.

pub mod accounts;
pub mod assets;
pub mod blocks;
pub mod datum;
pub mod ecosystem;
pub mod epochs;
pub mod general;
pub mod pools;
pub mod transactions;
pub mod tx_manager;
