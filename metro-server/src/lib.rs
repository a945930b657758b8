//! Metro route planner server.
//!
//! A web application that answers: "what is the shortest route between
//! these two stations, which line serves each leg, and where do I change?"

pub mod domain;
pub mod graph;
pub mod planner;
pub mod registry;
pub mod transfers;
pub mod web;
