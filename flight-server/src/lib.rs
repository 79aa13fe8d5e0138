//! Flight route planner server.
//!
//! A web application that answers: "what is the shortest itinerary between
//! two airports using at most N connecting flights?"

pub mod config;
pub mod dataset;
pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
