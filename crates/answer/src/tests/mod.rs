//! Cascade scenario tests with scripted collaborators.

mod cascade;
