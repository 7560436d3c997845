//! PakTechnology UI Components
//!
//! This crate provides the leaf Dioxus components the site's sections are
//! built from.
//!
//! ## Design Language
//!
//! Clean agency look, driven entirely by CSS classes defined in the app's
//! theme:
//! - **Brand green (#0b8f5a)**: primary actions, active pills
//! - **Navy (#0f172a)**: headings, dark bands
//! - **Amber (#f5a524)**: highlights, ratings, "most popular" badges
//! - **Slate**: body text and borders
//!
//! Components never hold content of their own; sections pass everything in
//! through props.

pub mod components;

pub use components::*;
