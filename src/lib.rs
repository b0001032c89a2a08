//! UsageScope - usage analyzer for frontend design systems
//!
//! This crate walks a frontend source tree and reports how PrimeVue
//! components, theme variables and Tailwind utility classes are used.

pub mod analysis;
pub mod export;
pub mod extract;
pub mod patterns;
pub mod report;
pub mod scan;
