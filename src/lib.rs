//! Delve - itemization and encounter-resolution engine.
//!
//! The core of a dungeon-crawler progression game: what loot exists, how it
//! is composed from base template x material x rarity, how it climbs two
//! independent upgrade ladders, and how a declarative encounter outcome is
//! applied to a party (damage, healing, experience with mentoring overflow,
//! gold, revival, equipment upgrades).
//!
//! The engine is a synchronous, single-threaded computation library. All
//! randomness flows through a caller-provided `rand::Rng`, and all tuning
//! comes in through an explicit [`config::EngineConfig`], so every outcome
//! is reproducible under a seeded generator. Presentation and persistence
//! live outside; serialization layers must preserve the identifying fields
//! on [`items::Item`] rather than only the derived stat blocks.

pub mod bases;
pub mod catalog;
pub mod character;
pub mod compose;
pub mod config;
pub mod constants;
pub mod equipment;
pub mod generation;
pub mod items;
pub mod materials;
pub mod progression;
pub mod rarity;
pub mod requirements;
pub mod resolve;
pub mod scaling;
pub mod stats;
pub mod uniques;
pub mod upgrade;
