//! Record store collaborator.
//!
//! The payroll core needs three collections: employee records, payroll
//! records keyed by employee and pay period, and monthly basic-pay records
//! feeding thirteenth-month pay. Saves are idempotent per key: a repeat
//! save updates the existing record instead of duplicating it.

mod memory;

pub use memory::MemoryStore;
