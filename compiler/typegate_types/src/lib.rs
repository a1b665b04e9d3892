//! Type pool for typegate.
//!
//! All types the loader resolves live in a single [`Pool`] and are referenced
//! by 32-bit [`Idx`] handles. Identity is index equality: two references to
//! the same declaration hold the same `Idx`.
//!
//! # Layout
//!
//! ```text
//! Pool
//!   items: [Item { tag, data }]   one per type
//!   extra: [u32]                  variable-length payloads (fields, params, ...)
//!   named: [NamedEntry]           name + definition of each named type
//! ```
//!
//! Consumers never decode items themselves: [`Pool::shape`] returns a closed
//! [`Shape`] enum that must be matched exhaustively.
//!
//! The [`TypeTable`] is the loader's resolution table from syntax nodes to
//! pool handles.

mod basic;
mod error;
mod field;
mod idx;
mod item;
mod pool;
mod shape;
mod table;
mod tag;

pub use basic::BasicKind;
pub use error::PoolError;
pub use field::{FieldDef, Visibility};
pub use idx::Idx;
pub use item::Item;
pub use pool::Pool;
pub use shape::{Fields, NameList, Shape, TypeList};
pub use table::TypeTable;
pub use tag::Tag;
