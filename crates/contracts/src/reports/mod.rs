//! Wire contracts of the Siigo integration backend.
//!
//! Request bodies are sparse: optional string fields are omitted entirely
//! when the operator left them empty, they are never sent as `null` or `""`.

pub mod balance;
pub mod etl;
pub mod powerbi;
