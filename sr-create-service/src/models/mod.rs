//! Domain entities exchanged with the backend
//!
//! Every field is optional: the same type serves as a result row and as the
//! sparse filter of a list request.

mod account;
mod address;
mod cmdb;
mod csi;
mod handling_instruction;
mod service_request;
mod template;

pub use account::{Account, AccountInfo};
pub use address::Address;
pub use cmdb::CmdbConfig;
pub use csi::Csi;
pub use handling_instruction::HandlingInstruction;
pub use service_request::{
    Association, CreatedNote, CreatedServiceRequest, NewNote, NewServiceRequest,
};
pub use template::ProductTemplate;
