//! PayNow domain: the TLV data object tree, the canonical profile it is
//! instantiated from, the generation inputs and their validation rules.

pub mod data_object;
pub mod options;
pub mod ports;
pub mod template;
pub mod validation;
