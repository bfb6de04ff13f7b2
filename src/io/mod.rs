//! File-facing model I/O: the bit-exact binary format and the
//! human-readable text dump. Neither module touches the learning engine
//! directly — both operate on an already-trained [`crate::model::Model`].

pub mod binary;
pub mod text;
