//! Transparent (de)compression of text files. Readers and writers across the crate accept any
//! `Read`/`Write` stream and these helpers pick the right codec for a path.

pub mod decode;
pub mod encode;
