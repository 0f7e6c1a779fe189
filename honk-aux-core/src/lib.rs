#![allow(non_snake_case)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::len_without_is_empty)]
#![allow(clippy::too_long_first_doc_paragraph)]

pub mod field;
pub mod poly;
pub mod relations;
pub mod subprotocols;
pub mod trace;
pub mod utils;
