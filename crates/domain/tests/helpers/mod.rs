#![allow(dead_code)]
#![allow(unused_imports)]

mod builders;

pub use builders::ResourceRecordBuilder;
