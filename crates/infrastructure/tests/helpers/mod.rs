#![allow(dead_code)]
#![allow(unused_imports)]

mod resolvers;

pub use resolvers::{
    authoritative_seeds, fast_options, local_seeds, loopback, CountingReporter, FailingForwarder,
    RunningResolver,
};
