pub mod channel;

pub use channel::{ChannelOptions, DatagramChannel};
