pub mod forwarding;
pub mod server;
pub mod transport;

pub use forwarding::UdpForwarder;
pub use server::ResolverServer;
pub use transport::{ChannelOptions, DatagramChannel};
