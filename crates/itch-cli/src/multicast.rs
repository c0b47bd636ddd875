use std::io;
use std::net::{Ipv4Addr, SocketAddrV4, UdpSocket};

use socket2::{Domain, Protocol, Socket, Type};

pub const DEFAULT_GROUP: Ipv4Addr = Ipv4Addr::new(239, 192, 0, 1);
pub const DEFAULT_PORT: u16 = 12345;
pub const DEFAULT_TTL: u32 = 1;

/// Multicast endpoint settings shared by `listen` and `replay`.
///
/// ```text
/// ┌───────────┬──────────────┬───────────────────────────────────────┐
/// │ Field     │ Default      │ Used by                               │
/// ├───────────┼──────────────┼───────────────────────────────────────┤
/// │ group     │ 239.192.0.1  │ listen (join), replay (destination)   │
/// │ port      │ 12345        │ listen (bind), replay (destination)   │
/// │ interface │ 0.0.0.0      │ listen (join), replay (outgoing if)   │
/// │ ttl       │ 1            │ replay: stay on the local subnet      │
/// └───────────┴──────────────┴───────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MulticastConfig {
    pub group: Ipv4Addr,
    pub port: u16,
    pub interface: Ipv4Addr,
    pub ttl: u32,
}

impl Default for MulticastConfig {
    fn default() -> Self {
        Self {
            group: DEFAULT_GROUP,
            port: DEFAULT_PORT,
            interface: Ipv4Addr::UNSPECIFIED,
            ttl: DEFAULT_TTL,
        }
    }
}

impl MulticastConfig {
    pub fn destination(&self) -> SocketAddrV4 {
        SocketAddrV4::new(self.group, self.port)
    }

    /// Bind `0.0.0.0:port` with `SO_REUSEADDR` and join the group, so
    /// several receivers on one host can share the feed.
    pub fn open_receiver(&self) -> io::Result<UdpSocket> {
        let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;
        socket.set_reuse_address(true)?;
        socket.bind(&SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, self.port).into())?;
        socket.join_multicast_v4(&self.group, &self.interface)?;
        Ok(socket.into())
    }

    /// Ephemeral-port sender with the configured TTL and outgoing
    /// interface.
    pub fn open_sender(&self) -> io::Result<UdpSocket> {
        let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;
        socket.set_multicast_ttl_v4(self.ttl)?;
        if !self.interface.is_unspecified() {
            socket.set_multicast_if_v4(&self.interface)?;
        }
        socket.bind(&SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0).into())?;
        Ok(socket.into())
    }
}
