//! Transport addresses

use std::fmt;

/// Address of a node reachable by the native transport.
///
/// No validation happens here; the network layer rejects unusable
/// hosts and ports when it connects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransportAddress {
    /// TCP socket address
    InetSocket { host: String, port: u16 },
    /// In-process node identified by name
    Local { id: String },
}

impl fmt::Display for TransportAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportAddress::InetSocket { host, port } => write!(f, "inet[{}:{}]", host, port),
            TransportAddress::Local { id } => write!(f, "local[{}]", id),
        }
    }
}
