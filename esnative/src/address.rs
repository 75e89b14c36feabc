//! Transport address constructors

use esnative_model::TransportAddress;

/// TCP address of a remote node. Host and port are not validated.
pub fn to_socket_address(host: impl Into<String>, port: u16) -> TransportAddress {
    TransportAddress::InetSocket {
        host: host.into(),
        port,
    }
}

/// Address of an in-process node
pub fn to_local_address(id: impl Into<String>) -> TransportAddress {
    TransportAddress::Local { id: id.into() }
}
