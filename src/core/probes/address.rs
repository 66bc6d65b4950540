use std::net::UdpSocket;

use super::SensorProbe;
use crate::error::ProbeError;

/// Resolves the machine's primary outbound-facing network address.
///
/// Prefers whatever the OS routing table reports; a loopback address is only
/// returned when nothing better is obtainable.
#[derive(Debug, Default)]
pub struct AddressProbe;

impl AddressProbe {
    pub fn new() -> Self {
        Self
    }
}

impl SensorProbe<String> for AddressProbe {
    fn probe(&mut self) -> Result<String, ProbeError> {
        match local_ip_address::local_ip() {
            Ok(ip) if !ip.is_loopback() => Ok(ip.to_string()),
            Ok(loopback) => {
                // Loopback resolved: try to infer a routed interface, keep
                // the loopback address as a last resort.
                Ok(route_probe_address().unwrap_or_else(|_| loopback.to_string()))
            }
            Err(err) => route_probe_address()
                .map_err(|_| ProbeError::network_unavailable(err.to_string())),
        }
    }
}

/// Infer the outbound interface address by opening a transient UDP socket.
///
/// `connect` on a datagram socket sends nothing; it only selects a route.
/// The socket is bound, queried and released within this call.
fn route_probe_address() -> Result<String, ProbeError> {
    let socket = UdpSocket::bind(("0.0.0.0", 0))
        .map_err(|err| ProbeError::network_unavailable(err.to_string()))?;
    socket
        .connect(("10.254.254.254", 1))
        .map_err(|err| ProbeError::network_unavailable(err.to_string()))?;
    let addr = socket
        .local_addr()
        .map_err(|err| ProbeError::network_unavailable(err.to_string()))?;

    let ip = addr.ip();
    if ip.is_loopback() || ip.is_unspecified() {
        return Err(ProbeError::network_unavailable(
            "route probe resolved no external interface",
        ));
    }
    Ok(ip.to_string())
}
