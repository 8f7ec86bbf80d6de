use std::net::{IpAddr, Ipv4Addr, UdpSocket};

/// Address the probe socket connects toward. Routing-table resolution is
/// all we want; no packet has to be delivered.
const PROBE_ADDRESS: &str = "8.8.8.8:80";

/// The machine's outward-facing local IP address.
///
/// Total: any failure (offline host, sandboxed network, no route) falls
/// back to loopback. The probe socket is transient and closed on return.
pub fn local_address() -> IpAddr {
    probe().unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

fn probe() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect(PROBE_ADDRESS).ok()?;
    socket.local_addr().ok().map(|addr| addr.ip())
}
