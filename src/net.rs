//! Running the shell over an outbound TCP connection.

use anyhow::{Context, Result};
use nix::unistd::dup2;
use std::io::Write;
use std::net::{SocketAddr, SocketAddrV4, TcpStream};
use std::os::fd::AsRawFd;
use std::time::Duration;

/// Open a connection to `addr`, honouring `timeout` for connect and send.
pub fn connect(addr: SocketAddrV4, timeout: Option<Duration>) -> Result<TcpStream> {
    let target = SocketAddr::V4(addr);
    let stream = match timeout {
        Some(timeout) => TcpStream::connect_timeout(&target, timeout),
        None => TcpStream::connect(target),
    }
    .with_context(|| format!("Cannot connect to the server {addr}"))?;

    stream
        .set_write_timeout(timeout)
        .context("Cannot set the send timeout")?;
    Ok(stream)
}

/// Bind file descriptors 0, 1 and 2 to `stream`.
///
/// The socket keeps working after `stream` is dropped since the duplicated
/// descriptors stay open.
pub fn bind_standard_streams(stream: &TcpStream) -> Result<()> {
    std::io::stdout().flush()?;
    std::io::stderr().flush()?;

    let fd = stream.as_raw_fd();
    for target in 0..=2 {
        dup2(fd, target).with_context(|| format!("Cannot redirect descriptor {target}"))?;
    }
    Ok(())
}

/// Connect to `addr` and make the connection the shell's terminal.
pub fn redirect_to_server(addr: SocketAddrV4, timeout: Option<Duration>) -> Result<()> {
    let stream = connect(addr, timeout)?;
    println!("Connected to {addr}");
    tracing::info!(%addr, "standard streams bound to server");
    bind_standard_streams(&stream)
}
