//! SDP connection data representation.
//!
//! Defines the connection information (c= line) for a session or a single
//! media stream.

use crate::{errors::SdpError, line::SdpLine};

/// Represents the connection data field (c=) as specified in RFC 4566.
///
/// ```text
/// c=<network-type> <address-type> <connection-address>[/<ttl>[/<number-of-addresses>]]
/// ```
///
/// The address is kept as text: it may be a host name or an FQDN as well as
/// a literal IP address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub network_type: String,
    pub address_type: String,
    pub address: String,
    pub ttl: Option<u8>,
    pub num_addresses: Option<u32>,
}

impl Connection {
    /// Parses the connection address with its optional TTL and address count.
    ///
    /// # Arguments
    /// * `address_str` - `<address>[/<ttl>][/<number-of-addresses>]`
    ///
    /// # Returns
    /// * `Ok((String, Option<u8>, Option<u32>))` - The address, TTL, and number of addresses
    /// * `Err(SdpError)` - If the address is empty or a numeric suffix is invalid
    fn parse_address_info(
        address_str: &str,
    ) -> Result<(String, Option<u8>, Option<u32>), SdpError> {
        let mut parts = address_str.split('/');

        let address = parts
            .next()
            .filter(|address| !address.is_empty())
            .ok_or(SdpError::InvalidConnectionFormat)?;

        let ttl = parts
            .next()
            .map(|ttl| ttl.parse().map_err(|_| SdpError::InvalidTtl))
            .transpose()?;

        let num_addresses = parts
            .next()
            .map(|count| count.parse().map_err(|_| SdpError::InvalidAddressCount))
            .transpose()?;

        if parts.next().is_some() {
            return Err(SdpError::InvalidConnectionFormat);
        }

        Ok((address.to_string(), ttl, num_addresses))
    }
}

impl SdpLine for Connection {
    const KIND: &'static str = "connection";

    fn recognize(raw: &str) -> bool {
        raw.strip_prefix("c=")
            .is_some_and(|value| value.split_whitespace().count() == 3)
    }

    fn parse(raw: &str) -> Result<Self, SdpError> {
        let value = raw
            .strip_prefix("c=")
            .ok_or(SdpError::InvalidConnectionFormat)?;
        let parts: Vec<&str> = value.split_whitespace().collect();
        let [network_type, address_type, address_str] = parts.as_slice() else {
            return Err(SdpError::InvalidConnectionFormat);
        };

        let (address, ttl, num_addresses) = Self::parse_address_info(address_str)?;

        Ok(Connection {
            network_type: network_type.to_string(),
            address_type: address_type.to_string(),
            address,
            ttl,
            num_addresses,
        })
    }
}

/// The address count is only written after a TTL, as RFC 4566 requires for
/// IPv4 multicast.
impl std::fmt::Display for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "c={} {} {}",
            self.network_type, self.address_type, self.address
        )?;
        if let Some(ttl) = self.ttl {
            write!(f, "/{}", ttl)?;
            if let Some(num_addresses) = self.num_addresses {
                write!(f, "/{}", num_addresses)?;
            }
        }
        Ok(())
    }
}
