use std::fmt::{self, Display, Formatter};
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::fragment::Fragment;
use crate::quote::quoted;

/// Menu holding address pools.
pub const IP_POOL_PATH: &str = "/ip pool";

/// Longest prefix that still has distinct network and broadcast addresses
/// around its hosts.
const MAX_BROADCAST_PREFIX: u8 = 30;

/// An IPv4 address with a prefix length, as written in `a.b.c.d/len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cidr {
    address: Ipv4Addr,
    prefix: u8,
}

impl Cidr {
    pub fn new(address: Ipv4Addr, prefix: u8) -> Result<Self> {
        if prefix > 32 {
            return Err(Error::invalid_cidr(
                format!("{address}/{prefix}"),
                "prefix length must be between 0 and 32",
            ));
        }
        Ok(Self { address, prefix })
    }

    /// The address as written, host bits included.
    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn mask(&self) -> u32 {
        mask(self.prefix)
    }

    /// Address with all host bits cleared.
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.address) & self.mask())
    }

    /// Address with all host bits set.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.address) | !self.mask())
    }

    /// Host addresses usable on this subnet.
    ///
    /// Up to /30 the network and broadcast addresses are excluded. A /31 is a
    /// point-to-point link where both addresses are usable (RFC 3021) and a
    /// /32 is its single address.
    pub fn usable_range(&self) -> AddressRange {
        let network = u32::from(self.network());
        let broadcast = u32::from(self.broadcast());
        if self.prefix <= MAX_BROADCAST_PREFIX {
            AddressRange::from_bits(network + 1, broadcast - 1)
        } else {
            AddressRange::from_bits(network, broadcast)
        }
    }

    /// First usable address, conventionally the router's own address.
    pub fn gateway(&self) -> Ipv4Addr {
        self.usable_range().first
    }

    /// Usable range minus the gateway, for handing out to clients. Subnets
    /// too small to spare the gateway return the whole usable range.
    pub fn pool_range(&self) -> AddressRange {
        let usable = self.usable_range();
        let first = u32::from(usable.first);
        let last = u32::from(usable.last);
        if self.prefix <= MAX_BROADCAST_PREFIX && first < last {
            AddressRange::from_bits(first + 1, last)
        } else {
            usable
        }
    }
}

impl FromStr for Cidr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (address, prefix) = trimmed
            .split_once('/')
            .ok_or_else(|| Error::invalid_cidr(s, "missing '/<prefix>'"))?;
        let address = parse_ipv4(address, s)?;
        let prefix: u8 = prefix
            .parse()
            .map_err(|_| Error::invalid_cidr(s, "prefix length is not a number"))?;
        if prefix > 32 {
            return Err(Error::invalid_cidr(
                s,
                "prefix length must be between 0 and 32",
            ));
        }
        Ok(Self { address, prefix })
    }
}

impl Display for Cidr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix)
    }
}

/// Inclusive span of IPv4 addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRange {
    pub first: Ipv4Addr,
    pub last: Ipv4Addr,
}

impl AddressRange {
    pub fn new(first: Ipv4Addr, last: Ipv4Addr) -> Self {
        Self { first, last }
    }

    fn from_bits(first: u32, last: u32) -> Self {
        Self {
            first: Ipv4Addr::from(first),
            last: Ipv4Addr::from(last),
        }
    }
}

impl Display for AddressRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}

/// Zero the host bits of `ip` for the given prefix length.
pub fn network_address(ip: &str, prefix_length: u32) -> Result<Ipv4Addr> {
    let input = format!("{ip}/{prefix_length}");
    let address = parse_ipv4(ip, &input)?;
    let prefix = u8::try_from(prefix_length)
        .ok()
        .filter(|p| *p <= 32)
        .ok_or_else(|| Error::invalid_cidr(&input, "prefix length must be between 0 and 32"))?;
    Ok(Cidr { address, prefix }.network())
}

/// Usable host range of `cidr`. See [`Cidr::usable_range`].
pub fn usable_range(cidr: &str) -> Result<AddressRange> {
    Ok(cidr.parse::<Cidr>()?.usable_range())
}

/// First usable address of `cidr`.
pub fn gateway_address(cidr: &str) -> Result<Ipv4Addr> {
    Ok(cidr.parse::<Cidr>()?.gateway())
}

/// Client pool range of `cidr`. See [`Cidr::pool_range`].
pub fn pool_range(cidr: &str) -> Result<AddressRange> {
    Ok(cidr.parse::<Cidr>()?.pool_range())
}

/// Fragment declaring one address pool.
pub fn ip_pool_fragment(name: &str, range: &AddressRange, comment: &str) -> Fragment {
    Fragment::single(
        IP_POOL_PATH,
        [format!("add name={name} ranges={range} comment={}", quoted(comment))],
    )
}

/// Return the subnet mask for a prefix length already checked to be <= 32.
fn mask(prefix: u8) -> u32 {
    if prefix == 0 {
        return 0;
    }
    u32::MAX << (32 - u32::from(prefix))
}

fn parse_ipv4(address: &str, input: &str) -> Result<Ipv4Addr> {
    address
        .trim()
        .parse()
        .map_err(|_| Error::invalid_cidr(input, format!("'{address}' is not a dotted IPv4 address")))
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::{
        gateway_address, ip_pool_fragment, network_address, pool_range, usable_range,
        AddressRange, Cidr,
    };
    use crate::error::Error;
    use crate::path::MenuPath;

    fn ip(s: &str) -> Ipv4Addr {
        s.parse().expect("test address")
    }

    #[test]
    fn network_address_masks_host_bits() {
        assert_eq!(network_address("192.168.1.77", 24).expect("ok"), ip("192.168.1.0"));
        assert_eq!(network_address("10.20.30.40", 0).expect("ok"), ip("0.0.0.0"));
        assert_eq!(network_address("10.20.30.40", 32).expect("ok"), ip("10.20.30.40"));
        assert_eq!(network_address("172.16.5.9", 12).expect("ok"), ip("172.16.0.0"));
    }

    #[test]
    fn network_address_rejects_bad_input() {
        for (addr, prefix) in [("192.168.1", 24), ("256.1.1.1", 24), ("a.b.c.d", 8), ("10.0.0.1", 33)] {
            let err = network_address(addr, prefix).expect_err("should fail");
            assert!(matches!(err, Error::InvalidCidr { .. }), "{addr}/{prefix}");
        }
    }

    #[test]
    fn usable_range_of_slash_24() {
        let range = usable_range("192.168.1.0/24").expect("range");
        assert_eq!(range, AddressRange::new(ip("192.168.1.1"), ip("192.168.1.254")));
        assert_eq!(range.to_string(), "192.168.1.1-192.168.1.254");
    }

    #[test]
    fn usable_range_ignores_host_bits() {
        let range = usable_range("10.10.10.77/30").expect("range");
        assert_eq!(range, AddressRange::new(ip("10.10.10.77"), ip("10.10.10.78")));
    }

    #[test]
    fn point_to_point_and_host_routes() {
        assert_eq!(
            usable_range("10.0.0.4/31").expect("range"),
            AddressRange::new(ip("10.0.0.4"), ip("10.0.0.5"))
        );
        assert_eq!(
            usable_range("10.0.0.9/32").expect("range"),
            AddressRange::new(ip("10.0.0.9"), ip("10.0.0.9"))
        );
    }

    #[test]
    fn gateway_and_pool_split_the_range() {
        assert_eq!(gateway_address("192.168.70.0/24").expect("gw"), ip("192.168.70.1"));
        assert_eq!(
            pool_range("192.168.70.0/24").expect("pool").to_string(),
            "192.168.70.2-192.168.70.254"
        );
        assert_eq!(
            pool_range("192.168.80.0/30").expect("pool").to_string(),
            "192.168.80.2-192.168.80.2"
        );
        assert_eq!(
            pool_range("192.168.80.0/31").expect("pool"),
            usable_range("192.168.80.0/31").expect("usable")
        );
    }

    #[test]
    fn cidr_parse_errors() {
        for input in ["192.168.1.0", "192.168.1.0/", "192.168.1.0/x", "192.168.1.0/40", "1.2.3/8"] {
            let err = input.parse::<Cidr>().expect_err(input);
            assert!(matches!(err, Error::InvalidCidr { .. }), "{input}");
        }
    }

    #[test]
    fn cidr_round_trips_through_display() {
        let cidr: Cidr = " 10.1.2.3/16 ".parse().expect("parse");
        assert_eq!(cidr.to_string(), "10.1.2.3/16");
        assert_eq!(cidr.network(), ip("10.1.0.0"));
        assert_eq!(cidr.broadcast(), ip("10.1.255.255"));
    }

    #[test]
    fn pool_fragment_has_one_add_line() {
        let range = AddressRange::new(ip("192.168.70.2"), ip("192.168.70.254"));
        let fragment = ip_pool_fragment("pptp", &range, "PPTP pool");
        assert_eq!(
            fragment.get(&MenuPath::menu("/ip pool")),
            Some(
                &[r#"add name=pptp ranges=192.168.70.2-192.168.70.254 comment="PPTP pool""#
                    .to_string()][..]
            )
        );
    }

    #[test]
    fn pool_comment_specials_are_escaped() {
        let range = AddressRange::new(ip("10.0.0.2"), ip("10.0.0.9"));
        let fragment = ip_pool_fragment("p", &range, r#"say "hi" for $5 \ day"#);
        assert_eq!(
            fragment.get(&MenuPath::menu("/ip pool")),
            Some(
                &[r#"add name=p ranges=10.0.0.2-10.0.0.9 comment="say \"hi\" for \$5 \\ day""#
                    .to_string()][..]
            )
        );
    }
}
