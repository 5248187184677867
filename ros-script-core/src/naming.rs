//! Resource names shared between generators.
//!
//! Generators never look each other up; a PPTP generator finds the PPP
//! profile that a segment generator created by computing the same name. All
//! of those names come from [`Naming`] so they cannot drift apart.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fragment::Fragment;
use crate::quote::quoted;
use crate::subnet::Cidr;

pub const ADDRESS_LIST_PATH: &str = "/ip firewall address-list";
pub const INTERFACE_LIST_PATH: &str = "/interface list";
pub const INTERFACE_LIST_MEMBER_PATH: &str = "/interface list member";
pub const PPP_PROFILE_PATH: &str = "/ppp profile";

/// A virtual traffic segment.
///
/// Parsing is lenient about case and the usual abbreviations but always
/// yields one canonical label per segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Segment {
    /// Remote-access clients.
    Vpn,
    Domestic,
    Foreign,
    Split,
    Custom(String),
}

impl Segment {
    pub fn label(&self) -> &str {
        match self {
            Self::Vpn => "VPN",
            Self::Domestic => "Domestic",
            Self::Foreign => "Foreign",
            Self::Split => "Split",
            Self::Custom(label) => label,
        }
    }
}

impl From<&str> for Segment {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "vpn" | "remote-access" | "remote_access" => Self::Vpn,
            "domestic" | "dom" => Self::Domestic,
            "foreign" | "for" | "frn" => Self::Foreign,
            "split" => Self::Split,
            _ => Self::Custom(value.trim().to_string()),
        }
    }
}

impl From<String> for Segment {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Segment> for String {
    fn from(value: Segment) -> Self {
        value.label().to_string()
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Suffix conventions for derived resource names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Naming {
    /// Appended to a segment label for address and interface lists.
    pub list_suffix: String,
    /// Appended to a service name for its PPP profile.
    pub profile_suffix: String,
    /// Appended to a service name for its address pool.
    pub pool_suffix: String,
}

impl Default for Naming {
    fn default() -> Self {
        Self {
            list_suffix: "-LAN".to_string(),
            profile_suffix: "-profile".to_string(),
            pool_suffix: "-pool".to_string(),
        }
    }
}

impl Naming {
    pub fn list_name(&self, segment: &Segment) -> String {
        format!("{}{}", segment.label(), self.list_suffix)
    }

    pub fn profile_name(&self, service: &str) -> String {
        format!("{service}{}", self.profile_suffix)
    }

    pub fn pool_name(&self, service: &str) -> String {
        format!("{service}{}", self.pool_suffix)
    }

    /// Add `subnet` to the segment's firewall address list.
    pub fn address_list_fragment(
        &self,
        subnet: &str,
        segment: &Segment,
        comment: &str,
    ) -> Result<Fragment> {
        let subnet: Cidr = subnet.parse()?;
        Ok(Fragment::single(
            ADDRESS_LIST_PATH,
            [format!(
                "add address={subnet} list={} comment={}",
                self.list_name(segment),
                quoted(comment)
            )],
        ))
    }

    /// Add `interface` to the segment's interface list.
    pub fn interface_list_fragment(
        &self,
        interface: &str,
        segment: &Segment,
        comment: &str,
    ) -> Fragment {
        Fragment::single(
            INTERFACE_LIST_MEMBER_PATH,
            [format!(
                "add interface={interface} list={} comment={}",
                self.list_name(segment),
                quoted(comment)
            )],
        )
    }

    /// Declare the segment's interface list itself.
    pub fn interface_list_definition(&self, segment: &Segment, comment: &str) -> Fragment {
        Fragment::single(
            INTERFACE_LIST_PATH,
            [format!(
                "add name={} comment={}",
                self.list_name(segment),
                quoted(comment)
            )],
        )
    }

    /// PPP profile for `service` on `subnet`.
    ///
    /// The router side takes the subnet's gateway address, clients draw from
    /// the service pool, and sessions join the segment's lists.
    pub fn ppp_profile_fragment(
        &self,
        subnet: &str,
        segment: &Segment,
        service: &str,
    ) -> Result<Fragment> {
        let gateway = subnet.parse::<Cidr>()?.gateway();
        let list = self.list_name(segment);
        Ok(Fragment::single(
            PPP_PROFILE_PATH,
            [format!(
                "add name={} local-address={gateway} remote-address={} dns-server={gateway} address-list={list} interface-list={list}",
                self.profile_name(service),
                self.pool_name(service),
            )],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{Naming, Segment};
    use crate::error::Error;
    use crate::path::MenuPath;

    #[test]
    fn abbreviations_collapse_to_one_label() {
        for raw in ["Domestic", "DOM", " domestic "] {
            assert_eq!(Segment::from(raw), Segment::Domestic);
        }
        for raw in ["Foreign", "FRN", "for"] {
            assert_eq!(Segment::from(raw).label(), "Foreign");
        }
        assert_eq!(Segment::from("remote-access"), Segment::Vpn);
        assert_eq!(Segment::from("Guest").label(), "Guest");
    }

    #[test]
    fn derived_names_follow_conventions() {
        let naming = Naming::default();
        assert_eq!(naming.list_name(&Segment::Vpn), "VPN-LAN");
        assert_eq!(naming.profile_name("pptp"), "pptp-profile");
        assert_eq!(naming.pool_name("pptp"), "pptp-pool");
    }

    #[test]
    fn names_agree_across_call_sites() {
        let naming = Naming::default();
        let segment = Segment::from("DOM");
        let member = naming.interface_list_fragment("ether2", &segment, "lan port");
        let definition = naming.interface_list_definition(&Segment::Domestic, "domestic");

        let member_line = &member.get(&MenuPath::menu("/interface list member")).expect("member")[0];
        let definition_line = &definition.get(&MenuPath::menu("/interface list")).expect("def")[0];
        assert!(member_line.contains("list=Domestic-LAN"));
        assert!(definition_line.contains("name=Domestic-LAN"));
    }

    #[test]
    fn address_list_entry() {
        let fragment = Naming::default()
            .address_list_fragment("192.168.10.0/24", &Segment::Split, "split clients")
            .expect("fragment");
        assert_eq!(
            fragment.get(&MenuPath::menu("/ip firewall address-list")),
            Some(&[r#"add address=192.168.10.0/24 list=Split-LAN comment="split clients""#.to_string()][..])
        );
    }

    #[test]
    fn list_comments_are_escaped() {
        let naming = Naming::default();
        let member = naming.interface_list_fragment("ether3", &Segment::Vpn, r#"the "$wan" port"#);
        assert_eq!(
            member.get(&MenuPath::menu("/interface list member")),
            Some(&[r#"add interface=ether3 list=VPN-LAN comment="the \"\$wan\" port""#.to_string()][..])
        );
    }

    #[test]
    fn address_list_rejects_bad_subnet() {
        let err = Naming::default()
            .address_list_fragment("192.168.10.0", &Segment::Vpn, "x")
            .expect_err("should fail");
        assert!(matches!(err, Error::InvalidCidr { .. }));
    }

    #[test]
    fn ppp_profile_uses_gateway_and_pool() {
        let fragment = Naming::default()
            .ppp_profile_fragment("192.168.70.0/24", &Segment::Vpn, "pptp")
            .expect("fragment");
        assert_eq!(
            fragment.get(&MenuPath::menu("/ppp profile")),
            Some(&["add name=pptp-profile local-address=192.168.70.1 remote-address=pptp-pool dns-server=192.168.70.1 address-list=VPN-LAN interface-list=VPN-LAN".to_string()][..])
        );
    }

    #[test]
    fn custom_suffixes_apply_everywhere() {
        let naming = Naming {
            list_suffix: "-NET".to_string(),
            ..Naming::default()
        };
        assert_eq!(naming.list_name(&Segment::Foreign), "Foreign-NET");
    }

    #[test]
    fn segment_deserializes_from_string() {
        let segment: Segment = serde_json::from_str(r#""frn""#).expect("deserialize");
        assert_eq!(segment, Segment::Foreign);
        assert_eq!(serde_json::to_string(&segment).expect("serialize"), r#""Foreign""#);
    }
}
