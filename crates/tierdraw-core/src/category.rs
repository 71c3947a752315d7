//! Node categories and the tier policy that places them in rows.
//!
//! A [`Category`] is the coarse classification attached to every node. The
//! set is closed: tags that are not recognized resolve to
//! [`Category::Unclassified`] instead of being rejected, so a node is never
//! dropped for lack of a classification.
//!
//! Each category maps to a [`Tier`], the horizontal row it is drawn in.
//! Tiers are numbered from the top of the diagram (tier `0`) down to
//! `TIER_COUNT - 1`.
//!
//! # Example
//!
//! ```
//! use tierdraw_core::category::{Category, Tier};
//!
//! let category = Category::from_type_tag("aws.network.route53");
//! assert_eq!(category, Category::DnsRouting);
//! assert_eq!(category.tier(), Tier::new(1).unwrap());
//!
//! // Unknown tags fall back to the default tier.
//! assert_eq!(Category::from_type_tag("mainframe").tier(), Tier::DEFAULT);
//! ```

use std::{fmt, str::FromStr};

/// Number of tier rows a diagram can have.
pub const TIER_COUNT: usize = 5;

/// A horizontal row in the tiered layout, in `0..TIER_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tier(u8);

impl Tier {
    /// Tier used for [`Category::Unclassified`] nodes.
    ///
    /// Sits next to the compute row rather than at either edge of the diagram.
    pub const DEFAULT: Tier = Tier(3);

    /// Creates a tier, returning `None` when `index` is not below [`TIER_COUNT`].
    pub fn new(index: usize) -> Option<Self> {
        (index < TIER_COUNT).then_some(Self(index as u8))
    }

    /// Returns the zero-based row index of this tier.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterates over all tiers from top to bottom.
    pub fn all() -> impl Iterator<Item = Tier> {
        (0..TIER_COUNT).map(|index| Tier(index as u8))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification of a node, deciding which tier it is placed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    /// A person using the system.
    HumanActor,
    /// A browser, mobile app or other client program.
    GenericClient,
    /// DNS resolution and request routing.
    DnsRouting,
    /// A load balancer in front of the compute fleet.
    LoadBalancer,
    /// Application servers, containers or auto-scaling groups.
    ComputeFleet,
    /// A relational or document database.
    Database,
    /// Blob or object storage.
    ObjectStore,
    /// Any tag outside the known set.
    #[default]
    Unclassified,
}

impl Category {
    /// Resolves a type tag to a category.
    ///
    /// Both the canonical kebab-case names (`"load-balancer"`) and the
    /// provider tags emitted upstream (`"aws.network.elb_application_load_balancer"`)
    /// are recognized. Surrounding whitespace is ignored; anything else is
    /// [`Category::Unclassified`].
    pub fn from_type_tag(tag: &str) -> Self {
        match tag.trim() {
            "human-actor" | "user" => Category::HumanActor,
            "generic-client" | "generic_client" => Category::GenericClient,
            "dns-routing" | "aws.network.route53" => Category::DnsRouting,
            "load-balancer" | "aws.network.elb_application_load_balancer" => {
                Category::LoadBalancer
            }
            "compute-fleet" | "aws.compute.ec2_auto_scaling" => Category::ComputeFleet,
            "database" | "aws.database.rds_postgresql_instance" => Category::Database,
            "object-store" | "aws.storage.s3" => Category::ObjectStore,
            _ => Category::Unclassified,
        }
    }

    /// Returns the tier this category is drawn in.
    pub fn tier(self) -> Tier {
        match self {
            Category::HumanActor | Category::GenericClient => Tier(0),
            Category::DnsRouting => Tier(1),
            Category::LoadBalancer => Tier(2),
            Category::ComputeFleet => Tier(3),
            Category::Database | Category::ObjectStore => Tier(4),
            Category::Unclassified => Tier::DEFAULT,
        }
    }

    /// Returns the canonical kebab-case name of this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::HumanActor => "human-actor",
            Category::GenericClient => "generic-client",
            Category::DnsRouting => "dns-routing",
            Category::LoadBalancer => "load-balancer",
            Category::ComputeFleet => "compute-fleet",
            Category::Database => "database",
            Category::ObjectStore => "object-store",
            Category::Unclassified => "unclassified",
        }
    }

    /// Returns `true` for the fallback category.
    pub fn is_unclassified(self) -> bool {
        matches!(self, Category::Unclassified)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_type_tag(s))
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn every_tag_has_a_valid_tier(tag in ".*") {
            let tier = Category::from_type_tag(&tag).tier();
            prop_assert!(tier.index() < TIER_COUNT);
        }
    }
}
