use crate::domain::model::{by_units_sold_desc, Seller, Tier};
use std::cmp::Ordering;
use std::fmt;

/// Sellers entered during one session iteration, with a running count per tier.
#[derive(Debug, Clone, Default)]
pub struct SellerBook {
    sellers: Vec<Seller>,
    tier_counts: [usize; 4],
}

/// Upper bound on the up-front reservation; the count comes from user input.
const MAX_PREALLOCATED: usize = 1024;

impl SellerBook {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sellers: Vec::with_capacity(capacity.min(MAX_PREALLOCATED)),
            tier_counts: [0; 4],
        }
    }

    pub fn add(
        &mut self,
        name: impl Into<String>,
        identifier: i64,
        district: impl Into<String>,
        units_sold: i64,
    ) {
        let seller = Seller::new(name, identifier, district, units_sold);
        self.tier_counts[seller.tier().index()] += 1;
        tracing::debug!(
            "Added seller {} with {} units sold (level {})",
            seller.name(),
            seller.units_sold(),
            seller.tier()
        );
        self.sellers.push(seller);
    }

    /// Highest sales first.
    pub fn sort(&mut self) {
        self.sort_by(by_units_sold_desc);
    }

    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Seller, &Seller) -> Ordering,
    {
        self.sellers.sort_by(compare);
    }

    pub fn sellers(&self) -> &[Seller] {
        &self.sellers
    }

    pub fn len(&self) -> usize {
        self.sellers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sellers.is_empty()
    }

    pub fn tier_count(&self, tier: Tier) -> usize {
        self.tier_counts[tier.index()]
    }

    pub fn tier_counts(&self) -> [usize; 4] {
        self.tier_counts
    }

    /// Renders the report grouped by tier, lowest level first. Within a tier
    /// sellers keep their current order, so sort first for a ranked listing.
    pub fn render(&self) -> String {
        let mut result = String::new();

        for tier in Tier::ALL {
            let mut found = self.sellers.iter().filter(|s| s.tier() == tier).peekable();
            if found.peek().is_none() {
                continue;
            }

            result.push_str(&format!("-- Level {} --", tier));
            for seller in found {
                result.push('\n');
                result.push_str(&seller.to_string());
            }
            result.push_str(&format!(
                "{} sellers have reached level {}.\n\n",
                self.tier_count(tier),
                tier
            ));
        }

        result
    }
}

impl fmt::Display for SellerBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
