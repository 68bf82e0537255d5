use std::cmp::Ordering;
use std::fmt;

/// Performance bracket derived from units sold.
///
/// Level 0: < 50, Level 1: 50-99, Level 2: 100-199, Level 3: >= 200.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Level0,
    Level1,
    Level2,
    Level3,
}

impl Tier {
    /// All tiers in ascending order.
    pub const ALL: [Tier; 4] = [Tier::Level0, Tier::Level1, Tier::Level2, Tier::Level3];

    pub fn from_units_sold(units_sold: i64) -> Self {
        if units_sold < 50 {
            Tier::Level0
        } else if units_sold < 100 {
            Tier::Level1
        } else if units_sold < 200 {
            Tier::Level2
        } else {
            Tier::Level3
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Tier::Level0 => 0,
            Tier::Level1 => 1,
            Tier::Level2 => 2,
            Tier::Level3 => 3,
        }
    }

    pub fn index(self) -> usize {
        self.level() as usize
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seller {
    name: String,
    identifier: i64,
    district: String,
    units_sold: i64,
    tier: Tier,
}

impl Seller {
    pub fn new(
        name: impl Into<String>,
        identifier: i64,
        district: impl Into<String>,
        units_sold: i64,
    ) -> Self {
        Self {
            name: name.into(),
            identifier,
            district: district.into(),
            units_sold,
            tier: Tier::from_units_sold(units_sold),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identifier(&self) -> i64 {
        self.identifier
    }

    pub fn district(&self) -> &str {
        &self.district
    }

    pub fn units_sold(&self) -> i64 {
        self.units_sold
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }
}

impl fmt::Display for Seller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: \t\t{}", self.name)?;
        writeln!(f, "SSN: \t\t{}", self.identifier)?;
        writeln!(f, "District: \t{}", self.district)?;
        writeln!(f, "Sold: \t\t{}", self.units_sold)
    }
}

/// Higher sales first. Ties compare equal.
pub fn by_units_sold_desc(a: &Seller, b: &Seller) -> Ordering {
    b.units_sold.cmp(&a.units_sold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        let cases = [
            (i64::MIN, 0),
            (-5, 0),
            (0, 0),
            (49, 0),
            (50, 1),
            (99, 1),
            (100, 2),
            (199, 2),
            (200, 3),
            (i64::MAX, 3),
        ];
        for (units, level) in cases {
            assert_eq!(
                Tier::from_units_sold(units).level(),
                level,
                "units_sold = {}",
                units
            );
        }
    }

    #[test]
    fn test_seller_derives_tier() {
        let seller = Seller::new("Alice", 111, "North", 120);
        assert_eq!(seller.tier(), Tier::Level2);
        assert_eq!(seller.name(), "Alice");
        assert_eq!(seller.identifier(), 111);
        assert_eq!(seller.district(), "North");
        assert_eq!(seller.units_sold(), 120);
    }

    #[test]
    fn test_seller_display() {
        let seller = Seller::new("Bob", 222, "South", 40);
        assert_eq!(
            seller.to_string(),
            "Name: \t\tBob\nSSN: \t\t222\nDistrict: \tSouth\nSold: \t\t40\n"
        );
    }

    #[test]
    fn test_by_units_sold_desc() {
        let high = Seller::new("A", 1, "X", 300);
        let low = Seller::new("B", 2, "Y", 10);
        assert_eq!(by_units_sold_desc(&high, &low), Ordering::Less);
        assert_eq!(by_units_sold_desc(&low, &high), Ordering::Greater);
        assert_eq!(by_units_sold_desc(&low, &low), Ordering::Equal);
    }

    #[test]
    fn test_tier_all_is_ascending() {
        let levels: Vec<u8> = Tier::ALL.iter().map(|t| t.level()).collect();
        assert_eq!(levels, vec![0, 1, 2, 3]);
    }
}
