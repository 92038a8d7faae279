//! Demonstration records standing in for a seller backend.

use chrono::NaiveDate;

use crate::certification::Certification;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPerformance {
    pub key: &'static str,
    pub name: &'static str,
    pub visits: u32,
    pub purchased: u32,
}

impl ProductPerformance {
    /// Visit to purchase conversion, whole percent.
    pub fn ratio(&self) -> u32 {
        if self.visits == 0 {
            return 0;
        }
        (f64::from(self.purchased) * 100.0 / f64::from(self.visits)).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionPoint {
    pub month: &'static str,
    pub visits: u32,
    pub purchases: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrafficPoint {
    pub month: &'static str,
    pub organic: u32,
    pub social: u32,
    pub direct: u32,
    pub email: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    pub name: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFactor {
    pub label: &'static str,
    pub positive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trend {
    pub value: &'static str,
    pub positive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    SevenDays,
    #[default]
    ThirtyDays,
    NinetyDays,
    Year,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::SevenDays,
        TimeRange::ThirtyDays,
        TimeRange::NinetyDays,
        TimeRange::Year,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            TimeRange::SevenDays => "7days",
            TimeRange::ThirtyDays => "30days",
            TimeRange::NinetyDays => "90days",
            TimeRange::Year => "year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::SevenDays => "Last 7 Days",
            TimeRange::ThirtyDays => "Last 30 Days",
            TimeRange::NinetyDays => "Last 90 Days",
            TimeRange::Year => "Last Year",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.value() == value)
    }
}

/// `None` selects every product.
pub fn filter_products(
    products: &[ProductPerformance],
    key: Option<&str>,
) -> Vec<ProductPerformance> {
    products
        .iter()
        .filter(|p| key.is_none_or(|key| p.key == key))
        .cloned()
        .collect()
}

pub fn products() -> Vec<ProductPerformance> {
    vec![
        ProductPerformance {
            key: "bambooUtensils",
            name: "Bamboo Utensils",
            visits: 130,
            purchased: 87,
        },
        ProductPerformance {
            key: "reusableBags",
            name: "Reusable Bags",
            visits: 210,
            purchased: 132,
        },
        ProductPerformance {
            key: "waterBottles",
            name: "Water Bottles",
            visits: 180,
            purchased: 99,
        },
        ProductPerformance {
            key: "organicSoap",
            name: "Organic Soap",
            visits: 165,
            purchased: 105,
        },
        ProductPerformance {
            key: "compostablePlates",
            name: "Compostable Plates",
            visits: 140,
            purchased: 67,
        },
    ]
}

pub fn conversions() -> Vec<ConversionPoint> {
    [
        ("Jan", 1000, 400),
        ("Feb", 1200, 600),
        ("Mar", 1500, 750),
        ("Apr", 1300, 850),
        ("May", 1700, 1000),
        ("Jun", 1600, 1200),
    ]
    .into_iter()
    .map(|(month, visits, purchases)| ConversionPoint {
        month,
        visits,
        purchases,
    })
    .collect()
}

pub fn traffic() -> Vec<TrafficPoint> {
    [
        ("Jan", 400, 240, 200, 120),
        ("Feb", 500, 250, 220, 180),
        ("Mar", 600, 300, 250, 190),
        ("Apr", 550, 320, 230, 220),
        ("May", 700, 400, 280, 250),
        ("Jun", 800, 450, 300, 270),
    ]
    .into_iter()
    .map(|(month, organic, social, direct, email)| TrafficPoint {
        month,
        organic,
        social,
        direct,
        email,
    })
    .collect()
}

pub fn traffic_sources() -> Vec<Share> {
    vec![
        Share { name: "Organic Search", value: 42 },
        Share { name: "Social Media", value: 23 },
        Share { name: "Direct", value: 18 },
        Share { name: "Email", value: 12 },
        Share { name: "Referral", value: 5 },
    ]
}

pub fn demographics() -> Vec<Share> {
    vec![
        Share { name: "18-24", value: 15 },
        Share { name: "25-34", value: 35 },
        Share { name: "35-44", value: 25 },
        Share { name: "45-54", value: 15 },
        Share { name: "55+", value: 10 },
    ]
}

pub fn eco_interests() -> Vec<Share> {
    vec![
        Share { name: "Zero Waste", value: 65 },
        Share { name: "Sustainable", value: 78 },
        Share { name: "Organic", value: 60 },
        Share { name: "Vegan", value: 45 },
        Share { name: "Plastic-Free", value: 72 },
    ]
}

pub fn product_factors() -> Vec<ProductFactor> {
    [
        ("Sustainable Materials", true),
        ("Carbon Neutral Shipping", true),
        ("Biodegradable Packaging", true),
        ("Great User Reviews", true),
        ("High Shipping Cost", false),
        ("Limited Color Options", false),
        ("Delivery Time", false),
    ]
    .into_iter()
    .map(|(label, positive)| ProductFactor { label, positive })
    .collect()
}

pub fn stats() -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Total Products",
            value: "12",
            trend: Trend { value: "25%", positive: true },
        },
        StatCard {
            title: "Visit to Purchase",
            value: "67%",
            trend: Trend { value: "5%", positive: true },
        },
        StatCard {
            title: "Certifications",
            value: "5",
            trend: Trend { value: "2", positive: true },
        },
    ]
}

pub fn certifications() -> Vec<Certification> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    vec![
        Certification {
            id: 1,
            name: "Green Business Certified".to_string(),
            issuer: "Green Business Alliance".to_string(),
            issue_date: date(2024, 6, 15),
            expiry_date: Some(date(2025, 6, 15)),
            description: Some(
                "Certifies businesses that follow environmentally friendly practices and operations."
                    .to_string(),
            ),
            attachment: None,
        },
        Certification {
            id: 2,
            name: "Zero Waste Certification".to_string(),
            issuer: "Environmental Standards Board".to_string(),
            issue_date: date(2024, 3, 3),
            expiry_date: Some(date(2025, 3, 3)),
            description: Some(
                "Awarded to businesses that divert at least 90% of waste from landfills and incinerators."
                    .to_string(),
            ),
            attachment: None,
        },
        Certification {
            id: 3,
            name: "Sustainable Materials".to_string(),
            issuer: "Global Eco Products Association".to_string(),
            issue_date: date(2023, 11, 20),
            expiry_date: Some(date(2024, 11, 20)),
            description: Some(
                "Certifies that products are made from sustainable and renewable materials."
                    .to_string(),
            ),
            attachment: None,
        },
    ]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_conversion_ratio() {
        let ratios: Vec<_> = products().iter().map(ProductPerformance::ratio).collect();
        assert_eq!(ratios, [67, 63, 55, 64, 48]);

        let idle = ProductPerformance {
            key: "idle",
            name: "Idle",
            visits: 0,
            purchased: 0,
        };
        assert_eq!(idle.ratio(), 0);
    }

    #[test]
    fn test_filter_products() {
        let all = products();
        assert_eq!(filter_products(&all, None).len(), 5);

        let soap = filter_products(&all, Some("organicSoap"));
        assert_eq!(soap.len(), 1);
        assert_eq!(soap[0].name, "Organic Soap");

        assert!(filter_products(&all, Some("unknown")).is_empty());
    }

    #[test]
    fn test_shares_sum_to_hundred() {
        assert_eq!(traffic_sources().iter().map(|s| s.value).sum::<u32>(), 100);
        assert_eq!(demographics().iter().map(|s| s.value).sum::<u32>(), 100);
    }

    #[test]
    fn test_time_range_values() {
        for range in TimeRange::ALL {
            assert_eq!(TimeRange::from_value(range.value()), Some(range));
        }
        assert_eq!(TimeRange::default().label(), "Last 30 Days");
    }
}
