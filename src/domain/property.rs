use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize};

/// Property listing as stored in the `properties` table
///
/// Rows decode leniently: numeric ids become strings and nullable columns
/// read as their empty value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bedrooms: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bathrooms: i32,
    /// Display string, e.g. "2,500 sqft"
    #[serde(default, deserialize_with = "null_as_default")]
    pub area: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
}

/// `int8`, `uuid` and `text` keys all arrive as a string.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Property {
    /// Case-insensitive substring match over title, location and description.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.location.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

/// Where a listing result came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ListingSource {
    Live,
    Sample,
}

/// Property with its price pre-rendered for display
#[derive(Debug, Clone, Serialize)]
pub struct PropertyView {
    #[serde(flatten)]
    pub property: Property,
    pub price_display: String,
}

impl From<Property> for PropertyView {
    fn from(property: Property) -> Self {
        let price_display = format_price(property.price);
        Self {
            property,
            price_display,
        }
    }
}

/// A list of properties plus its provenance
#[derive(Debug, Clone)]
pub struct Listing {
    pub properties: Vec<Property>,
    pub source: ListingSource,
}

/// Response DTO for featured and search listings
#[derive(Debug, Clone, Serialize)]
pub struct ListingResponse {
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub summary: String,
    pub count: usize,
    pub source: ListingSource,
    pub properties: Vec<PropertyView>,
}

impl ListingResponse {
    pub fn new(heading: impl Into<String>, query: Option<String>, listing: Listing) -> Self {
        let properties: Vec<PropertyView> =
            listing.properties.into_iter().map(PropertyView::from).collect();
        let count = properties.len();

        Self {
            heading: heading.into(),
            query,
            summary: found_summary(count),
            count,
            source: listing.source,
            properties,
        }
    }
}

/// Response DTO for a single property page
#[derive(Debug, Clone, Serialize)]
pub struct PropertyDetailResponse {
    pub property: PropertyView,
    pub source: ListingSource,
    pub features: &'static [&'static str],
    pub agent: crate::domain::content::ContactDetails,
}

/// Highlights shown on every property page
pub const KEY_FEATURES: &[&str] = &[
    "Premium finishes throughout",
    "Modern kitchen appliances",
    "Energy-efficient systems",
    "Secure parking available",
    "Smart home technology",
    "Close to amenities",
];

fn found_summary(count: usize) -> String {
    format!("{} properties found", count)
}

/// Render a price the way the listings show it: `$2,500,000`, cents only when present.
pub fn format_price(price: Decimal) -> String {
    let rounded = price
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();

    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole.to_string(), Some(format!("{:0<2}", fraction))),
        None => (text, None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{}${}.{}", sign, grouped, fraction),
        None => format!("{}${}", sign, grouped),
    }
}
