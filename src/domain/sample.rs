//! Fixed sample catalog
//!
//! Substituted whenever the live `properties` table errors or comes back
//! empty. Listing views use the short blurb, property pages the long one.

use rust_decimal::Decimal;

use super::property::Property;

struct SampleProperty {
    id: &'static str,
    title: &'static str,
    summary: &'static str,
    description: &'static str,
    price: i64,
    location: &'static str,
    bedrooms: i32,
    bathrooms: i32,
    area: &'static str,
    image_url: &'static str,
}

impl SampleProperty {
    fn to_property(&self, description: &str) -> Property {
        Property {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: description.to_string(),
            price: Decimal::new(self.price, 0),
            location: self.location.to_string(),
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            area: self.area.to_string(),
            image_url: self.image_url.to_string(),
        }
    }
}

const CATALOG: &[SampleProperty] = &[
    SampleProperty {
        id: "1",
        title: "Modern Downtown Penthouse",
        summary: "Stunning 3-bedroom penthouse with panoramic city views and state-of-the-art amenities.",
        description: "Stunning 3-bedroom penthouse with panoramic city views and state-of-the-art amenities. This luxurious property features floor-to-ceiling windows, a gourmet kitchen with premium appliances, spa-like bathrooms, and a private terrace perfect for entertaining. Located in the heart of the city with easy access to fine dining, shopping, and entertainment.",
        price: 2_500_000,
        location: "Downtown District",
        bedrooms: 3,
        bathrooms: 3,
        area: "2,500 sqft",
        image_url: "https://images.pexels.com/photos/323780/pexels-photo-323780.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
    SampleProperty {
        id: "2",
        title: "Waterfront Luxury Villa",
        summary: "Exclusive beachfront property with private access, infinity pool, and sunset views.",
        description: "Exclusive beachfront property with private access, infinity pool, and sunset views. This magnificent villa offers direct beach access, spacious outdoor living areas, and breathtaking ocean views from every room. Features include a chef's kitchen, wine cellar, home theater, and a master suite with a private balcony overlooking the water.",
        price: 3_200_000,
        location: "Oceanside",
        bedrooms: 4,
        bathrooms: 4,
        area: "3,200 sqft",
        image_url: "https://images.pexels.com/photos/1797393/pexels-photo-1797393.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
    SampleProperty {
        id: "3",
        title: "Contemporary Garden Estate",
        summary: "Sophisticated 4-bedroom home nestled in lush gardens with resort-like amenities.",
        description: "Sophisticated 4-bedroom home nestled in lush gardens with resort-like amenities. This stunning estate features expansive living spaces, high ceilings, and walls of glass that blur the line between indoor and outdoor living. Enjoy the heated pool, outdoor kitchen, and beautifully landscaped gardens that provide complete privacy.",
        price: 1_800_000,
        location: "Suburban Haven",
        bedrooms: 4,
        bathrooms: 3,
        area: "3,500 sqft",
        image_url: "https://images.pexels.com/photos/1722175/pexels-photo-1722175.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
    SampleProperty {
        id: "4",
        title: "Urban Loft Development",
        summary: "Trendy 2-bedroom loft in vibrant neighborhood with modern finishes and high ceilings.",
        description: "Trendy 2-bedroom loft in vibrant neighborhood with modern finishes and high ceilings. This open-concept space features exposed brick, polished concrete floors, and oversized windows that flood the space with natural light. The building offers amenities including a fitness center, rooftop deck, and secure parking.",
        price: 950_000,
        location: "Arts District",
        bedrooms: 2,
        bathrooms: 2,
        area: "1,600 sqft",
        image_url: "https://images.pexels.com/photos/1571460/pexels-photo-1571460.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
    SampleProperty {
        id: "5",
        title: "Historic Manor House",
        summary: "Restored Victorian mansion combining classic architecture with modern conveniences.",
        description: "Restored Victorian mansion combining classic architecture with modern conveniences. This meticulously preserved home features original hardwood floors, ornate moldings, and period details throughout. Updated with modern systems while maintaining its historic charm, including a newly renovated kitchen and spa bathrooms.",
        price: 2_100_000,
        location: "Heritage District",
        bedrooms: 5,
        bathrooms: 4,
        area: "4,200 sqft",
        image_url: "https://images.pexels.com/photos/2507007/pexels-photo-2507007.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
    SampleProperty {
        id: "6",
        title: "Mountain View Retreat",
        summary: "Serene alpine property with breathtaking views, perfect for peaceful getaway.",
        description: "Serene alpine property with breathtaking views, perfect for peaceful getaway. This mountain retreat offers panoramic vistas, a stone fireplace, vaulted ceilings, and a wrap-around deck. The perfect blend of rustic charm and modern comfort, with hiking trails right outside your door.",
        price: 1_500_000,
        location: "Mountain Ridge",
        bedrooms: 3,
        bathrooms: 3,
        area: "2,800 sqft",
        image_url: "https://images.pexels.com/photos/3617457/pexels-photo-3617457.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
];

/// Every sample property, with listing-length descriptions.
pub fn listings() -> Vec<Property> {
    CATALOG.iter().map(|p| p.to_property(p.summary)).collect()
}

/// Sample properties matching `query` on title, location or description.
pub fn search(query: &str) -> Vec<Property> {
    listings().into_iter().filter(|p| p.matches(query)).collect()
}

/// Sample property page for `id`; unknown ids get the first sample.
pub fn detail(id: &str) -> Property {
    let sample = CATALOG
        .iter()
        .find(|p| p.id == id)
        .unwrap_or(&CATALOG[0]);
    sample.to_property(sample.description)
}
